//! Intrinsic gas policy for user-paid actions.
use super::Error;

/// Base intrinsic gas of a transfer.
pub const TRANSFER_BASE_INTRINSIC_GAS: u64 = 10_000;
/// Intrinsic gas per byte of transfer payload.
pub const TRANSFER_PAYLOAD_GAS: u64 = 100;

/// Base intrinsic gas of a claim from the rewarding fund.
pub const CLAIM_FROM_REWARDING_FUND_BASE_GAS: u64 = 10_000;
/// Intrinsic gas per byte of claim data.
pub const CLAIM_FROM_REWARDING_FUND_GAS_PER_BYTE: u64 = 100;

/// Base intrinsic gas of a deposit to the rewarding fund.
pub const DEPOSIT_TO_REWARDING_FUND_BASE_GAS: u64 = 10_000;
/// Intrinsic gas per byte of deposit data.
pub const DEPOSIT_TO_REWARDING_FUND_GAS_PER_BYTE: u64 = 100;

/// Computes `base + per_byte * payload_len`, failing on overflow.
pub fn intrinsic_gas(base: u64, per_byte: u64, payload_len: usize) -> Result<u64, Error> {
    let payload_len = u64::try_from(payload_len).map_err(|_| Error::GasOverflow)?;
    per_byte
        .checked_mul(payload_len)
        .and_then(|gas| gas.checked_add(base))
        .ok_or(Error::GasOverflow)
}
