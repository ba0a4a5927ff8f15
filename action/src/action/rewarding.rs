//! Rewarding fund actions.
use num_bigint::BigInt;
use num_traits::Zero;

use super::{fee, gas, Codec, Envelope, Error, Payload};
use crate::common::quantity::Quantity;

/// Claim of accrued rewards from the rewarding fund.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct ClaimFromRewardingFund {
    /// Amount to claim.
    #[cbor(optional)]
    pub amount: Quantity,
    /// Free-form data attached to the claim.
    pub data: Vec<u8>,
}

impl Codec for ClaimFromRewardingFund {}

impl Payload for ClaimFromRewardingFund {
    fn intrinsic_gas(&self) -> Result<u64, Error> {
        gas::intrinsic_gas(
            gas::CLAIM_FROM_REWARDING_FUND_BASE_GAS,
            gas::CLAIM_FROM_REWARDING_FUND_GAS_PER_BYTE,
            self.data.len(),
        )
    }

    fn cost(&self, gas_price: &Quantity) -> Result<Quantity, Error> {
        // The claimed amount flows to the sender, only the fee is charged.
        Ok(fee(self.intrinsic_gas()?, gas_price))
    }
}

/// Deposit of tokens into the rewarding fund.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct DepositToRewardingFund {
    /// Amount to deposit.
    #[cbor(optional)]
    pub amount: Quantity,
    /// Free-form data attached to the deposit.
    pub data: Vec<u8>,
}

impl Codec for DepositToRewardingFund {}

impl Payload for DepositToRewardingFund {
    fn intrinsic_gas(&self) -> Result<u64, Error> {
        gas::intrinsic_gas(
            gas::DEPOSIT_TO_REWARDING_FUND_BASE_GAS,
            gas::DEPOSIT_TO_REWARDING_FUND_GAS_PER_BYTE,
            self.data.len(),
        )
    }

    fn cost(&self, gas_price: &Quantity) -> Result<Quantity, Error> {
        Ok(fee(self.intrinsic_gas()?, gas_price) + &self.amount)
    }
}

/// Kind of reward granted by the protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
#[repr(u8)]
pub enum RewardType {
    /// Reward for producing a block.
    #[default]
    BlockReward = 0,
    /// Reward distributed at the end of an epoch.
    EpochReward = 1,
}

/// System action granting block or epoch rewards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct GrantReward {
    pub reward_type: RewardType,
    pub height: u64,
}

impl GrantReward {
    pub fn new(reward_type: RewardType, height: u64) -> Self {
        GrantReward {
            reward_type,
            height,
        }
    }
}

impl Codec for GrantReward {}

impl Payload for GrantReward {
    fn intrinsic_gas(&self) -> Result<u64, Error> {
        Ok(0)
    }

    fn cost(&self, _gas_price: &Quantity) -> Result<Quantity, Error> {
        Ok(Quantity::zero())
    }

    fn is_system(&self) -> bool {
        true
    }
}

/// Creates the system envelope granting a reward at the given height.
pub fn new_grant_reward(nonce: u64, reward_type: RewardType, height: u64) -> Envelope {
    Envelope::system(nonce, GrantReward::new(reward_type, height))
}

/// Builder for [`ClaimFromRewardingFund`] actions.
#[derive(Default)]
pub struct ClaimFromRewardingFundBuilder {
    amount: BigInt,
    data: Vec<u8>,
}

impl ClaimFromRewardingFundBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        ClaimFromRewardingFundBuilder::default()
    }

    /// Set the amount to claim.
    pub fn set_amount(mut self, amount: BigInt) -> Self {
        self.amount = amount;
        self
    }

    /// Set the free-form data attached to the claim.
    pub fn set_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Finalize the claim.
    pub fn build(self) -> Result<ClaimFromRewardingFund, Error> {
        Ok(ClaimFromRewardingFund {
            amount: non_negative(&self.amount)?,
            data: self.data,
        })
    }
}

/// Builder for [`DepositToRewardingFund`] actions.
#[derive(Default)]
pub struct DepositToRewardingFundBuilder {
    amount: BigInt,
    data: Vec<u8>,
}

impl DepositToRewardingFundBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        DepositToRewardingFundBuilder::default()
    }

    /// Set the amount to deposit.
    pub fn set_amount(mut self, amount: BigInt) -> Self {
        self.amount = amount;
        self
    }

    /// Set the free-form data attached to the deposit.
    pub fn set_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Finalize the deposit.
    pub fn build(self) -> Result<DepositToRewardingFund, Error> {
        Ok(DepositToRewardingFund {
            amount: non_negative(&self.amount)?,
            data: self.data,
        })
    }
}

fn non_negative(amount: &BigInt) -> Result<Quantity, Error> {
    Quantity::try_from(amount)
        .map_err(|_| Error::InvalidArgument(format!("negative amount {}", amount)))
}
