//! Typed actions, their cost model, and the envelopes carrying them.
//!
//! Every action kind is a variant of the closed [`Action`] union. Each kind
//! implements [`Payload`], which gives it the uniform wire encoding of
//! [`Codec`] plus intrinsic gas and cost. System actions (those originating
//! from the protocol itself rather than from a paying account) always report
//! zero gas and zero cost.
use crate::common::quantity::Quantity;

mod codec;
mod envelope;
mod error;
pub mod gas;
mod poll;
mod rewarding;
mod signed;
mod transfer;

// Re-exports.
pub use self::{
    codec::Codec,
    envelope::{AbstractAction, Envelope, EnvelopeBuilder},
    error::Error,
    poll::{new_put_poll_result, PutPollResult},
    rewarding::{
        new_grant_reward, ClaimFromRewardingFund, ClaimFromRewardingFundBuilder,
        DepositToRewardingFund, DepositToRewardingFundBuilder, GrantReward, RewardType,
    },
    signed::{SignedEnvelope, SIGNATURE_CONTEXT},
    transfer::{Transfer, TransferBuilder},
};

/// Capabilities shared by every action kind.
pub trait Payload: Codec + Into<Action> {
    /// Minimum gas the action's structure requires.
    fn intrinsic_gas(&self) -> Result<u64, Error>;

    /// Total amount the sender is charged at the given gas price.
    fn cost(&self, gas_price: &Quantity) -> Result<Quantity, Error>;

    /// Whether this is a system action carrying no user-paid gas.
    fn is_system(&self) -> bool {
        false
    }

    /// Encoding of the value wrapped in the [`Action`] union.
    fn serialize(&self) -> Vec<u8> {
        let action: Action = self.clone().into();
        cbor::to_vec(action)
    }
}

/// A typed state-transition request.
#[derive(Clone, Debug, PartialEq, Eq, cbor::Encode, cbor::Decode)]
pub enum Action {
    #[cbor(rename = "transfer")]
    Transfer(Transfer),

    #[cbor(rename = "claim_from_rewarding_fund")]
    ClaimFromRewardingFund(ClaimFromRewardingFund),

    #[cbor(rename = "deposit_to_rewarding_fund")]
    DepositToRewardingFund(DepositToRewardingFund),

    #[cbor(rename = "grant_reward")]
    GrantReward(GrantReward),

    #[cbor(rename = "put_poll_result")]
    PutPollResult(PutPollResult),
}

impl Codec for Action {}

impl Payload for Action {
    fn intrinsic_gas(&self) -> Result<u64, Error> {
        match self {
            Action::Transfer(act) => act.intrinsic_gas(),
            Action::ClaimFromRewardingFund(act) => act.intrinsic_gas(),
            Action::DepositToRewardingFund(act) => act.intrinsic_gas(),
            Action::GrantReward(act) => act.intrinsic_gas(),
            Action::PutPollResult(act) => act.intrinsic_gas(),
        }
    }

    fn cost(&self, gas_price: &Quantity) -> Result<Quantity, Error> {
        match self {
            Action::Transfer(act) => act.cost(gas_price),
            Action::ClaimFromRewardingFund(act) => act.cost(gas_price),
            Action::DepositToRewardingFund(act) => act.cost(gas_price),
            Action::GrantReward(act) => act.cost(gas_price),
            Action::PutPollResult(act) => act.cost(gas_price),
        }
    }

    fn is_system(&self) -> bool {
        match self {
            Action::Transfer(act) => act.is_system(),
            Action::ClaimFromRewardingFund(act) => act.is_system(),
            Action::DepositToRewardingFund(act) => act.is_system(),
            Action::GrantReward(act) => act.is_system(),
            Action::PutPollResult(act) => act.is_system(),
        }
    }
}

impl From<Transfer> for Action {
    fn from(act: Transfer) -> Self {
        Action::Transfer(act)
    }
}

impl From<ClaimFromRewardingFund> for Action {
    fn from(act: ClaimFromRewardingFund) -> Self {
        Action::ClaimFromRewardingFund(act)
    }
}

impl From<DepositToRewardingFund> for Action {
    fn from(act: DepositToRewardingFund) -> Self {
        Action::DepositToRewardingFund(act)
    }
}

impl From<GrantReward> for Action {
    fn from(act: GrantReward) -> Self {
        Action::GrantReward(act)
    }
}

impl From<PutPollResult> for Action {
    fn from(act: PutPollResult) -> Self {
        Action::PutPollResult(act)
    }
}

/// Gas fee of a user-paid action at the given gas price.
fn fee(intrinsic_gas: u64, gas_price: &Quantity) -> Quantity {
    gas_price.clone() * intrinsic_gas
}
