//! Boundary to the collaborators surrounding the action core.
//!
//! Nonce lookup, gas price suggestion and submission are provided by the
//! embedding application (usually backed by a node connection). The
//! [`sender::Sender`] ties them together with a signer.
use anyhow::Result;

use crate::{
    action::SignedEnvelope,
    common::{address::Address, crypto::hash::Hash, quantity::Quantity},
};

pub mod sender;
pub mod units;

pub use self::sender::Sender;

/// Source of account nonces.
pub trait NonceSource {
    /// Nonce the next envelope of the given account must carry.
    fn current_nonce(&self, account: &Address) -> Result<u64>;
}

/// Source of gas price suggestions.
pub trait GasPriceOracle {
    fn suggested_gas_price(&self) -> Result<Quantity>;
}

/// Channel through which signed envelopes reach the network.
pub trait Submitter {
    fn submit(&self, envelope: SignedEnvelope) -> Result<Receipt>;
}

/// Acknowledgement of a submitted envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Hash of the submitted signed envelope.
    pub hash: Hash,
}
