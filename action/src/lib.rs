//! Typed blockchain actions and the envelopes that carry them.
//!
//! An [`action::Action`] is one typed state-transition request. It is wrapped
//! together with a nonce, gas limit and gas price into an
//! [`action::Envelope`], which is then signed into an
//! [`action::SignedEnvelope`] and handed to a submission channel.
//!
//! # Examples
//!
//! ```rust,ignore
//! let claim = ClaimFromRewardingFundBuilder::new()
//!     .set_amount(BigInt::from(100))
//!     .build()?;
//! let envelope = EnvelopeBuilder::new()
//!     .set_nonce(1)
//!     .set_gas_limit(claim.intrinsic_gas()?)
//!     .set_gas_price(Quantity::from(1_000_000_000_000))
//!     .set_action(claim)
//!     .build()?;
//! ```

#[macro_use]
pub mod common;
pub mod action;
pub mod client;
pub mod config;
pub mod state;

// Re-exports.
pub use self::{
    action::{Action, Codec, Envelope, EnvelopeBuilder, Error, Payload, SignedEnvelope},
    config::Config,
    state::{Candidate, CandidateList},
};

// Re-export the cbor crate.
pub use cbor;
