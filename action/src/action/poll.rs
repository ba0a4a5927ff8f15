use num_traits::Zero;

use super::{Codec, Envelope, Error, Payload};
use crate::{common::quantity::Quantity, state::CandidateList};

/// System action publishing a poll result observed on the gravity chain.
///
/// The producer of the result is the signer of the enclosing envelope, see
/// [`SignedEnvelope::producer_public_key`](super::SignedEnvelope::producer_public_key).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct PutPollResult {
    height: u64,
    candidates: CandidateList,
}

impl PutPollResult {
    /// Creates a poll result, taking its own copy of the candidates.
    pub fn new(height: u64, candidates: &CandidateList) -> Self {
        PutPollResult {
            height,
            candidates: candidates.clone(),
        }
    }

    /// Gravity chain height the result was observed at.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Elected candidates in poll order.
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }
}

impl Codec for PutPollResult {}

impl Payload for PutPollResult {
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

/// Creates the system envelope publishing a poll result.
///
/// The envelope carries zero gas limit and zero gas price.
pub fn new_put_poll_result(nonce: u64, height: u64, candidates: &CandidateList) -> Envelope {
    Envelope::system(nonce, PutPollResult::new(height, candidates))
}
