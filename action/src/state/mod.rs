//! Chain state values carried by actions.
pub mod candidate;

pub use self::candidate::{Candidate, CandidateList};
