//! Delegate candidates as observed on the gravity chain.
use std::ops::Deref;

use crate::{
    action::Codec,
    common::{address::Address, quantity::Quantity},
};

/// A voting-eligible candidate and its weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct Candidate {
    /// Operator address of the candidate.
    pub address: Address,
    /// Total votes cast for the candidate.
    pub votes: Quantity,
    /// Address receiving the candidate's rewards.
    pub reward_address: Address,
    /// Registered candidate name.
    pub name: Vec<u8>,
}

/// An ordered list of candidates.
///
/// The order is significant and preserved by the encoding. Decoding fails as a
/// whole if any single record is malformed, and an absent list is an error
/// rather than an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
#[cbor(transparent, no_default)]
pub struct CandidateList(pub Vec<Candidate>);

impl CandidateList {
    pub fn new(candidates: Vec<Candidate>) -> CandidateList {
        CandidateList(candidates)
    }

    /// Sum of the votes of all candidates in the list.
    pub fn total_votes(&self) -> Quantity {
        self.0
            .iter()
            .fold(Quantity::default(), |acc, c| acc + &c.votes)
    }
}

impl Codec for CandidateList {}

impl Deref for CandidateList {
    type Target = Vec<Candidate>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Candidate>> for CandidateList {
    fn from(other: Vec<Candidate>) -> CandidateList {
        CandidateList(other)
    }
}

impl From<CandidateList> for Vec<Candidate> {
    fn from(val: CandidateList) -> Self {
        val.0
    }
}

impl IntoIterator for CandidateList {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::action::Error;

    pub(crate) fn candidate(seed: u8, votes: u64) -> Candidate {
        Candidate {
            address: Address::from([seed; 20]),
            votes: Quantity::from(votes),
            reward_address: Address::from([seed.wrapping_add(1); 20]),
            name: format!("candidate-{}", seed).into_bytes(),
        }
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let list = CandidateList::new(vec![candidate(3, 10), candidate(1, 30), candidate(2, 20)]);
        let dec = CandidateList::decode(&list.encode()).unwrap();
        assert_eq!(dec, list);
        let order: Vec<_> = dec.iter().map(|c| c.address).collect();
        assert_eq!(
            order,
            vec![
                Address::from([3; 20]),
                Address::from([1; 20]),
                Address::from([2; 20])
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        let list = CandidateList::default();
        let enc = list.encode();
        // Empty CBOR array.
        assert_eq!(enc, vec![0x80]);
        assert_eq!(CandidateList::decode(&enc).unwrap(), list);
    }

    #[test]
    fn test_malformed_record_fails_list() {
        let good = cbor::Encode::into_cbor_value(candidate(1, 10));
        let enc = cbor::to_vec(cbor::Value::Array(vec![good, cbor::Value::Unsigned(7)]));
        assert!(matches!(
            CandidateList::decode(&enc),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_absent_list() {
        let null = cbor::to_vec(cbor::Value::Simple(cbor::SimpleValue::NullValue));
        assert!(matches!(
            CandidateList::decode(&null),
            Err(Error::InvalidEncoding(cbor::DecodeError::MissingField))
        ));
    }

    #[test]
    fn test_total_votes() {
        let list = CandidateList::from(vec![candidate(1, 10), candidate(2, 32)]);
        assert_eq!(list.total_votes(), Quantity::from(42));
        assert_eq!(CandidateList::default().total_votes(), Quantity::from(0));
    }
}
