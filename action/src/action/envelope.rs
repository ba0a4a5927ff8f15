//! Envelope header and composition.
use num_traits::Zero;

use super::{Action, Codec, Error, Payload};
use crate::common::{
    quantity::Quantity,
    version::{ProtocolVersion, PROTOCOL_VERSION},
};

/// Key of the action union in the serialized envelope.
pub(super) const ACTION_KEY: &str = "action";

/// Version key used in serialized form.
const VERSION_KEY: &str = "v";

/// Header keys recognized next to the action union.
const HEADER_KEYS: &[&str] = &[VERSION_KEY, "nonce", "gas_limit", "gas_price"];

/// Header shared by every envelope, independent of the action kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct AbstractAction {
    /// Protocol version the envelope was built for.
    #[cbor(rename = "v")]
    pub version: ProtocolVersion,
    /// Sender nonce. Ordering and uniqueness are enforced by the state
    /// transition layer.
    #[cbor(optional)]
    pub nonce: u64,
    /// Maximum gas the sender authorizes.
    #[cbor(optional)]
    pub gas_limit: u64,
    /// Price per unit of gas.
    #[cbor(optional)]
    pub gas_price: Quantity,
}

/// Header plus exactly one action, the unit that gets signed.
///
/// Serialized as a single map holding the header fields next to an `action`
/// field with the tagged action union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    header: AbstractAction,
    action: Action,
}

impl Envelope {
    /// Envelope for a system action: zero gas limit and zero gas price.
    pub(super) fn system<A: Payload>(nonce: u64, action: A) -> Self {
        Envelope {
            header: AbstractAction {
                version: PROTOCOL_VERSION,
                nonce,
                gas_limit: 0,
                gas_price: Quantity::zero(),
            },
            action: action.into(),
        }
    }

    pub fn version(&self) -> ProtocolVersion {
        self.header.version
    }

    pub fn nonce(&self) -> u64 {
        self.header.nonce
    }

    pub fn gas_limit(&self) -> u64 {
        self.header.gas_limit
    }

    pub fn gas_price(&self) -> &Quantity {
        &self.header.gas_price
    }

    pub fn header(&self) -> &AbstractAction {
        &self.header
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn into_action(self) -> Action {
        self.action
    }

    /// Intrinsic gas of the carried action.
    pub fn intrinsic_gas(&self) -> Result<u64, Error> {
        self.action.intrinsic_gas()
    }

    /// Cost of the carried action at the header gas price.
    pub fn cost(&self) -> Result<Quantity, Error> {
        self.action.cost(&self.header.gas_price)
    }

    /// Whether the carried action is a system action.
    pub fn is_system(&self) -> bool {
        self.action.is_system()
    }

    pub(super) fn into_cbor_map(self) -> Vec<(cbor::Value, cbor::Value)> {
        let mut items = cbor::EncodeAsMap::into_cbor_map(self.header);
        items.push((key(ACTION_KEY), cbor::Encode::into_cbor_value(self.action)));
        items
    }

    pub(super) fn try_from_cbor_map(
        mut items: Vec<(cbor::Value, cbor::Value)>,
    ) -> Result<Self, cbor::DecodeError> {
        let action = take(&mut items, ACTION_KEY).ok_or(cbor::DecodeError::MissingField)?;
        // The version is never omitted, zero included.
        if !items.iter().any(|(k, _)| *k == key(VERSION_KEY)) {
            return Err(cbor::DecodeError::MissingField);
        }
        if items
            .iter()
            .any(|(k, _)| !HEADER_KEYS.iter().any(|name| *k == key(name)))
        {
            return Err(cbor::DecodeError::UnknownField);
        }

        Ok(Envelope {
            header: cbor::Decode::try_from_cbor_value(cbor::Value::Map(items))?,
            action: cbor::Decode::try_from_cbor_value(action)?,
        })
    }
}

impl cbor::Encode for Envelope {
    fn into_cbor_value(self) -> cbor::Value {
        cbor::Value::Map(self.into_cbor_map())
    }
}

impl cbor::Decode for Envelope {
    fn try_from_cbor_value(value: cbor::Value) -> Result<Self, cbor::DecodeError> {
        match value {
            cbor::Value::Map(items) => Envelope::try_from_cbor_map(items),
            _ => Err(cbor::DecodeError::UnexpectedType),
        }
    }
}

impl Codec for Envelope {}

/// Text key as a CBOR value.
pub(super) fn key(name: &str) -> cbor::Value {
    cbor::Value::TextString(name.to_string())
}

/// Removes the entry with the given key from a CBOR map.
pub(super) fn take(
    items: &mut Vec<(cbor::Value, cbor::Value)>,
    name: &str,
) -> Option<cbor::Value> {
    let k = key(name);
    let index = items.iter().position(|(v, _)| *v == k)?;
    Some(items.remove(index).1)
}

/// Builder for [`Envelope`]s.
///
/// The builder stores exactly the values it is given. Choosing a gas limit
/// (for example from the action's intrinsic gas) is up to the caller.
#[derive(Default)]
pub struct EnvelopeBuilder {
    nonce: u64,
    gas_limit: u64,
    gas_price: Quantity,
    action: Option<Action>,
}

impl EnvelopeBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        EnvelopeBuilder::default()
    }

    pub fn set_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn set_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn set_gas_price(mut self, gas_price: Quantity) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Set the carried action, replacing any previously set one.
    pub fn set_action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Commit the values set so far into a new envelope.
    pub fn build(self) -> Result<Envelope, Error> {
        let action = self
            .action
            .ok_or_else(|| Error::InvalidArgument("envelope without action".to_string()))?;

        Ok(Envelope {
            header: AbstractAction {
                version: PROTOCOL_VERSION,
                nonce: self.nonce,
                gas_limit: self.gas_limit,
                gas_price: self.gas_price,
            },
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rustc_hex::ToHex;

    use super::*;
    use crate::{
        action::{new_put_poll_result, ClaimFromRewardingFundBuilder, TransferBuilder},
        common::address::Address,
        state::candidate::tests::candidate,
    };

    fn claim_envelope() -> Envelope {
        let claim = ClaimFromRewardingFundBuilder::new()
            .set_amount(BigInt::from(100))
            .set_data(b"claim".to_vec())
            .build()
            .unwrap();
        EnvelopeBuilder::new()
            .set_nonce(11)
            .set_gas_limit(20_000)
            .set_gas_price(Quantity::from(1_000_000_000_000))
            .set_action(claim)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_stores_given_values() {
        let tsf = TransferBuilder::new()
            .set_recipient(Address::from([2; 20]))
            .build()
            .unwrap();
        let env = EnvelopeBuilder::new()
            .set_nonce(1)
            .set_action(tsf.clone())
            .build()
            .unwrap();
        assert_eq!(env.version(), PROTOCOL_VERSION);
        assert_eq!(env.nonce(), 1);
        // No gas substitution happens here.
        assert_eq!(env.gas_limit(), 0);
        assert!(env.gas_price().is_zero());
        assert_eq!(env.action(), &Action::Transfer(tsf));
    }

    #[test]
    fn test_builder_requires_action() {
        let res = EnvelopeBuilder::new().set_nonce(1).set_gas_limit(10).build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_cost_uses_header_gas_price() {
        let env = claim_envelope();
        let gas = env.intrinsic_gas().unwrap();
        assert_eq!(gas, 10_000 + 5 * 100);
        assert_eq!(
            env.cost().unwrap(),
            Quantity::from(1_000_000_000_000) * gas
        );
        assert!(!env.is_system());
    }

    #[test]
    fn test_round_trip() {
        let env = claim_envelope();
        let dec = Envelope::decode(&env.encode()).unwrap();
        assert_eq!(dec, env);
        assert_eq!(dec.encode(), env.encode());

        let env = new_put_poll_result(0, 1, &vec![candidate(1, 1)].into());
        assert_eq!(Envelope::decode(&env.encode()).unwrap(), env);
    }

    #[test]
    fn test_serialization() {
        let claim = ClaimFromRewardingFundBuilder::new()
            .set_amount(BigInt::from(100))
            .build()
            .unwrap();
        let env = EnvelopeBuilder::new()
            .set_nonce(1)
            .set_gas_limit(10_000)
            .set_gas_price(Quantity::from(1_000_000_000_000))
            .set_action(claim)
            .build()
            .unwrap();

        let enc = env.encode();
        assert_eq!(
            enc.to_hex::<String>(),
            "a5617601656e6f6e63650166616374696f6ea17819636c61696d5f66726f6d5f72657761\
             7264696e675f66756e64a264646174614066616d6f756e744164696761735f6c696d6974\
             192710696761735f707269636545e8d4a51000",
            "serialization should match"
        );
        assert_eq!(Envelope::decode(&enc).unwrap(), env);
    }

    #[test]
    fn test_missing_version() {
        let mut items = claim_envelope().into_cbor_map();
        items.retain(|(k, _)| *k != key(VERSION_KEY));
        let enc = cbor::to_vec(cbor::Value::Map(items));
        assert!(matches!(
            Envelope::decode(&enc),
            Err(Error::InvalidEncoding(cbor::DecodeError::MissingField))
        ));
    }

    #[test]
    fn test_reject_malformed() {
        assert!(matches!(Envelope::decode(&[]), Err(Error::EmptyInput)));

        // Header without an action.
        let header = cbor::to_vec(claim_envelope().header().clone());
        assert!(matches!(
            Envelope::decode(&header),
            Err(Error::InvalidEncoding(_))
        ));

        // Unknown top-level field.
        let mut items = claim_envelope().into_cbor_map();
        items.push((key("memo"), cbor::Value::Unsigned(1)));
        let extra = cbor::to_vec(cbor::Value::Map(items));
        assert!(matches!(
            Envelope::decode(&extra),
            Err(Error::InvalidEncoding(_))
        ));

        // Not a map at all.
        let list = cbor::to_vec(cbor::Value::Array(vec![]));
        assert!(matches!(
            Envelope::decode(&list),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
