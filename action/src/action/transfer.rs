use num_bigint::BigInt;

use super::{fee, gas, Codec, Error, Payload};
use crate::common::{address::Address, quantity::Quantity};

/// A token transfer between accounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, cbor::Encode, cbor::Decode)]
pub struct Transfer {
    /// Amount of tokens moved to the recipient.
    #[cbor(optional)]
    pub amount: Quantity,
    /// Receiving account.
    pub recipient: Address,
    /// Free-form data attached to the transfer.
    pub payload: Vec<u8>,
}

impl Codec for Transfer {}

impl Payload for Transfer {
    fn intrinsic_gas(&self) -> Result<u64, Error> {
        gas::intrinsic_gas(
            gas::TRANSFER_BASE_INTRINSIC_GAS,
            gas::TRANSFER_PAYLOAD_GAS,
            self.payload.len(),
        )
    }

    fn cost(&self, gas_price: &Quantity) -> Result<Quantity, Error> {
        Ok(fee(self.intrinsic_gas()?, gas_price) + &self.amount)
    }
}

/// Builder for [`Transfer`] actions.
#[derive(Default)]
pub struct TransferBuilder {
    amount: BigInt,
    recipient: Option<Address>,
    payload: Vec<u8>,
}

impl TransferBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        TransferBuilder::default()
    }

    /// Set the transferred amount.
    pub fn set_amount(mut self, amount: BigInt) -> Self {
        self.amount = amount;
        self
    }

    /// Set the receiving account.
    pub fn set_recipient(mut self, recipient: Address) -> Self {
        self.recipient = Some(recipient);
        self
    }

    /// Set the free-form data attached to the transfer.
    pub fn set_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Finalize the transfer.
    pub fn build(self) -> Result<Transfer, Error> {
        let amount = Quantity::try_from(&self.amount)
            .map_err(|_| Error::InvalidArgument(format!("negative amount {}", self.amount)))?;
        let recipient = self
            .recipient
            .ok_or_else(|| Error::InvalidArgument("missing recipient".to_string()))?;

        Ok(Transfer {
            amount,
            recipient,
            payload: self.payload,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builder() {
        let recipient = Address::from([1; 20]);
        let tsf = TransferBuilder::new()
            .set_amount(BigInt::from(250))
            .set_recipient(recipient)
            .set_payload(b"memo".to_vec())
            .build()
            .unwrap();
        assert_eq!(tsf.amount, Quantity::from(250));
        assert_eq!(tsf.recipient, recipient);
        assert_eq!(tsf.payload, b"memo".to_vec());
    }

    #[test]
    fn test_builder_validation() {
        let res = TransferBuilder::new()
            .set_amount(BigInt::from(-1))
            .set_recipient(Address::from([1; 20]))
            .build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = TransferBuilder::new().set_amount(BigInt::from(1)).build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_gas_and_cost() {
        let tsf = TransferBuilder::new()
            .set_amount(BigInt::from(1_000))
            .set_recipient(Address::from([1; 20]))
            .set_payload(vec![0; 10])
            .build()
            .unwrap();
        let gas = gas::TRANSFER_BASE_INTRINSIC_GAS + 10 * gas::TRANSFER_PAYLOAD_GAS;
        assert_eq!(tsf.intrinsic_gas().unwrap(), gas);
        assert_eq!(
            tsf.cost(&Quantity::from(2)).unwrap(),
            Quantity::from(2 * gas + 1_000)
        );
        assert!(!tsf.is_system());
    }

    #[test]
    fn test_round_trip() {
        let tsf = TransferBuilder::new()
            .set_recipient(Address::from([3; 20]))
            .build()
            .unwrap();
        assert_eq!(Transfer::decode(&tsf.encode()).unwrap(), tsf);
    }

    #[test]
    fn test_missing_recipient() {
        let empty = cbor::to_vec(cbor::Value::Map(vec![]));
        assert!(matches!(
            Transfer::decode(&empty),
            Err(Error::InvalidEncoding(cbor::DecodeError::MissingField))
        ));

        let no_recipient = cbor::to_vec(cbor::Value::Map(vec![(
            cbor::Value::TextString("payload".to_string()),
            cbor::Value::ByteString(vec![]),
        )]));
        assert!(matches!(
            Transfer::decode(&no_recipient),
            Err(Error::InvalidEncoding(cbor::DecodeError::MissingField))
        ));
    }
}
