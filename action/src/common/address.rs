//! Account address structures.
use std::fmt;

use anyhow::{anyhow, Result};
use bech32::{Bech32, Hrp};

use crate::common::crypto::{hash::Hash, signature::PublicKey};

const ADDRESS_SIZE: usize = 20;

const ADDRESS_CONTEXT: &[u8] = b"chain-action/address: account";

const ADDRESS_BECH32_HRP: Hrp = Hrp::parse_unchecked("io");

/// An account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Creates a new address from a public key.
    pub fn from_pk(pk: &PublicKey) -> Self {
        let h = Hash::digest_bytes_list(&[ADDRESS_CONTEXT, pk.as_ref()]);

        let mut a = [0; ADDRESS_SIZE];
        a.copy_from_slice(h.truncated(ADDRESS_SIZE));

        Address(a)
    }

    /// Tries to create a new address from Bech32-encoded string.
    pub fn from_bech32(data: &str) -> Result<Self> {
        let (hrp, data) = bech32::decode(data).map_err(|_| anyhow!("malformed address"))?;

        if hrp != ADDRESS_BECH32_HRP {
            return Err(anyhow!("malformed address"));
        }

        let sized: [u8; ADDRESS_SIZE] = data
            .as_slice()
            .try_into()
            .map_err(|_| anyhow!("malformed address"))?;
        Ok(Address(sized))
    }

    /// Converts an address to Bech32 representation.
    pub fn to_bech32(&self) -> String {
        bech32::encode::<Bech32>(ADDRESS_BECH32_HRP, &self.0).unwrap()
    }
}

impl std::str::FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_bech32(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(b: [u8; ADDRESS_SIZE]) -> Address {
        Address(b)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_bech32())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_bech32())
    }
}

impl cbor::Encode for Address {
    fn into_cbor_value(self) -> cbor::Value {
        cbor::Value::ByteString(self.as_ref().to_vec())
    }
}

impl cbor::Decode for Address {
    fn try_from_cbor_value(value: cbor::Value) -> Result<Self, cbor::DecodeError> {
        match value {
            cbor::Value::ByteString(data) => Ok(Address(
                data.try_into()
                    .map_err(|_| cbor::DecodeError::UnexpectedType)?,
            )),
            _ => Err(cbor::DecodeError::UnexpectedType),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Address;
    use crate::common::crypto::signature::PublicKey;

    #[test]
    fn test_address() {
        let pk =
            PublicKey::from("badadd1e55ffffffffffffffffffffffffffffffffffffffffffffffffffffff");

        let addr = Address::from_pk(&pk);
        let encoded = addr.to_bech32();
        assert!(encoded.starts_with("io1"));
        assert_eq!(Address::from_bech32(&encoded).unwrap(), addr);
        assert_eq!(encoded.parse::<Address>().unwrap(), addr);

        let other =
            PublicKey::from("badadd1e55fffffffffffffffffffffffffffffffffffffffffffffffffffffe");
        assert_ne!(Address::from_pk(&other), addr);
    }

    #[test]
    fn test_malformed() {
        assert!(Address::from_bech32("not an address").is_err());
        // Valid bech32 with a foreign human readable part.
        let foreign =
            bech32::encode::<bech32::Bech32>(bech32::Hrp::parse_unchecked("oasis"), &[0u8; 20])
                .unwrap();
        assert!(Address::from_bech32(&foreign).is_err());
        // Wrong payload size.
        let short =
            bech32::encode::<bech32::Bech32>(bech32::Hrp::parse_unchecked("io"), &[0u8; 10])
                .unwrap();
        assert!(Address::from_bech32(&short).is_err());
    }

    #[test]
    fn test_cbor() {
        let addr = Address::from([7u8; 20]);
        let dec: Address = cbor::from_slice(&cbor::to_vec(addr)).unwrap();
        assert_eq!(dec, addr);

        let bad = cbor::to_vec(cbor::Value::ByteString(vec![7u8; 21]));
        assert!(cbor::from_slice::<Address>(&bad).is_err());

        // An absent address has no default.
        let null = cbor::to_vec(cbor::Value::Simple(cbor::SimpleValue::NullValue));
        assert!(matches!(
            cbor::from_slice::<Address>(&null),
            Err(cbor::DecodeError::MissingField)
        ));
    }
}
