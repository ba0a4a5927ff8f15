//! An arbitrary precision unsigned integer.
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign},
};

use num_bigint::{BigInt, BigUint};
use num_traits::{Num, Zero};

/// An arbitrary precision unsigned integer.
///
/// Used for token amounts and gas prices. Encoded as a big-endian byte string
/// without leading zeroes; zero is the empty byte string.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(BigUint);

impl Quantity {
    /// Parses the canonical big-endian byte representation.
    ///
    /// Leading zeroes would give one value two encodings, so they are
    /// rejected.
    pub fn from_bytes_be(data: &[u8]) -> Option<Quantity> {
        if data.first() == Some(&0) {
            return None;
        }
        Some(Quantity(BigUint::from_bytes_be(data)))
    }

    /// Big-endian byte representation, empty for zero.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.0.is_zero() {
            return vec![];
        }
        self.0.to_bytes_be()
    }
}

impl Zero for Quantity {
    fn zero() -> Self {
        Quantity(BigUint::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Quantity {
    fn from(v: u64) -> Quantity {
        Quantity(BigUint::from(v))
    }
}

impl From<BigUint> for Quantity {
    fn from(v: BigUint) -> Quantity {
        Quantity(v)
    }
}

impl TryFrom<&BigInt> for Quantity {
    type Error = NegativeQuantity;

    fn try_from(v: &BigInt) -> Result<Quantity, NegativeQuantity> {
        v.to_biguint().map(Quantity).ok_or(NegativeQuantity)
    }
}

/// Error returned when converting a negative integer into a [`Quantity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("quantity: negative value")]
pub struct NegativeQuantity;

impl std::str::FromStr for Quantity {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str_radix(s, 10).map(Quantity)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(mut self, other: Quantity) -> Quantity {
        self += &other;
        self
    }
}

impl<'a> Add<&'a Quantity> for Quantity {
    type Output = Quantity;

    fn add(mut self, other: &Quantity) -> Quantity {
        self += other;
        self
    }
}

impl<'a> AddAssign<&'a Quantity> for Quantity {
    fn add_assign(&mut self, other: &Quantity) {
        self.0 += &other.0;
    }
}

impl AddAssign<Quantity> for Quantity {
    fn add_assign(&mut self, other: Quantity) {
        self.0 += other.0;
    }
}

impl Mul<u64> for Quantity {
    type Output = Quantity;

    fn mul(mut self, other: u64) -> Quantity {
        self *= other;
        self
    }
}

impl MulAssign<u64> for Quantity {
    fn mul_assign(&mut self, other: u64) {
        self.0 *= other;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl cbor::Encode for Quantity {
    fn is_empty(&self) -> bool {
        self.0.is_zero()
    }

    fn into_cbor_value(self) -> cbor::Value {
        cbor::Value::ByteString(self.to_bytes_be())
    }
}

impl cbor::Decode for Quantity {
    fn try_default() -> Result<Self, cbor::DecodeError> {
        Ok(Default::default())
    }

    fn try_from_cbor_value(value: cbor::Value) -> Result<Self, cbor::DecodeError> {
        match value {
            cbor::Value::ByteString(data) => {
                Quantity::from_bytes_be(&data).ok_or(cbor::DecodeError::UnexpectedType)
            }
            _ => Err(cbor::DecodeError::UnexpectedType),
        }
    }
}

impl serde::Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_str_radix(10))
        } else {
            serializer.serialize_bytes(&self.to_bytes_be())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct QuantityVisitor;

        impl<'de> serde::de::Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("bytes or decimal string expected")
            }

            fn visit_str<E>(self, data: &str) -> Result<Quantity, E>
            where
                E: serde::de::Error,
            {
                data.parse().map_err(serde::de::Error::custom)
            }

            fn visit_u64<E>(self, data: u64) -> Result<Quantity, E>
            where
                E: serde::de::Error,
            {
                Ok(Quantity::from(data))
            }

            fn visit_bytes<E>(self, data: &[u8]) -> Result<Quantity, E>
            where
                E: serde::de::Error,
            {
                Quantity::from_bytes_be(data)
                    .ok_or_else(|| serde::de::Error::custom("quantity: leading zero bytes"))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(QuantityVisitor)
        } else {
            deserializer.deserialize_bytes(QuantityVisitor)
        }
    }
}
