//! Uniform wire encoding shared by every action value.
use super::Error;

/// Canonical CBOR encoding and strict decoding.
pub trait Codec: Sized + Clone + cbor::Encode + cbor::Decode {
    /// Encodes the value. Equal values always produce identical bytes.
    fn encode(&self) -> Vec<u8> {
        cbor::to_vec(self.clone())
    }

    /// Decodes a fresh value.
    ///
    /// Truncated input, trailing data and structurally inconsistent fields are
    /// all rejected as [`Error::InvalidEncoding`]. So is any input that is not
    /// the canonical encoding of the decoded value, e.g. an optional field
    /// present with its empty value.
    fn decode(data: &[u8]) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let value: Self = cbor::from_slice(data)?;
        if cbor::to_vec(value.clone()) != data {
            return Err(Error::InvalidEncoding(cbor::DecodeError::ParsingFailed));
        }
        Ok(value)
    }

    /// Decodes into an existing destination.
    ///
    /// The destination is reset to its default value before decoding, so a
    /// failed decode leaves it reset and never partially populated.
    fn load(target: Option<&mut Self>, data: &[u8]) -> Result<(), Error>
    where
        Self: Default,
    {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let target = target.ok_or(Error::NilTarget)?;
        *target = Self::default();
        *target = Self::decode(data)?;
        Ok(())
    }
}
