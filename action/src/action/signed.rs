//! Signed envelopes.
use anyhow::{anyhow, Result};

use super::{
    envelope::{key, take},
    Action, Codec, Envelope,
};
use crate::common::{
    address::Address,
    crypto::{
        hash::Hash,
        signature::{PublicKey, Signature, Signer},
    },
    version,
};

/// Domain separation context for envelope signatures.
pub const SIGNATURE_CONTEXT: &[u8] = b"chain-action/envelope: signed envelope";

const SENDER_PUB_KEY_KEY: &str = "sender_pub_key";
const SIGNATURE_KEY: &str = "signature";

/// An envelope together with its sender's public key and signature.
///
/// Serialized as the envelope map extended with `sender_pub_key` and
/// `signature` fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedEnvelope {
    envelope: Envelope,
    sender_pub_key: PublicKey,
    signature: Signature,
}

impl SignedEnvelope {
    /// Signs the envelope.
    pub fn sign(envelope: Envelope, signer: &dyn Signer) -> Result<Self> {
        let signature = signer.sign(SIGNATURE_CONTEXT, &envelope.encode())?;

        Ok(SignedEnvelope {
            envelope,
            sender_pub_key: signer.public(),
            signature,
        })
    }

    /// Verifies the protocol version and the signature over the envelope.
    pub fn verify(&self) -> Result<()> {
        if !version::is_supported(self.envelope.version()) {
            return Err(anyhow!(
                "signed envelope: unsupported version {}",
                self.envelope.version()
            ));
        }
        self.signature
            .verify(&self.sender_pub_key, SIGNATURE_CONTEXT, &self.envelope.encode())
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }

    /// Public key of the sender.
    pub fn src_pubkey(&self) -> &PublicKey {
        &self.sender_pub_key
    }

    /// Account address of the sender.
    pub fn src_address(&self) -> Address {
        Address::from_pk(&self.sender_pub_key)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Producer of a published poll result, `None` for any other action.
    pub fn producer_public_key(&self) -> Option<&PublicKey> {
        match self.envelope.action() {
            Action::PutPollResult(_) => Some(&self.sender_pub_key),
            _ => None,
        }
    }

    /// Hash identifying the signed envelope.
    pub fn hash(&self) -> Hash {
        Hash::digest_bytes(&self.encode())
    }
}

impl cbor::Encode for SignedEnvelope {
    fn into_cbor_value(self) -> cbor::Value {
        let mut items = self.envelope.into_cbor_map();
        items.push((
            key(SENDER_PUB_KEY_KEY),
            cbor::Encode::into_cbor_value(self.sender_pub_key),
        ));
        items.push((
            key(SIGNATURE_KEY),
            cbor::Encode::into_cbor_value(self.signature),
        ));
        cbor::Value::Map(items)
    }
}

impl cbor::Decode for SignedEnvelope {
    fn try_from_cbor_value(value: cbor::Value) -> Result<Self, cbor::DecodeError> {
        match value {
            cbor::Value::Map(mut items) => {
                let sender_pub_key =
                    take(&mut items, SENDER_PUB_KEY_KEY).ok_or(cbor::DecodeError::MissingField)?;
                let signature =
                    take(&mut items, SIGNATURE_KEY).ok_or(cbor::DecodeError::MissingField)?;

                Ok(SignedEnvelope {
                    envelope: Envelope::try_from_cbor_map(items)?,
                    sender_pub_key: cbor::Decode::try_from_cbor_value(sender_pub_key)?,
                    signature: cbor::Decode::try_from_cbor_value(signature)?,
                })
            }
            _ => Err(cbor::DecodeError::UnexpectedType),
        }
    }
}

impl Codec for SignedEnvelope {}
