//! Signature types.
use anyhow::{anyhow, Result};
use ed25519_dalek::{Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;

use super::hash::Hash;

impl_bytes!(PublicKey, 32, "An Ed25519 public key.");

impl_bytes!(Signature, 64, "An Ed25519 signature.");

/// An Ed25519 private key.
pub struct PrivateKey(SigningKey);

impl PrivateKey {
    /// Generates a new private key pair.
    pub fn generate() -> Self {
        PrivateKey(SigningKey::generate(&mut OsRng))
    }

    /// Generate a new private key from a test key seed.
    pub fn from_test_seed(seed: &str) -> Self {
        let seed = Hash::digest_bytes(seed.as_bytes());
        PrivateKey(SigningKey::from_bytes(&seed.0))
    }

    /// Loads the private key from its 32-byte secret.
    pub fn from_bytes(secret: &[u8]) -> Result<Self> {
        let secret: [u8; 32] = secret
            .try_into()
            .map_err(|_| anyhow!("signature: malformed private key"))?;
        Ok(PrivateKey(SigningKey::from_bytes(&secret)))
    }

    /// Returns the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes())
    }
}

impl Signer for PrivateKey {
    fn public(&self) -> PublicKey {
        self.public_key()
    }

    fn sign(&self, context: &[u8], message: &[u8]) -> Result<Signature> {
        let digest = Hash::digest_bytes_list(&[context, message]);
        Ok(Signature(self.0.sign(digest.as_ref()).to_bytes()))
    }
}

impl Signature {
    /// Verify signature.
    pub fn verify(&self, pk: &PublicKey, context: &[u8], message: &[u8]) -> Result<()> {
        let digest = Hash::digest_bytes_list(&[context, message]);

        let pk = VerifyingKey::from_bytes(&pk.0)
            .map_err(|_| anyhow!("signature: malformed public key"))?;
        let sig = ed25519_dalek::Signature::from_bytes(&self.0);

        pk.verify(digest.as_ref(), &sig)
            .map_err(|_| anyhow!("signature: verification failed"))
    }
}

/// A abstract signer.
pub trait Signer: Send + Sync {
    /// Returns the public key corresponding to the signing key.
    fn public(&self) -> PublicKey;

    /// Generates a signature over the context and message.
    fn sign(&self, context: &[u8], message: &[u8]) -> Result<Signature>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sign_verify() {
        let sk = PrivateKey::from_test_seed("sign verify");
        let pk = sk.public();
        let sig = sk.sign(b"context", b"message").unwrap();

        sig.verify(&pk, b"context", b"message")
            .expect("signature should verify");
        assert!(sig.verify(&pk, b"other context", b"message").is_err());
        assert!(sig.verify(&pk, b"context", b"other message").is_err());

        let other = PrivateKey::generate().public_key();
        assert!(sig.verify(&other, b"context", b"message").is_err());
    }

    #[test]
    fn test_deterministic_test_seed() {
        let a = PrivateKey::from_test_seed("seed").public_key();
        let b = PrivateKey::from_test_seed("seed").public_key();
        assert_eq!(a, b);
        assert_ne!(a, PrivateKey::from_test_seed("other seed").public_key());
    }

    #[test]
    fn test_from_bytes() {
        assert!(PrivateKey::from_bytes(&[1u8; 31]).is_err());
        let sk = PrivateKey::from_bytes(&[7u8; 32]).unwrap();
        assert_eq!(
            sk.public_key(),
            PrivateKey::from_bytes(&[7u8; 32]).unwrap().public_key()
        );
    }
}
