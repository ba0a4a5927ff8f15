//! Hash type.
use sha2::{Digest, Sha512_256};

impl_bytes!(Hash, 32, "A 32-byte SHA-512/256 hash.");

impl Hash {
    /// Compute a digest of the passed slice of bytes.
    pub fn digest_bytes(data: &[u8]) -> Hash {
        let mut result = [0u8; 32];
        result[..].copy_from_slice(Sha512_256::digest(data).as_ref());

        Hash(result)
    }

    /// Compute a digest of the passed slices of bytes.
    pub fn digest_bytes_list(data: &[&[u8]]) -> Hash {
        let mut ctx = Sha512_256::new();
        for datum in data {
            ctx.update(datum);
        }

        let mut result = [0u8; 32];
        result[..].copy_from_slice(ctx.finalize().as_ref());

        Hash(result)
    }

    /// Hash truncated to the given number of bytes.
    pub fn truncated(&self, n: usize) -> &[u8] {
        &self.0[..n]
    }
}
