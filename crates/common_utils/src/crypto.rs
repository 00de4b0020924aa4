//! Utilities for cryptographic algorithms

use sha3::Digest;

use crate::errors::{self, CustomResult};

/// Trait for generating a digest for SHA
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Secure Hash Algorithm 1
///
/// Only used where a remote party still recomputes SHA-1 digests.
#[derive(Debug)]
pub struct Sha1;

/// Secure Hash Algorithm 512
#[derive(Debug)]
pub struct Sha512;

/// SHA-3 with a 512 bit output (Keccak, FIPS 202)
#[derive(Debug)]
pub struct Sha3_512;

impl GenerateDigest for Sha1 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = ring::digest::digest(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY, message);
        Ok(digest.as_ref().to_vec())
    }
}

impl GenerateDigest for Sha512 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = ring::digest::digest(&ring::digest::SHA512, message);
        Ok(digest.as_ref().to_vec())
    }
}

impl GenerateDigest for Sha3_512 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = sha3::Sha3_512::digest(message);
        Ok(digest.to_vec())
    }
}

/// Lowercase hex encoding of a digest.
pub fn encode_hex_digest(digest: impl AsRef<[u8]>) -> String {
    hex::encode(digest)
}
