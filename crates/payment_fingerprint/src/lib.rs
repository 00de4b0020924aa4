#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

//!
//! Payment security fingerprint for the hosted payment plugin.
//!
//! The gateway authenticates a payment request by recomputing a digest over a canonical,
//! pipe-delimited rendering of the request fields. This crate builds that canonical string,
//! picks the hash algorithm from the API version and produces the lowercase hex fingerprint,
//! plus the plugin configuration and code preview the fingerprint is threaded into.
//!

pub mod compatibility;
pub mod consts;
pub mod errors;
pub mod generator;
pub mod plugin;
pub mod types;

pub use compatibility::{CompatibilityContext, CompatibilityFlags};
pub use generator::{
    generate_payment_security_fingerprint, generate_with_provider, DigestProvider, PlatformDigest,
};
pub use types::{ApiVersion, Fingerprint, HashAlgorithm, PaymentFingerprintPayload};
