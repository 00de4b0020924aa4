//! Fingerprint generation.
//!
//! The canonical string is
//!
//! ```text
//! <apiKey>|<username>|<password>|<mode>|<normalizedAmount>|<merchantUniquePaymentId>|<timestamp>
//! ```
//!
//! with the timestamp element left out entirely when
//! [`CompatibilityFlags::omit_timestamp_from_hash`] is set. The gateway recomputes the same
//! string, so every byte of it matters.

use std::borrow::Cow;

use common_utils::{
    crypto::{self, GenerateDigest},
    errors::{CryptoError, CustomResult},
};
use error_stack::ResultExt;
use masking::PeekInterface;

use crate::{
    compatibility::CompatibilityFlags,
    consts,
    errors::FingerprintError,
    types::{ApiVersion, Fingerprint, HashAlgorithm, PaymentFingerprintPayload},
};

/// Source of the digests behind each [`HashAlgorithm`].
pub trait DigestProvider {
    /// Digest `message` with `algorithm`.
    fn digest(
        &self,
        algorithm: HashAlgorithm,
        message: &[u8],
    ) -> CustomResult<Vec<u8>, CryptoError>;
}

/// Digests from `ring` (SHA-1, SHA-512) and `sha3` (SHA-3-512).
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformDigest;

impl DigestProvider for PlatformDigest {
    fn digest(
        &self,
        algorithm: HashAlgorithm,
        message: &[u8],
    ) -> CustomResult<Vec<u8>, CryptoError> {
        match algorithm {
            HashAlgorithm::Sha1 => crypto::Sha1.generate_digest(message),
            HashAlgorithm::Sha512 => crypto::Sha512.generate_digest(message),
            HashAlgorithm::Sha3_512 => crypto::Sha3_512.generate_digest(message),
        }
    }
}

/// Credential fields that may still hold their form placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// API key
    ApiKey,
    /// Username
    Username,
    /// Password
    Password,
}

impl Credential {
    /// Placeholder the form shows for this field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::ApiKey => consts::API_KEY_PLACEHOLDER,
            Self::Username => consts::USERNAME_PLACEHOLDER,
            Self::Password => consts::PASSWORD_PLACEHOLDER,
        }
    }
}

/// Empty string when `value` is still the placeholder of `credential`, `value` otherwise.
pub fn sanitize_credential(credential: Credential, value: &str) -> &str {
    if value == credential.placeholder() {
        ""
    } else {
        value
    }
}

/// Amount as it appears in the canonical string.
///
/// Custom amount mode always hashes `"0"`. Any other mode drops the first decimal point
/// (`"12.34"` becomes `"1234"`); the amount is not validated further.
pub fn normalize_amount<'a>(mode: &str, payment_amount: &'a str) -> Cow<'a, str> {
    if mode == consts::CUSTOM_AMOUNT_MODE {
        return Cow::Borrowed(consts::CUSTOM_AMOUNT_HASH_VALUE);
    }
    match payment_amount.split_once('.') {
        Some((whole, fraction)) => Cow::Owned(format!("{whole}{fraction}")),
        None => Cow::Borrowed(payment_amount),
    }
}

struct SanitizedCredentials<'a> {
    api_key: &'a str,
    username: &'a str,
    password: &'a str,
}

impl<'a> SanitizedCredentials<'a> {
    fn from_payload(payload: &'a PaymentFingerprintPayload) -> Self {
        Self {
            api_key: sanitize_credential(Credential::ApiKey, payload.api_key.peek()),
            username: sanitize_credential(Credential::Username, &payload.username),
            password: sanitize_credential(Credential::Password, payload.password.peek()),
        }
    }

    fn is_complete(&self) -> bool {
        !(self.api_key.is_empty() || self.username.is_empty() || self.password.is_empty())
    }
}

fn assemble_canonical_string(
    credentials: &SanitizedCredentials<'_>,
    payload: &PaymentFingerprintPayload,
    flags: CompatibilityFlags,
) -> String {
    let amount = normalize_amount(&payload.mode, &payload.payment_amount);
    let mut fields = vec![
        credentials.api_key,
        credentials.username,
        credentials.password,
        payload.mode.as_str(),
        amount.as_ref(),
        payload.merchant_unique_payment_id.as_str(),
    ];
    if !flags.omit_timestamp_from_hash {
        fields.push(payload.timestamp.as_str());
    }
    fields.join(consts::FIELD_SEPARATOR)
}

/// Canonical string the fingerprint is computed over, or `None` when a credential is missing
/// (empty or still its placeholder).
pub fn canonical_string(
    payload: &PaymentFingerprintPayload,
    flags: CompatibilityFlags,
) -> Option<String> {
    let credentials = SanitizedCredentials::from_payload(payload);
    credentials
        .is_complete()
        .then(|| assemble_canonical_string(&credentials, payload, flags))
}

/// Compute the payment security fingerprint with the platform digests.
///
/// Returns [`Fingerprint::missing`] without hashing anything when the API key, username or
/// password is empty or still its placeholder; callers must not initialize a live payment
/// in that case. Never logs and never retries.
pub fn generate_payment_security_fingerprint(
    payload: &PaymentFingerprintPayload,
    version: ApiVersion,
    flags: CompatibilityFlags,
) -> CustomResult<Fingerprint, FingerprintError> {
    generate_with_provider(&PlatformDigest, payload, version, flags)
}

/// [`generate_payment_security_fingerprint`] with an explicit digest source.
pub fn generate_with_provider<P>(
    provider: &P,
    payload: &PaymentFingerprintPayload,
    version: ApiVersion,
    flags: CompatibilityFlags,
) -> CustomResult<Fingerprint, FingerprintError>
where
    P: DigestProvider + ?Sized,
{
    let Some(canonical) = canonical_string(payload, flags) else {
        return Ok(Fingerprint::missing());
    };

    let algorithm = version.hash_algorithm();
    let digest = provider
        .digest(algorithm, canonical.as_bytes())
        .change_context(FingerprintError::GenerationFailed { algorithm })
        .attach_printable_lazy(|| format!("api version: {version}"))?;

    Ok(Fingerprint::from_digest(&digest))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn placeholders_sanitize_to_empty() {
        assert_eq!(
            sanitize_credential(Credential::ApiKey, consts::API_KEY_PLACEHOLDER),
            ""
        );
        assert_eq!(
            sanitize_credential(Credential::Username, consts::USERNAME_PLACEHOLDER),
            ""
        );
        assert_eq!(
            sanitize_credential(Credential::Password, consts::PASSWORD_PLACEHOLDER),
            ""
        );
        // only the field's own placeholder is stripped
        assert_eq!(
            sanitize_credential(Credential::Username, consts::API_KEY_PLACEHOLDER),
            consts::API_KEY_PLACEHOLDER
        );
        assert_eq!(sanitize_credential(Credential::ApiKey, "KEY1"), "KEY1");
    }

    #[test]
    fn custom_amount_mode_hashes_zero() {
        assert_eq!(normalize_amount("2", "12.34"), "0");
        assert_eq!(normalize_amount("2", ""), "0");
        assert_eq!(normalize_amount("2", "not an amount"), "0");
    }

    #[test]
    fn other_modes_drop_the_decimal_point() {
        assert_eq!(normalize_amount("0", "12.34"), "1234");
        assert_eq!(normalize_amount("1", "0.00"), "000");
        assert_eq!(normalize_amount("3", "1500"), "1500");
        assert_eq!(normalize_amount("0", "-5.10"), "-510");
        // only the first point is removed
        assert_eq!(normalize_amount("0", "1.2.3"), "12.3");
    }
}
