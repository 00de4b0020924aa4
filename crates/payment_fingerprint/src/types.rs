//! Inputs and outputs of the fingerprint generator.

use std::fmt;

use masking::{ApiKey, Password, Secret};
use serde::{Deserialize, Serialize};

/// Fields the gateway authenticates, as entered in the payment form.
///
/// Built fresh for every preview or initialization and never stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFingerprintPayload {
    /// Merchant API key, possibly still the form placeholder.
    pub api_key: Secret<String, ApiKey>,
    /// Merchant username, possibly still the form placeholder.
    pub username: String,
    /// Merchant password, possibly still the form placeholder.
    pub password: Secret<String, Password>,
    /// Payment mode identifier.
    pub mode: String,
    /// Decimal amount, expected to be formatted with two decimal places.
    pub payment_amount: String,
    /// Merchant supplied identifier of the payment.
    pub merchant_unique_payment_id: String,
    /// `YYYY-MM-DDTHH:mm:ss`, no offset and no fractional seconds.
    pub timestamp: String,
}

/// API version of the gateway, which fixes the hash algorithm of the fingerprint.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ApiVersion {
    /// Legacy version, SHA-1 fingerprints.
    V3,
    /// SHA-512 fingerprints.
    V4,
    /// Current version, SHA-3-512 fingerprints.
    #[default]
    V5,
}

impl ApiVersion {
    /// Resolve the version selected in the form.
    ///
    /// An absent or unrecognized tag resolves to [`ApiVersion::V5`] instead of failing, so
    /// that tags introduced by newer gateways keep working. Tags are matched exactly
    /// (`v3`, `v4`, `v5`).
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|tag| tag.parse().ok()).unwrap_or_default()
    }

    /// Hash algorithm bound to this version.
    pub fn hash_algorithm(self) -> HashAlgorithm {
        HashAlgorithm::from(self)
    }
}

/// Hash algorithms a fingerprint can be computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum HashAlgorithm {
    /// SHA-1
    #[strum(serialize = "SHA-1")]
    Sha1,
    /// SHA-512
    #[strum(serialize = "SHA-512")]
    Sha512,
    /// SHA-3 with 512 bit output
    #[strum(serialize = "SHA-3-512")]
    Sha3_512,
}

impl HashAlgorithm {
    /// Length in bytes of a digest produced by this algorithm.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }
}

impl From<ApiVersion> for HashAlgorithm {
    fn from(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V3 => Self::Sha1,
            ApiVersion::V4 => Self::Sha512,
            ApiVersion::V5 => Self::Sha3_512,
        }
    }
}

/// Lowercase hex digest authenticating a payment request.
///
/// The empty value is a sentinel: credentials were missing and nothing was hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The "credentials missing" sentinel.
    pub fn missing() -> Self {
        Self(String::new())
    }

    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(common_utils::crypto::encode_hex_digest(digest))
    }

    /// Whether this is the sentinel rather than a computed digest.
    pub fn is_missing(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex digest, empty for the sentinel.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the hex digest string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn versions_map_to_fixed_algorithms() {
        let mapping = ApiVersion::iter()
            .map(|version| (version.to_string(), version.hash_algorithm().to_string()))
            .collect::<Vec<_>>();

        assert_eq!(
            mapping,
            vec![
                ("v3".to_string(), "SHA-1".to_string()),
                ("v4".to_string(), "SHA-512".to_string()),
                ("v5".to_string(), "SHA-3-512".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_or_absent_tag_falls_back_to_v5() {
        assert_eq!(ApiVersion::from_tag(Some("v3")), ApiVersion::V3);
        assert_eq!(ApiVersion::from_tag(Some("v4")), ApiVersion::V4);
        assert_eq!(ApiVersion::from_tag(Some("v6")), ApiVersion::V5);
        assert_eq!(ApiVersion::from_tag(Some("V3")), ApiVersion::V5);
        assert_eq!(ApiVersion::from_tag(Some("")), ApiVersion::V5);
        assert_eq!(ApiVersion::from_tag(None), ApiVersion::V5);
    }

    #[test]
    fn payload_deserializes_from_form_json() {
        use masking::PeekInterface;

        let payload: PaymentFingerprintPayload = serde_json::from_str(
            r#"{
                "apiKey": "KEY1",
                "username": "user1",
                "password": "pass1",
                "mode": "0",
                "paymentAmount": "10.00",
                "merchantUniquePaymentId": "PID1",
                "timestamp": "2024-01-01T00:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.api_key.peek(), "KEY1");
        assert_eq!(payload.password.peek(), "pass1");
        assert_eq!(payload.payment_amount, "10.00");
        assert!(!format!("{payload:?}").contains("pass1"));
    }

    #[test]
    fn fingerprint_sentinel() {
        assert!(Fingerprint::missing().is_missing());
        assert_eq!(Fingerprint::missing().to_string(), "");

        let fingerprint = Fingerprint::from_digest(&[0xab, 0x01]);
        assert!(!fingerprint.is_missing());
        assert_eq!(fingerprint.as_str(), "ab01");
        assert_eq!(serde_json::to_string(&fingerprint).unwrap(), r#""ab01""#);
    }
}
