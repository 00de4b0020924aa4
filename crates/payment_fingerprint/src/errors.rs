//! Errors raised while generating fingerprints and plugin configurations.

use crate::types::HashAlgorithm;

/// Errors from the fingerprint generator.
///
/// Missing credentials are not an error: the generator reports them through an empty
/// [`crate::Fingerprint`].
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// The digest primitive for `algorithm` failed; the underlying cause is attached to the
    /// report.
    #[error("Failed to generate payment fingerprint using {algorithm}")]
    GenerationFailed {
        /// Algorithm that was attempted
        algorithm: HashAlgorithm,
    },
}

impl FingerprintError {
    /// Algorithm the failed generation attempted.
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::GenerationFailed { algorithm } => *algorithm,
        }
    }
}

/// Errors from building what is handed to the payment plugin.
#[derive(Debug, thiserror::Error)]
pub enum PluginConfigurationError {
    /// The fingerprint is the empty sentinel, so a live payment must not be initialized.
    #[error("Payment fingerprint is missing: API key, username and password are required")]
    MissingCredentials,
    /// The configuration could not be rendered as JSON.
    #[error("Failed to serialize plugin configuration")]
    SerializationFailed,
}
