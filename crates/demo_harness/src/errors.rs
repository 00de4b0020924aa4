use common_utils::errors::CustomResult;

pub type ApplicationResult<T> = CustomResult<T, ApplicationError>;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application configuration error")]
    ConfigurationError,

    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),

    #[error("Unable to read the payment form: {0}")]
    InvalidPaymentForm(String),

    #[error("Payment fingerprint could not be generated")]
    FingerprintGenerationFailed,

    #[error("Plugin configuration could not be built")]
    PluginConfigurationFailed,

    #[error("Failed to write command output")]
    OutputFailed,
}
