use common_utils::fp_utils::when;
use error_stack::report;

use crate::errors::{ApplicationError, ApplicationResult};

impl super::settings::Merchant {
    /// Only checked by commands that build a plugin configuration; the fingerprint alone needs
    /// no merchant profile.
    pub fn validate(&self) -> ApplicationResult<()> {
        when(self.plugin_url.trim().is_empty(), || {
            Err(report!(ApplicationError::InvalidConfigurationValueError(
                "merchant plugin url must not be empty".into(),
            )))
        })?;

        when(self.redirect_url.trim().is_empty(), || {
            Err(report!(ApplicationError::InvalidConfigurationValueError(
                "merchant redirect url must not be empty".into(),
            )))
        })?;

        when(
            self.callback_url
                .as_ref()
                .is_some_and(|url| url.trim().is_empty()),
            || {
                Err(report!(ApplicationError::InvalidConfigurationValueError(
                    "merchant callback url must not be empty when set".into(),
                )))
            },
        )
    }
}
