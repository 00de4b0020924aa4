use std::path::PathBuf;

use error_stack::{report, ResultExt};
use payment_fingerprint::{plugin::MerchantProfile, CompatibilityFlags};
use router_env::{config::Log, env};
use serde::Deserialize;

use crate::errors::{ApplicationError, ApplicationResult};

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "ZENPAY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub log: Log,
    /// Flags in effect when the harness starts.
    pub compatibility: CompatibilityFlags,
    pub merchant: Merchant,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Merchant {
    pub plugin_url: String,
    pub merchant_code: String,
    pub redirect_url: String,
    pub callback_url: Option<String>,
    /// Version used when the command line does not select one.
    pub default_api_version: Option<String>,
}

impl Merchant {
    pub fn profile(&self) -> MerchantProfile {
        MerchantProfile {
            plugin_url: self.plugin_url.clone(),
            merchant_code: self.merchant_code.clone(),
            redirect_url: self.redirect_url.clone(),
            callback_url: self.callback_url.clone(),
        }
    }
}

impl Settings {
    /// Layered configuration: the TOML file of the current environment (or `config_path`),
    /// then `ZENPAY__*` environment variables.
    ///
    /// The per-environment file may be absent; an explicit `config_path` must exist.
    pub fn with_config_path(config_path: Option<PathBuf>) -> ApplicationResult<Self> {
        let environment = env::which();
        let required = config_path.is_some();
        let config_path = Self::config_path(environment, config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(config_path.clone()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()
            .change_context(ApplicationError::ConfigurationError)
            .attach_printable_lazy(|| format!("config file: {}", config_path.display()))?;

        serde_path_to_error::deserialize(config).map_err(|error| {
            report!(ApplicationError::ConfigurationError)
                .attach_printable(format!("unable to deserialize `{}`", error.path()))
                .attach_printable(error.into_inner().to_string())
        })
    }

    pub fn config_path(environment: env::Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| {
            let mut config_path = env::workspace_path();
            config_path.push("config");
            config_path.push(environment.config_path());
            config_path
        })
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        self.merchant.validate()
    }
}
