//! Command implementations: turn the payment form into a payload, compute its fingerprint and
//! render the plugin configuration.

use std::{io::Write, path::Path};

use error_stack::ResultExt;
use once_cell::sync::Lazy;
use payment_fingerprint::{
    consts,
    plugin::{self, PluginConfiguration},
    ApiVersion, CompatibilityContext, Fingerprint, PaymentFingerprintPayload,
};
use regex::Regex;
use serde::Deserialize;

use crate::{
    cli::{PaymentArgs, Subcommand},
    configs::Settings,
    errors::{ApplicationError, ApplicationResult},
    logger,
};

#[allow(clippy::expect_used)]
static PLAIN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+\.\d{2}$").expect("amount pattern is valid"));

/// Payment form as the browser submits it. Any field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentForm {
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub mode: Option<String>,
    pub payment_amount: Option<String>,
    pub merchant_unique_payment_id: Option<String>,
    pub timestamp: Option<String>,
    pub customer_reference: Option<String>,
}

impl PaymentForm {
    pub fn from_file(path: &Path) -> ApplicationResult<Self> {
        let contents = std::fs::read_to_string(path)
            .change_context(ApplicationError::InvalidPaymentForm(path.display().to_string()))?;
        serde_json::from_str(&contents)
            .change_context(ApplicationError::InvalidPaymentForm(path.display().to_string()))
    }

    /// Overlay the fields given on the command line.
    pub fn merge_args(self, args: &PaymentArgs) -> Self {
        Self {
            api_key: args.api_key.clone().or(self.api_key),
            username: args.username.clone().or(self.username),
            password: args.password.clone().or(self.password),
            mode: args.mode.clone().or(self.mode),
            payment_amount: args.payment_amount.clone().or(self.payment_amount),
            merchant_unique_payment_id: args
                .merchant_unique_payment_id
                .clone()
                .or(self.merchant_unique_payment_id),
            timestamp: args.timestamp.clone().or(self.timestamp),
            customer_reference: args.customer_reference.clone().or(self.customer_reference),
        }
    }

    /// Build the fingerprint payload. Untouched credentials keep their placeholder, like an
    /// untouched form; a missing timestamp is taken from the clock.
    pub fn into_payload(self) -> ApplicationResult<PaymentFingerprintPayload> {
        let timestamp = match self.timestamp {
            Some(timestamp) => timestamp,
            None => common_utils::date_time::gateway_timestamp()
                .change_context(ApplicationError::InvalidPaymentForm("timestamp".into()))?,
        };

        Ok(PaymentFingerprintPayload {
            api_key: self
                .api_key
                .unwrap_or_else(|| consts::API_KEY_PLACEHOLDER.to_string())
                .into(),
            username: self
                .username
                .unwrap_or_else(|| consts::USERNAME_PLACEHOLDER.to_string()),
            password: self
                .password
                .unwrap_or_else(|| consts::PASSWORD_PLACEHOLDER.to_string())
                .into(),
            mode: self.mode.unwrap_or_else(|| "0".to_string()),
            payment_amount: self.payment_amount.unwrap_or_else(|| "0.00".to_string()),
            merchant_unique_payment_id: self.merchant_unique_payment_id.unwrap_or_default(),
            timestamp,
        })
    }
}

fn read_form(args: &PaymentArgs) -> ApplicationResult<PaymentForm> {
    let form = match &args.payload_file {
        Some(path) => PaymentForm::from_file(path)?,
        None => PaymentForm::default(),
    };
    Ok(form.merge_args(args))
}

fn resolve_api_version(args: &PaymentArgs, settings: &Settings) -> ApiVersion {
    let tag = args
        .api_version
        .as_deref()
        .or(settings.merchant.default_api_version.as_deref());
    let version = ApiVersion::from_tag(tag);
    if let Some(tag) = tag.filter(|tag| *tag != version.to_string()) {
        logger::warn!(tag, %version, "unrecognized api version, falling back");
    }
    version
}

fn check_amount_format(payload: &PaymentFingerprintPayload) {
    if payload.mode != consts::CUSTOM_AMOUNT_MODE && !PLAIN_AMOUNT.is_match(&payload.payment_amount)
    {
        logger::warn!(
            payment_amount = %payload.payment_amount,
            "payment amount is not formatted with two decimal places"
        );
    }
}

/// Run `command`, writing its result to `out`.
pub fn run<W: Write>(
    command: &Subcommand,
    settings: &Settings,
    context: &CompatibilityContext,
    out: &mut W,
) -> ApplicationResult<()> {
    let args = command.payment_args();

    // Command line toggles can only switch flags on.
    let flags = context.update(|flags| {
        flags.omit_timestamp_from_hash |= args.omit_timestamp_from_hash;
        flags.omit_merchant_code_from_payload |= args.omit_merchant_code;
    });
    logger::debug!(?flags, "compatibility flags");

    let form = read_form(args)?;
    let customer_reference = form.customer_reference.clone();
    let payload = form.into_payload()?;
    let version = resolve_api_version(args, settings);
    check_amount_format(&payload);

    logger::info!(
        api_key = ?payload.api_key,
        username = %payload.username,
        merchant_unique_payment_id = %payload.merchant_unique_payment_id,
        %version,
        algorithm = %version.hash_algorithm(),
        "generating payment fingerprint"
    );

    let fingerprint = context
        .generate_fingerprint(&payload, version)
        .change_context(ApplicationError::FingerprintGenerationFailed)?;

    if fingerprint.is_missing() {
        logger::warn!("API key, username or password missing, payment cannot be initialized");
    }

    let output = match command {
        Subcommand::Fingerprint(_) => fingerprint.into_inner(),
        Subcommand::Preview(_) => {
            let configuration =
                plugin_configuration(settings, context, &payload, fingerprint, customer_reference)?;
            plugin::render_code_snippet(&configuration)
                .change_context(ApplicationError::PluginConfigurationFailed)?
        }
        Subcommand::PluginConfig(_) => {
            plugin_configuration(settings, context, &payload, fingerprint, customer_reference)?
                .to_json()
                .change_context(ApplicationError::PluginConfigurationFailed)?
        }
    };

    writeln!(out, "{}", output.trim_end()).change_context(ApplicationError::OutputFailed)
}

fn plugin_configuration(
    settings: &Settings,
    context: &CompatibilityContext,
    payload: &PaymentFingerprintPayload,
    fingerprint: Fingerprint,
    customer_reference: Option<String>,
) -> ApplicationResult<PluginConfiguration> {
    settings.validate()?;

    PluginConfiguration::build(
        &settings.merchant.profile(),
        payload,
        fingerprint,
        context.snapshot(),
        customer_reference,
    )
    .change_context(ApplicationError::PluginConfigurationFailed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use masking::PeekInterface;

    use super::*;

    #[test]
    fn untouched_form_keeps_placeholders() {
        let payload = PaymentForm::default().into_payload().unwrap();

        assert_eq!(payload.api_key.peek(), consts::API_KEY_PLACEHOLDER);
        assert_eq!(payload.username, consts::USERNAME_PLACEHOLDER);
        assert_eq!(payload.password.peek(), consts::PASSWORD_PLACEHOLDER);
        assert_eq!(payload.mode, "0");
        assert_eq!(payload.timestamp.len(), "YYYY-MM-DDTHH:mm:ss".len());
    }

    #[test]
    fn command_line_overrides_file_fields() {
        let form = PaymentForm {
            api_key: Some("FROM-FILE".into()),
            username: Some("user1".into()),
            ..PaymentForm::default()
        };
        let args = PaymentArgs {
            api_key: Some("KEY1".into()),
            ..PaymentArgs::default()
        };

        let merged = form.merge_args(&args);

        assert_eq!(merged.api_key.as_deref(), Some("KEY1"));
        assert_eq!(merged.username.as_deref(), Some("user1"));
    }

    #[test]
    fn amount_pattern() {
        assert!(PLAIN_AMOUNT.is_match("12.34"));
        assert!(PLAIN_AMOUNT.is_match("-0.50"));
        assert!(!PLAIN_AMOUNT.is_match("1,234.00"));
        assert!(!PLAIN_AMOUNT.is_match("12.3"));
        assert!(!PLAIN_AMOUNT.is_match("12"));
    }
}
