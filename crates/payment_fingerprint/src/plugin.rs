//! What the payment plugin receives: its configuration object and the code preview that
//! constructs it.

use common_utils::errors::CustomResult;
use error_stack::{report, ResultExt};
use masking::PeekInterface;
use serde::{Deserialize, Serialize};

use crate::{
    compatibility::CompatibilityFlags,
    consts,
    errors::PluginConfigurationError,
    types::{Fingerprint, PaymentFingerprintPayload},
};

/// Merchant level settings that do not come from the payment form.
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantProfile {
    /// Gateway endpoint the plugin talks to.
    pub plugin_url: String,
    /// Merchant code issued by the gateway.
    pub merchant_code: String,
    /// Page the customer returns to after paying.
    pub redirect_url: String,
    /// Server-to-server notification endpoint.
    #[serde(default)]
    pub callback_url: Option<String>,
}

/// Configuration object handed to the plugin constructor.
///
/// The password only ever contributes to the fingerprint and is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfiguration {
    /// Gateway endpoint.
    pub url: String,
    /// Absent when [`CompatibilityFlags::omit_merchant_code_from_payload`] is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    /// Merchant API key.
    pub api_key: String,
    /// Merchant username.
    pub username: String,
    /// Payment mode.
    pub mode: String,
    /// Amount exactly as entered, decimal point included.
    pub payment_amount: String,
    /// Merchant supplied payment identifier.
    pub merchant_unique_payment_id: String,
    /// Timestamp, sent even when it was left out of the hash.
    pub timestamp: String,
    /// Fingerprint authenticating the fields above.
    pub fingerprint: Fingerprint,
    /// Return page.
    pub redirect_url: String,
    /// Notification endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Reference shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
}

impl PluginConfiguration {
    /// Assemble the plugin configuration.
    ///
    /// Fails with [`PluginConfigurationError::MissingCredentials`] for the empty fingerprint
    /// sentinel, which keeps a payment without credentials from being initialized.
    pub fn build(
        profile: &MerchantProfile,
        payload: &PaymentFingerprintPayload,
        fingerprint: Fingerprint,
        flags: CompatibilityFlags,
        customer_reference: Option<String>,
    ) -> CustomResult<Self, PluginConfigurationError> {
        if fingerprint.is_missing() {
            return Err(report!(PluginConfigurationError::MissingCredentials));
        }

        Ok(Self {
            url: profile.plugin_url.clone(),
            merchant_code: (!flags.omit_merchant_code_from_payload)
                .then(|| profile.merchant_code.clone()),
            api_key: payload.api_key.peek().clone(),
            username: payload.username.clone(),
            mode: payload.mode.clone(),
            payment_amount: payload.payment_amount.clone(),
            merchant_unique_payment_id: payload.merchant_unique_payment_id.clone(),
            timestamp: payload.timestamp.clone(),
            fingerprint,
            redirect_url: profile.redirect_url.clone(),
            callback_url: profile.callback_url.clone(),
            customer_reference,
        })
    }

    /// The configuration as pretty printed JSON.
    pub fn to_json(&self) -> CustomResult<String, PluginConfigurationError> {
        serde_json::to_string_pretty(self)
            .change_context(PluginConfigurationError::SerializationFailed)
    }
}

/// Copy-paste JavaScript that constructs the plugin with `configuration` and starts it.
pub fn render_code_snippet(
    configuration: &PluginConfiguration,
) -> CustomResult<String, PluginConfigurationError> {
    let options = configuration.to_json()?;
    Ok(format!(
        "var payment = {constructor}({options});\npayment.init();\n",
        constructor = consts::PLUGIN_CONSTRUCTOR,
    ))
}
