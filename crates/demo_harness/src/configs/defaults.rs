use payment_fingerprint::ApiVersion;

impl Default for super::settings::Merchant {
    fn default() -> Self {
        Self {
            plugin_url: String::new(),
            merchant_code: String::new(),
            redirect_url: String::new(),
            callback_url: None,
            default_api_version: Some(ApiVersion::default().to_string()),
        }
    }
}
