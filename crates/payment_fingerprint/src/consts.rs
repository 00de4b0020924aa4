//! Constants shared by the fingerprint generator and the plugin configuration.

/// Value the form shows in the API key field until the merchant types a real one.
pub const API_KEY_PLACEHOLDER: &str = "<<API-KEY>>";

/// Value the form shows in the username field until the merchant types a real one.
pub const USERNAME_PLACEHOLDER: &str = "<<USERNAME>>";

/// Value the form shows in the password field until the merchant types a real one.
pub const PASSWORD_PLACEHOLDER: &str = "<<PASSWORD>>";

/// Payment mode in which the customer enters the amount, so no amount is part of the hash.
pub const CUSTOM_AMOUNT_MODE: &str = "2";

/// Amount hashed for [`CUSTOM_AMOUNT_MODE`].
pub const CUSTOM_AMOUNT_HASH_VALUE: &str = "0";

/// Separator between fields of the canonical string.
pub const FIELD_SEPARATOR: &str = "|";

/// Name of the plugin constructor invoked by the generated code preview.
pub const PLUGIN_CONSTRUCTOR: &str = "$.zpPayment";
