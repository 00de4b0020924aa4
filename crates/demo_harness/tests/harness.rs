#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use demo_harness::{
    cli::{PaymentArgs, Subcommand},
    configs::{settings::Merchant, Settings},
    core,
    errors::{ApplicationError, ApplicationResult},
};
use payment_fingerprint::{CompatibilityContext, CompatibilityFlags};

fn settings() -> Settings {
    Settings {
        merchant: Merchant {
            plugin_url: "https://payuat.example.com/online/v5".into(),
            merchant_code: "MC001".into(),
            redirect_url: "http://localhost:8080/return".into(),
            callback_url: None,
            default_api_version: Some("v5".into()),
        },
        ..Settings::default()
    }
}

fn args() -> PaymentArgs {
    PaymentArgs {
        api_key: Some("KEY1".into()),
        username: Some("user1".into()),
        password: Some("pass1".into()),
        mode: Some("0".into()),
        payment_amount: Some("10.00".into()),
        merchant_unique_payment_id: Some("PID1".into()),
        timestamp: Some("2024-01-01T00:00:00".into()),
        api_version: Some("v3".into()),
        ..PaymentArgs::default()
    }
}

fn run(command: Subcommand, context: &CompatibilityContext) -> ApplicationResult<String> {
    let mut out = Vec::new();
    core::run(&command, &settings(), context, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn prints_fingerprint() {
    let output = run(Subcommand::Fingerprint(args()), &CompatibilityContext::default()).unwrap();

    assert_eq!(output, "cc55d513c0fa304250f6faab16f426aa19bcb15e\n");
}

#[test]
fn default_version_comes_from_settings() {
    let args = PaymentArgs {
        api_version: None,
        ..args()
    };
    let output = run(Subcommand::Fingerprint(args), &CompatibilityContext::default()).unwrap();

    assert_eq!(output.trim_end().len(), 128);
}

#[test]
fn placeholder_credentials_print_empty_fingerprint() {
    let args = PaymentArgs {
        api_key: None,
        ..args()
    };
    let output = run(Subcommand::Fingerprint(args), &CompatibilityContext::default()).unwrap();

    assert_eq!(output, "\n");
}

#[test]
fn placeholder_credentials_block_plugin_configuration() {
    let args = PaymentArgs {
        password: None,
        ..args()
    };
    let report = run(Subcommand::PluginConfig(args), &CompatibilityContext::default()).unwrap_err();

    assert!(matches!(
        report.current_context(),
        ApplicationError::PluginConfigurationFailed
    ));
}

#[test]
fn toggles_update_the_context() {
    let context = CompatibilityContext::init(CompatibilityFlags::default());
    let args = PaymentArgs {
        omit_timestamp_from_hash: true,
        omit_merchant_code: true,
        ..args()
    };

    let output = run(Subcommand::PluginConfig(args), &context).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(context.snapshot().omit_timestamp_from_hash);
    assert!(json.get("merchantCode").is_none());
    assert_eq!(json["timestamp"], "2024-01-01T00:00:00");
    assert_eq!(json["fingerprint"], "8af48144d8e0a1119f4abc4a950158719aa45f6c");
}

#[test]
fn preview_renders_snippet() {
    let output = run(Subcommand::Preview(args()), &CompatibilityContext::default()).unwrap();

    assert!(output.starts_with("var payment = $.zpPayment({"));
    assert!(output.contains(r#""merchantCode": "MC001""#));
    assert!(output.ends_with("payment.init();\n"));
}

#[test]
fn payload_file_is_merged_with_arguments() {
    let path = std::env::temp_dir().join(format!("demo_harness_form_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"apiKey":"FROM-FILE","username":"user1","password":"pass1","mode":"2","paymentAmount":"55.00","merchantUniquePaymentId":"PID1","timestamp":"2024-01-01T00:00:00"}"#,
    )
    .unwrap();
    let args = PaymentArgs {
        payload_file: Some(path.clone()),
        api_key: Some("KEY1".into()),
        api_version: Some("v3".into()),
        ..PaymentArgs::default()
    };

    let output = run(Subcommand::Fingerprint(args), &CompatibilityContext::default());
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output.unwrap(), "4ba94d9a26753ff16c6780cbfd4dcf98a768efd2\n");
}

#[test]
fn missing_merchant_profile_is_rejected() {
    let mut out = Vec::new();
    let report = core::run(
        &Subcommand::Preview(args()),
        &Settings::default(),
        &CompatibilityContext::default(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(
        report.current_context(),
        ApplicationError::InvalidConfigurationValueError(_)
    ));
    assert!(out.is_empty());
}

#[test]
fn loads_development_configuration() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/development.toml");
    let settings = Settings::with_config_path(Some(path)).unwrap();

    assert!(!settings.compatibility.omit_timestamp_from_hash);
    assert!(!settings.compatibility.omit_merchant_code_from_payload);
    assert_eq!(settings.merchant.default_api_version.as_deref(), Some("v5"));
    assert!(settings.validate().is_ok());
}

#[test]
fn explicit_configuration_file_must_exist() {
    let dir = std::env::temp_dir().join(format!("demo_harness_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("legacy.toml"),
        "[compatibility]\nomit_timestamp_from_hash = true\n",
    )
    .unwrap();

    let loaded = Settings::with_config_path(Some(dir.join("legacy.toml")));
    let mistyped = Settings::with_config_path(Some(dir.join("legcy.toml")));
    std::fs::remove_dir_all(&dir).unwrap();

    assert!(loaded.unwrap().compatibility.omit_timestamp_from_hash);
    assert!(matches!(
        mistyped.unwrap_err().current_context(),
        ApplicationError::ConfigurationError
    ));
}
