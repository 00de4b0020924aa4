use std::path::PathBuf;

/// Developer harness for the hosted payment plugin: computes the security fingerprint of a
/// payment request and renders what the plugin constructor receives.
#[derive(clap::Parser, Debug)]
#[command(version, arg_required_else_help = true)]
pub struct CmdLineConf {
    /// Config file.
    /// Application will look for "config/development.toml" (per `RUN_ENV`) if not specified.
    #[arg(short = 'f', long, value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub enum Subcommand {
    /// Print the payment security fingerprint.
    Fingerprint(PaymentArgs),
    /// Print the JavaScript snippet that constructs and starts the plugin.
    Preview(PaymentArgs),
    /// Print the plugin configuration object as JSON.
    PluginConfig(PaymentArgs),
}

impl Subcommand {
    pub fn payment_args(&self) -> &PaymentArgs {
        match self {
            Self::Fingerprint(args) | Self::Preview(args) | Self::PluginConfig(args) => args,
        }
    }
}

/// Payment form fields. Values given here take precedence over `--payload-file`; credentials
/// given nowhere keep their form placeholder.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PaymentArgs {
    /// JSON file with the form fields (camelCase keys, as sent by the browser form).
    #[arg(long, value_name = "FILE")]
    pub payload_file: Option<PathBuf>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    /// Payment mode; "2" lets the customer enter the amount.
    #[arg(long)]
    pub mode: Option<String>,

    /// Amount with two decimal places, e.g. "12.34".
    #[arg(long)]
    pub payment_amount: Option<String>,

    #[arg(long)]
    pub merchant_unique_payment_id: Option<String>,

    /// `YYYY-MM-DDTHH:mm:ss`; defaults to the current UTC time.
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Gateway API version: v3 (SHA-1), v4 (SHA-512) or v5 (SHA-3-512).
    #[arg(long, value_name = "VERSION")]
    pub api_version: Option<String>,

    #[arg(long)]
    pub customer_reference: Option<String>,

    /// Leave the timestamp out of the hash, as older gateways expect.
    #[arg(long)]
    pub omit_timestamp_from_hash: bool,

    /// Leave `merchantCode` out of the plugin configuration.
    #[arg(long)]
    pub omit_merchant_code: bool,
}
