#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Developer harness for the hosted payment plugin: fills the payment form from the command
//! line or a JSON file, shows the fingerprint, and renders what the plugin would receive.
//!

pub mod cli;
pub mod configs;
pub mod core;
pub mod errors;

pub use router_env::logger;
