#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types for merchant credentials. A [`Secret`] never prints its inner value through
//! `Debug`; reading it requires an explicit [`PeekInterface::peek`] or
//! [`ExposeInterface::expose`] call, which keeps credentials out of logs by default.
//!

mod abs;
mod secret;
mod strategy;

#[cfg(feature = "serde")]
mod serde;

pub use abs::{ExposeInterface, PeekInterface};
pub use secret::Secret;
pub use strategy::{ApiKey, Password, Strategy, WithType, WithoutType};
