//! Compatibility toggles for older gateway versions.
//!
//! The flags are owned by a [`CompatibilityContext`] created once at startup. The generator
//! itself only ever receives a [`CompatibilityFlags`] value, taken as a snapshot at the
//! moment it runs.

use std::sync::{PoisonError, RwLock};

use common_utils::errors::CustomResult;
use serde::{Deserialize, Serialize};

use crate::{
    errors::FingerprintError,
    generator,
    types::{ApiVersion, Fingerprint, PaymentFingerprintPayload},
};

/// Toggles reproducing the request shape of older gateway versions. Both default to `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompatibilityFlags {
    /// Leave the timestamp out of the hashed canonical string. The timestamp is still sent
    /// to the gateway.
    pub omit_timestamp_from_hash: bool,
    /// Leave `merchantCode` out of the plugin configuration. Does not affect the hash.
    pub omit_merchant_code_from_payload: bool,
}

/// Application-wide holder of the current [`CompatibilityFlags`].
#[derive(Debug, Default)]
pub struct CompatibilityContext {
    flags: RwLock<CompatibilityFlags>,
}

impl CompatibilityContext {
    /// Create the context with its startup flags.
    pub fn init(flags: CompatibilityFlags) -> Self {
        Self {
            flags: RwLock::new(flags),
        }
    }

    /// Flags as they are right now.
    pub fn snapshot(&self) -> CompatibilityFlags {
        *self.flags.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Single mutation entry point, meant for developer tooling and tests. Returns the flags
    /// after `f` ran.
    pub fn update<F>(&self, f: F) -> CompatibilityFlags
    where
        F: FnOnce(&mut CompatibilityFlags),
    {
        let mut flags = self.flags.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut flags);
        *flags
    }

    /// Generate a fingerprint with the flags in effect at the time of the call.
    pub fn generate_fingerprint(
        &self,
        payload: &PaymentFingerprintPayload,
        version: ApiVersion,
    ) -> CustomResult<Fingerprint, FingerprintError> {
        generator::generate_payment_security_fingerprint(payload, version, self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let context = CompatibilityContext::default();
        assert_eq!(context.snapshot(), CompatibilityFlags::default());
        assert!(!context.snapshot().omit_timestamp_from_hash);
        assert!(!context.snapshot().omit_merchant_code_from_payload);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_updates() {
        let context = CompatibilityContext::init(CompatibilityFlags::default());
        let before = context.snapshot();

        let after = context.update(|flags| flags.omit_timestamp_from_hash = true);

        assert!(!before.omit_timestamp_from_hash);
        assert!(after.omit_timestamp_from_hash);
        assert_eq!(context.snapshot(), after);
    }
}
