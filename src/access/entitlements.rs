//! Tenant feature-module entitlements.

use serde::{Deserialize, Serialize};

/// Feature modules enabled for a tenant.
///
/// Module-gated sidebar rules check membership here. A missing entitlement
/// record is represented as `Option::None` at the input layer and hides every
/// module-gated item (fail-closed).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entitlements {
    pub enabled_modules: Vec<String>,
}

impl Entitlements {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled_modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_module(&self, key: &str) -> bool {
        self.enabled_modules.iter().any(|module| module == key)
    }

    pub fn has_all_modules(&self, keys: &[String]) -> bool {
        keys.iter().all(|key| self.has_module(key))
    }

    pub fn has_any_module(&self, keys: &[String]) -> bool {
        keys.iter().any(|key| self.has_module(key))
    }
}
