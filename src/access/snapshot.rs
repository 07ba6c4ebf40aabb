//! Resolved allow/deny pattern sets for one subject context.

use serde::{Deserialize, Serialize};

use crate::access::error::{AccessError, AccessResult};

/// Allow/deny permission patterns resolved for a (user, organization, branch)
/// context.
///
/// Both lists are always present; an empty snapshot grants nothing. The type
/// carries no mutation methods — assemblers build a fresh snapshot per
/// context and hand it out by reference.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub allow: Vec<String>,
    pub deny: Vec<String>,
}

impl PermissionSnapshot {
    pub fn new(allow: Vec<String>, deny: Vec<String>) -> Self {
        Self { allow, deny }
    }

    /// Snapshot that denies every check.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }

    /// Reject patterns the matcher treats as contract violations.
    pub fn validate(&self) -> AccessResult<()> {
        for (list, patterns) in [("allow", &self.allow), ("deny", &self.deny)] {
            if patterns.iter().any(|pattern| pattern.is_empty()) {
                return Err(AccessError::EmptyPattern {
                    list: list.to_string(),
                });
            }
        }
        Ok(())
    }
}
