//! Snapshot assembly: role grants combined with user overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::snapshot::PermissionSnapshot;

/// Scope an override was created at. Narrower scopes take precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideScope {
    Global,
    Organization,
    Branch,
}

impl OverrideScope {
    /// Precedence rank: global(1) < organization(2) < branch(3).
    pub fn rank(self) -> u8 {
        match self {
            OverrideScope::Global => 1,
            OverrideScope::Organization => 2,
            OverrideScope::Branch => 3,
        }
    }
}

/// Whether an override grants or revokes its pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideEffect {
    Allow,
    Deny,
}

/// One user-specific override row, already scoped to the subject by the
/// upstream query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PermissionOverride {
    pub pattern: String,
    pub effect: OverrideEffect,
    pub scope: OverrideScope,
    pub created_at: DateTime<Utc>,
}

impl PermissionOverride {
    pub fn new(
        pattern: impl Into<String>,
        effect: OverrideEffect,
        scope: OverrideScope,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            effect,
            scope,
            created_at,
        }
    }
}

/// The (user, organization, branch) a snapshot is assembled for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubjectContext {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Uuid>,
}

impl SubjectContext {
    pub fn new(user_id: Uuid, organization_id: Uuid) -> Self {
        Self {
            user_id,
            organization_id,
            branch_id: None,
        }
    }

    pub fn with_branch(mut self, branch_id: Uuid) -> Self {
        self.branch_id = Some(branch_id);
        self
    }
}

/// Combine role-derived base grants with user overrides.
///
/// Overrides are resolved per pattern slug: the highest scope rank wins, and
/// within a rank the latest `created_at` wins (on an exact tie the later row
/// wins, matching the store's creation order). Winning allows extend the
/// allow list, winning denies the deny list; both outputs are deduplicated
/// preserving first-seen order.
pub fn assemble_snapshot(
    base_allow: &[String],
    overrides: &[PermissionOverride],
) -> PermissionSnapshot {
    let mut slugs: Vec<&str> = Vec::new();
    let mut winners: std::collections::HashMap<&str, &PermissionOverride> =
        std::collections::HashMap::new();

    for row in overrides {
        match winners.get(row.pattern.as_str()) {
            None => {
                slugs.push(&row.pattern);
                winners.insert(&row.pattern, row);
            }
            Some(current) => {
                let outranks = row.scope.rank() > current.scope.rank()
                    || (row.scope.rank() == current.scope.rank()
                        && row.created_at >= current.created_at);
                if outranks {
                    winners.insert(&row.pattern, row);
                }
            }
        }
    }

    let mut allow = Vec::new();
    let mut deny = Vec::new();
    for pattern in base_allow {
        push_unique(&mut allow, pattern);
    }
    for slug in slugs {
        let row = winners[slug];
        match row.effect {
            OverrideEffect::Allow => push_unique(&mut allow, &row.pattern),
            OverrideEffect::Deny => push_unique(&mut deny, &row.pattern),
        }
    }

    PermissionSnapshot::new(allow, deny)
}

fn push_unique(list: &mut Vec<String>, pattern: &str) {
    if !list.iter().any(|existing| existing == pattern) {
        list.push(pattern.to_string());
    }
}
