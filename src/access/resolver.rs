//! Sidebar visibility resolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::assemble::SubjectContext;
use crate::access::entitlements::Entitlements;
use crate::access::matcher::PatternMatcher;
use crate::access::sidebar::{SidebarItem, SidebarModel, SidebarRegistry, VisibilityRule};
use crate::access::snapshot::PermissionSnapshot;

/// Everything the resolver needs for one user in one tenant context.
///
/// The organization and branch ids are opaque pass-through context; matching
/// itself only reads the snapshot and the entitlements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolverInput {
    pub snapshot: PermissionSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<Entitlements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Uuid>,
}

impl ResolverInput {
    pub fn new(snapshot: PermissionSnapshot) -> Self {
        Self {
            snapshot,
            entitlements: None,
            organization_id: None,
            branch_id: None,
        }
    }

    pub fn with_entitlements(mut self, entitlements: Entitlements) -> Self {
        self.entitlements = Some(entitlements);
        self
    }

    pub fn with_context(mut self, organization_id: Uuid, branch_id: Option<Uuid>) -> Self {
        self.organization_id = Some(organization_id);
        self.branch_id = branch_id;
        self
    }

    /// Build an input from an assembled snapshot and the subject it serves.
    pub fn for_subject(
        snapshot: PermissionSnapshot,
        entitlements: Option<Entitlements>,
        subject: &SubjectContext,
    ) -> Self {
        Self {
            snapshot,
            entitlements,
            organization_id: Some(subject.organization_id),
            branch_id: subject.branch_id,
        }
    }
}

/// Filters a sidebar registry down to the items visible to one user.
///
/// Resolution is pure: identical inputs produce identical output, the
/// registry is never mutated, and missing entitlements hide every
/// module-gated item.
#[derive(Debug, Default)]
pub struct SidebarResolver {
    matcher: PatternMatcher,
}

impl SidebarResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// The matcher used for leaf permission checks, shared so ad-hoc
    /// `check` calls reuse the same compiled-pattern cache.
    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Filter `registry` against `input`.
    ///
    /// Children are resolved before their parent's own rule, an item whose
    /// original children all filtered away is hidden, and surviving items
    /// keep their original relative order.
    pub fn resolve(&self, input: &ResolverInput, registry: &SidebarRegistry) -> SidebarModel {
        SidebarModel {
            main: self.filter_items(input, &registry.main),
            footer: self.filter_items(input, &registry.footer),
        }
    }

    fn filter_items(&self, input: &ResolverInput, items: &[SidebarItem]) -> Vec<SidebarItem> {
        items
            .iter()
            .filter_map(|item| self.filter_item(input, item))
            .collect()
    }

    fn filter_item(&self, input: &ResolverInput, item: &SidebarItem) -> Option<SidebarItem> {
        let children = item
            .children
            .as_ref()
            .map(|children| self.filter_items(input, children));

        if !self.rule_passes(input, item.visibility.as_ref()) {
            return None;
        }
        // A group whose every child filtered away is itself invisible.
        if let (Some(original), Some(filtered)) = (&item.children, &children) {
            if !original.is_empty() && filtered.is_empty() {
                return None;
            }
        }

        Some(SidebarItem {
            id: item.id.clone(),
            title: item.title.clone(),
            icon: item.icon.clone(),
            href: item.href.clone(),
            visibility: item.visibility.clone(),
            children,
        })
    }

    fn rule_passes(&self, input: &ResolverInput, rule: Option<&VisibilityRule>) -> bool {
        let Some(rule) = rule else {
            return true;
        };

        if let Some(required) = &rule.requires_permissions {
            if !required
                .iter()
                .all(|permission| self.matcher.check(&input.snapshot, permission))
            {
                return false;
            }
        }

        if let Some(any) = &rule.requires_any_permissions {
            if !any.is_empty()
                && !any
                    .iter()
                    .any(|permission| self.matcher.check(&input.snapshot, permission))
            {
                return false;
            }
        }

        // Empty module groups behave as absent and skip the fail-closed
        // entitlements requirement.
        if let Some(modules) = &rule.requires_modules {
            if !modules.is_empty() {
                match &input.entitlements {
                    Some(entitlements) if entitlements.has_all_modules(modules) => {}
                    _ => return false,
                }
            }
        }

        if let Some(modules) = &rule.requires_any_modules {
            if !modules.is_empty() {
                match &input.entitlements {
                    Some(entitlements) if entitlements.has_any_module(modules) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}
