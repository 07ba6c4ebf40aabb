//! Declarative sidebar registry model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::access::error::{AccessError, AccessResult};

/// Visibility rule for one sidebar item.
///
/// Each group is independently optional so "absent" and "present but empty"
/// stay distinct in the type. An explicitly empty group behaves like an
/// absent one. All present groups must pass for the item to show.
///
/// Wire names are camelCase: the registry is authored in the frontend layer.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRule {
    /// Every listed permission must be granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_permissions: Option<Vec<String>>,
    /// At least one listed permission must be granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_any_permissions: Option<Vec<String>>,
    /// Every listed module must be enabled; hides when entitlements are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_modules: Option<Vec<String>>,
    /// At least one listed module must be enabled; hides when entitlements are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_any_modules: Option<Vec<String>>,
}

impl VisibilityRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires_permissions: Some(permissions.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn any_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires_any_permissions: Some(permissions.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires_modules: Some(modules.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn any_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requires_any_modules: Some(modules.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires_modules = Some(modules.into_iter().map(Into::into).collect());
        self
    }

    fn groups(&self) -> [&Option<Vec<String>>; 4] {
        [
            &self.requires_permissions,
            &self.requires_any_permissions,
            &self.requires_modules,
            &self.requires_any_modules,
        ]
    }
}

/// One navigation item. Display metadata is opaque pass-through; only `id`,
/// `visibility` and `children` mean anything to the resolver.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SidebarItem>>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            href: None,
            visibility: None,
            children: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_visibility(mut self, rule: VisibilityRule) -> Self {
        self.visibility = Some(rule);
        self
    }

    pub fn with_children(mut self, children: Vec<SidebarItem>) -> Self {
        self.children = Some(children);
        self
    }
}

/// Static navigation registry: the `main` tree and the `footer` tree.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SidebarRegistry {
    pub main: Vec<SidebarItem>,
    pub footer: Vec<SidebarItem>,
}

impl SidebarRegistry {
    pub fn new(main: Vec<SidebarItem>, footer: Vec<SidebarItem>) -> Self {
        Self { main, footer }
    }

    /// Reject registries that violate the caller contract: duplicate or empty
    /// item ids, or empty strings inside rule groups.
    pub fn validate(&self) -> AccessResult<()> {
        let mut seen = HashSet::new();
        validate_items(&self.main, &mut seen)?;
        validate_items(&self.footer, &mut seen)
    }
}

/// Filtered navigation output; same shape as the registry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SidebarModel {
    pub main: Vec<SidebarItem>,
    pub footer: Vec<SidebarItem>,
}

fn validate_items(items: &[SidebarItem], seen: &mut HashSet<String>) -> AccessResult<()> {
    for item in items {
        if item.id.is_empty() {
            return Err(AccessError::EmptyItemId);
        }
        if !seen.insert(item.id.clone()) {
            return Err(AccessError::DuplicateItemId {
                id: item.id.clone(),
            });
        }
        if let Some(rule) = &item.visibility {
            for group in rule.groups() {
                if let Some(entries) = group {
                    if entries.iter().any(|entry| entry.is_empty()) {
                        return Err(AccessError::EmptyPattern {
                            list: format!("visibility rule of {}", item.id),
                        });
                    }
                }
            }
        }
        if let Some(children) = &item.children {
            validate_items(children, seen)?;
        }
    }
    Ok(())
}
