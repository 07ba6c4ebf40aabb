//! Permission evaluation and sidebar visibility.
//!
//! Everything in this module is pure and deterministic: no I/O, no clocks,
//! no environment reads. The pieces compose in dependency order:
//!
//! - [`assemble::assemble_snapshot`] turns role grants plus user overrides
//!   into a [`snapshot::PermissionSnapshot`] (scope rank
//!   global < organization < branch, latest override wins within a rank).
//! - [`matcher::PatternMatcher`] evaluates grant checks against a snapshot
//!   with deny-first precedence and greedy `*` wildcards.
//! - [`resolver::SidebarResolver`] filters a declarative
//!   [`sidebar::SidebarRegistry`] into the navigation model one user sees,
//!   fail-closed on missing entitlements.
//!
//! # Example
//! ```rust
//! use warden::access::prelude::*;
//!
//! let snapshot = PermissionSnapshot::new(
//!     vec!["warehouse.*".to_string()],
//!     vec!["warehouse.products.delete".to_string()],
//! );
//!
//! let matcher = PatternMatcher::new();
//! assert!(matcher.check(&snapshot, "warehouse.products.read"));
//! assert!(!matcher.check(&snapshot, "warehouse.products.delete"));
//!
//! let registry = SidebarRegistry::new(
//!     vec![SidebarItem::new("products", "Products")
//!         .with_visibility(VisibilityRule::permissions(["warehouse.products.read"]))],
//!     vec![],
//! );
//! let input = ResolverInput::new(snapshot);
//! let model = SidebarResolver::new().resolve(&input, &registry);
//! assert_eq!(model.main.len(), 1);
//! ```

pub mod assemble;
pub mod entitlements;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod sidebar;
pub mod snapshot;
pub mod trace;

pub use assemble::{
    assemble_snapshot,
    OverrideEffect,
    OverrideScope,
    PermissionOverride,
    SubjectContext,
};
pub use entitlements::Entitlements;
pub use error::{AccessError, AccessResult};
pub use matcher::PatternMatcher;
pub use resolver::{ResolverInput, SidebarResolver};
pub use sidebar::{SidebarItem, SidebarModel, SidebarRegistry, VisibilityRule};
pub use snapshot::PermissionSnapshot;
pub use trace::{CheckTrace, TraceVerdict};

/// Convenience re-exports for consumers.
pub mod prelude {
    pub use super::assemble::{
        assemble_snapshot,
        OverrideEffect,
        OverrideScope,
        PermissionOverride,
        SubjectContext,
    };
    pub use super::entitlements::Entitlements;
    pub use super::error::{AccessError, AccessResult};
    pub use super::matcher::PatternMatcher;
    pub use super::resolver::{ResolverInput, SidebarResolver};
    pub use super::sidebar::{SidebarItem, SidebarModel, SidebarRegistry, VisibilityRule};
    pub use super::snapshot::PermissionSnapshot;
    pub use super::trace::{CheckTrace, TraceVerdict};
}
