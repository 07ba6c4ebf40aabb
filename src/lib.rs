//! Warden
//!
//! Deterministic permission matching and navigation visibility for
//! multi-tenant apps.
//!
//! ## Features
//!
//! - **Pattern matching**: dotted permission strings with greedy `*`
//!   wildcards, anchored and case-sensitive, compiled patterns cached
//! - **Deny-first checks**: a matching deny beats any allow, wildcard or exact
//! - **Sidebar resolution**: declarative registry trees filtered per user,
//!   depth-first and non-mutating, fail-closed on missing entitlements
//! - **Snapshot assembly**: role grants plus scoped user overrides resolved
//!   by scope rank and recency
//! - **Check traces**: serializable records of which pattern decided a check
//!
//! # Example
//! ```rust
//! use warden::access::prelude::*;
//!
//! let matcher = PatternMatcher::new();
//! let snapshot = PermissionSnapshot::new(vec!["org.*".to_string()], vec![]);
//! assert!(matcher.check(&snapshot, "org.members.invite"));
//! ```

pub mod access;
