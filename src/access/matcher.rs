//! Wildcard permission matching with deny-first precedence.

use std::collections::HashMap;
use std::sync::Mutex;

use regex::Regex;

use crate::access::snapshot::PermissionSnapshot;
use crate::access::trace::{CheckTrace, TraceVerdict};

/// Matches dotted permission strings against allow/deny pattern lists.
///
/// `*` matches any sequence of characters, including none and including `.`
/// separators, so `warehouse.*` covers `warehouse.products.read`. Matching is
/// case-sensitive and anchored at both ends. Compiled wildcard patterns are
/// cached per matcher instance; a single matcher can be shared across
/// request-handling threads.
#[derive(Debug, Default)]
pub struct PatternMatcher {
    compiled: Mutex<HashMap<String, Regex>>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any pattern in `patterns` covers `required`.
    pub fn matches_any(&self, patterns: &[String], required: &str) -> bool {
        patterns
            .iter()
            .any(|pattern| self.matches_pattern(pattern, required))
    }

    /// Deny-first grant check.
    ///
    /// A matching deny pattern loses the check unconditionally, even against
    /// an exact or broader allow. An empty snapshot grants nothing.
    pub fn check(&self, snapshot: &PermissionSnapshot, required: &str) -> bool {
        if self.matches_any(&snapshot.deny, required) {
            return false;
        }
        self.matches_any(&snapshot.allow, required)
    }

    /// Grant check that records which list and pattern decided the outcome.
    pub fn check_with_trace(&self, snapshot: &PermissionSnapshot, required: &str) -> CheckTrace {
        if let Some(pattern) = self.first_match(&snapshot.deny, required) {
            return CheckTrace::new(required, false, TraceVerdict::DeniedBy { pattern });
        }
        match self.first_match(&snapshot.allow, required) {
            Some(pattern) => CheckTrace::new(required, true, TraceVerdict::AllowedBy { pattern }),
            None => CheckTrace::new(required, false, TraceVerdict::NoMatch),
        }
    }

    /// Drop all cached compiled patterns.
    ///
    /// Hygiene hook for test isolation; match results never depend on cache
    /// state.
    pub fn clear_cache(&self) {
        self.compiled.lock().unwrap().clear();
    }

    /// Number of compiled wildcard patterns currently cached.
    pub fn cached_patterns(&self) -> usize {
        self.compiled.lock().unwrap().len()
    }

    fn first_match(&self, patterns: &[String], required: &str) -> Option<String> {
        patterns
            .iter()
            .find(|pattern| self.matches_pattern(pattern, required))
            .cloned()
    }

    fn matches_pattern(&self, pattern: &str, required: &str) -> bool {
        // An empty pattern is a caller bug; it must never match anything,
        // least of all everything.
        assert!(
            !pattern.is_empty(),
            "empty string is not a valid permission pattern"
        );
        if pattern == "*" {
            return true;
        }
        if !pattern.contains('*') {
            return pattern == required;
        }
        let mut cache = self.compiled.lock().unwrap();
        let regex = cache
            .entry(pattern.to_string())
            .or_insert_with(|| compile_wildcard(pattern));
        regex.is_match(required)
    }
}

/// Translate a wildcard pattern into an anchored regex: literal chunks are
/// escaped, each `*` becomes "any sequence of characters, possibly empty".
fn compile_wildcard(pattern: &str) -> Regex {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for (index, chunk) in pattern.split('*').enumerate() {
        if index > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(chunk));
    }
    source.push('$');
    Regex::new(&source).unwrap()
}
