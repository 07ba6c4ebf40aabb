//! Decision traces for permission checks.

use serde::{Deserialize, Serialize};

/// How a single permission check was decided.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TraceVerdict {
    /// A deny pattern matched; deny short-circuits everything else.
    DeniedBy { pattern: String },
    /// No deny matched and this allow pattern did.
    AllowedBy { pattern: String },
    /// Neither list matched.
    NoMatch,
}

/// Serializable record of one grant decision.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CheckTrace {
    pub required: String,
    pub granted: bool,
    pub verdict: TraceVerdict,
}

impl CheckTrace {
    pub fn new(required: impl Into<String>, granted: bool, verdict: TraceVerdict) -> Self {
        Self {
            required: required.into(),
            granted,
            verdict,
        }
    }
}
