//! Request-scoped policy context.

use tagveil_core::{PolicyConfig, RawPolicySettings, Visitor};

/// Evaluation context for one listing request.
///
/// Holds the typed configuration and the visitor identity. Built once at
/// the request boundary and passed by reference into every decision
/// function; nothing is cached across requests, so an administrative
/// settings write is visible on the next request.
#[derive(Debug, Clone)]
pub struct PolicyContext {
    /// Typed configuration for this request.
    pub config: PolicyConfig,
    /// Current visitor identity (anonymous when not logged in).
    pub visitor: Visitor,
}

impl PolicyContext {
    /// Create a context from already-parsed configuration.
    pub fn new(config: PolicyConfig, visitor: Visitor) -> Self {
        Self { config, visitor }
    }

    /// Parse the persisted settings form and build a context.
    ///
    /// This is the usual entry point at the request boundary: one parse
    /// step per request, typed values everywhere after.
    pub fn from_raw(raw: &RawPolicySettings, visitor: Visitor) -> Self {
        Self::new(PolicyConfig::from_raw(raw), visitor)
    }
}
