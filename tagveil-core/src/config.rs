//! Policy configuration: persisted form, typed form, and the parse step.
//!
//! The host persists three values: a mode string and two comma-separated
//! tag lists. [`RawPolicySettings`] is that persisted shape;
//! [`PolicyConfig`] is the typed view produced by a single parse step at
//! the request boundary. The parsed form is never cached across requests,
//! so an administrative write is visible on the next request.

use crate::error::CoreError;
use crate::term::Slug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Filtering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyMode {
    /// Hide posts carrying any excluded tag; everything else is visible.
    #[default]
    Exclusive,
    /// Show only posts carrying an included tag.
    Inclusive,
}

impl PolicyMode {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyMode::Exclusive => "exclusive",
            PolicyMode::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(PolicyMode::Exclusive),
            "inclusive" => Ok(PolicyMode::Inclusive),
            other => Err(CoreError::invalid_mode(other)),
        }
    }
}

/// Mode installed on first activation.
pub const DEFAULT_MODE: PolicyMode = PolicyMode::Exclusive;

/// Excluded-tag list installed on first activation.
pub const DEFAULT_EXCLUDED_TAGS: &str = "Private";

/// Included-tag list installed on first activation.
pub const DEFAULT_INCLUDED_TAGS: &str = "Public";

/// The externally persisted settings shape.
///
/// Tag lists stay comma-separated here; entries are normalized by the
/// parse step, not by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPolicySettings {
    /// Persisted mode string ("exclusive" or "inclusive").
    pub mode: String,
    /// Comma-separated tags hidden in exclusive mode.
    pub excluded_tags: String,
    /// Comma-separated tags shown in inclusive mode.
    pub included_tags: String,
}

impl Default for RawPolicySettings {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.as_str().to_string(),
            excluded_tags: DEFAULT_EXCLUDED_TAGS.to_string(),
            included_tags: DEFAULT_INCLUDED_TAGS.to_string(),
        }
    }
}

/// Split a comma-separated tag list into normalized slugs.
///
/// Whitespace around entries is trimmed; empty entries (doubled or
/// trailing commas, all-whitespace input) are dropped silently.
pub fn parse_tag_list(raw: &str) -> BTreeSet<Slug> {
    raw.split(',').filter_map(Slug::new).collect()
}

/// Typed policy configuration, parsed once per evaluation boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Active filtering mode.
    pub mode: PolicyMode,
    /// Tags hidden in exclusive mode.
    pub excluded: BTreeSet<Slug>,
    /// Tags shown in inclusive mode.
    pub included: BTreeSet<Slug>,
}

impl PolicyConfig {
    /// Parse the persisted form into typed configuration.
    ///
    /// An unrecognized mode string falls back to the installed default
    /// rather than failing: a misconfigured mode must never block a
    /// listing request.
    pub fn from_raw(raw: &RawPolicySettings) -> Self {
        let mode = raw.mode.parse().unwrap_or_else(|_| {
            tracing::debug!(mode = %raw.mode, "unrecognized policy mode, using default");
            DEFAULT_MODE
        });
        Self {
            mode,
            excluded: parse_tag_list(&raw.excluded_tags),
            included: parse_tag_list(&raw.included_tags),
        }
    }

    /// The tag set selected by the active mode.
    pub fn active_tags(&self) -> &BTreeSet<Slug> {
        match self.mode {
            PolicyMode::Exclusive => &self.excluded,
            PolicyMode::Inclusive => &self.included,
        }
    }
}
