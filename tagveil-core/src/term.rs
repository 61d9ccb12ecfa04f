//! Taxonomy terms and normalized slugs.
//!
//! Slugs are normalized once at construction (lower-cased, trimmed) so
//! every downstream comparison is case-insensitive by construction rather
//! than per call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized taxonomy slug.
///
/// Input that is empty after trimming yields no slug at all; an empty
/// entry in a configured tag list is dropped, never treated as a wildcard.
#[derive(
    Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalize `raw` into a slug.
    ///
    /// Returns `None` when nothing remains after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Externally-owned taxonomy entry (tag or category).
///
/// Tagveil reads the slug and never mutates terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Host-side term id.
    pub id: u64,
    /// Normalized slug.
    pub slug: Slug,
}

impl Term {
    /// Create a term.
    pub fn new(id: u64, slug: Slug) -> Self {
        Self { id, slug }
    }
}
