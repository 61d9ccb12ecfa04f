//! Join descriptors for the post→term join chain.
//!
//! Selecting on term slugs requires the host's post query to join through
//! the term-relationship tables. Each join is keyed by a canonical
//! [`JoinKey`], so deciding whether a join is already present is a
//! membership check on the key, never a substring search over clause text.

use std::fmt;

/// Canonical identifier for a join in the post→term chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKey {
    /// posts → term_relationships (post id to relationship rows).
    TermRelationships,
    /// term_relationships → term_taxonomy.
    TermTaxonomy,
    /// term_taxonomy → terms.
    Terms,
}

impl JoinKey {
    /// The full chain in dependency order.
    pub const CHAIN: [JoinKey; 3] = [
        JoinKey::TermRelationships,
        JoinKey::TermTaxonomy,
        JoinKey::Terms,
    ];
}

/// A single join requirement on the host query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinClause {
    key: JoinKey,
}

impl JoinClause {
    /// Create a join clause for `key`.
    pub fn new(key: JoinKey) -> Self {
        Self { key }
    }

    /// This clause's canonical key.
    pub fn key(&self) -> JoinKey {
        self.key
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sql = match self.key {
            JoinKey::TermRelationships => {
                "INNER JOIN term_relationships ON posts.id = term_relationships.post_id"
            }
            JoinKey::TermTaxonomy => {
                "INNER JOIN term_taxonomy ON term_relationships.term_taxonomy_id = term_taxonomy.term_taxonomy_id"
            }
            JoinKey::Terms => "INNER JOIN terms ON term_taxonomy.term_id = terms.term_id",
        };
        f.write_str(sql)
    }
}
