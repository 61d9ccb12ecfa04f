//! Typed identifiers for host-owned entities.
//!
//! Posts and authors live in the host platform; Tagveil only threads their
//! identifiers through visibility decisions. Transparent newtypes keep the
//! two id spaces from mixing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post row in the host platform.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Raw `u64` value.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an author account in the host platform.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AuthorId(pub u64);

impl AuthorId {
    /// Raw `u64` value.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity signal for the current request.
///
/// An absent id means an anonymous visitor (not logged in). Any present id
/// means an authenticated author; Tagveil does not distinguish roles beyond
/// "has an id".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Visitor {
    id: Option<AuthorId>,
}

impl Visitor {
    /// A visitor with no identity.
    pub fn anonymous() -> Self {
        Self { id: None }
    }

    /// A visitor authenticated as `id`.
    pub fn authenticated(id: AuthorId) -> Self {
        Self { id: Some(id) }
    }

    /// The visitor's author id, if authenticated.
    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    /// Whether this visitor is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }
}
