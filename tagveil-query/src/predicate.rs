//! Structured row constraints.
//!
//! Predicates are the row conditions the host merges into its listing
//! query with AND. The `Display` impl renders the clause text used by
//! string-splicing hosts; structured hosts match on the variants directly.

use std::collections::BTreeSet;
use std::fmt;
use tagveil_core::{AuthorId, PostId, Slug};

/// A row constraint on the host's post-listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `posts.id NOT IN (...)`.
    ///
    /// The visibility policy never emits this with an empty id set; an
    /// empty set renders as a neutral constant so the clause stays valid.
    PostNotIn(BTreeSet<PostId>),
    /// `terms.slug IN (...)`. Requires the term join chain to be present.
    SlugIn(BTreeSet<Slug>),
    /// `posts.author_id = ?`, the author-ownership exception.
    AuthorIs(AuthorId),
    /// OR-combination of sub-constraints.
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    /// OR-combine constraints.
    pub fn any_of(predicates: Vec<Predicate>) -> Self {
        Predicate::AnyOf(predicates)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::PostNotIn(ids) => {
                if ids.is_empty() {
                    // NOT IN over nothing excludes nothing.
                    return f.write_str("1 = 1");
                }
                write!(f, "posts.id NOT IN ({})", join_ids(ids))
            }
            Predicate::SlugIn(slugs) => {
                if slugs.is_empty() {
                    // IN over nothing matches nothing.
                    return f.write_str("1 = 0");
                }
                write!(f, "terms.slug IN ({})", join_slugs(slugs))
            }
            Predicate::AuthorIs(author) => write!(f, "posts.author_id = {author}"),
            Predicate::AnyOf(predicates) => {
                f.write_str("(")?;
                for (i, p) in predicates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" OR ")?;
                    }
                    write!(f, "{p}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn join_ids(ids: &BTreeSet<PostId>) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&id.to_string());
    }
    out
}

fn join_slugs(slugs: &BTreeSet<Slug>) -> String {
    let mut out = String::new();
    for (i, slug) in slugs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&quote_literal(slug.as_str()));
    }
    out
}

/// Quote a string literal for clause text, doubling embedded quotes.
fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
