//! Query fragment builder.
//!
//! A [`QueryFragment`] carries everything this overlay asks the host to
//! merge into its listing query: AND-ed row predicates, required joins
//! (insertion-ordered, each present at most once), and a distinct-rows
//! requirement. The host owns and executes the final query; the fragment
//! is only additions to it.

use crate::join::{JoinClause, JoinKey};
use crate::predicate::Predicate;
use std::fmt::Write as _;

/// Additions to the host's post-listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFragment {
    predicates: Vec<Predicate>,
    joins: Vec<JoinClause>,
    distinct: bool,
}

impl QueryFragment {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// AND `predicate` into the row constraints.
    pub fn and_where(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Require `key`'s join.
    ///
    /// No-op when the key is already present, so repeated augmentation is
    /// idempotent.
    pub fn require_join(&mut self, key: JoinKey) {
        if !self.has_join(key) {
            self.joins.push(JoinClause::new(key));
        }
    }

    /// Whether `key`'s join is already required.
    pub fn has_join(&self, key: JoinKey) -> bool {
        self.joins.iter().any(|j| j.key() == key)
    }

    /// Require distinct result rows.
    pub fn set_distinct(&mut self) {
        self.distinct = true;
    }

    /// Whether distinct result rows are required.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Row constraints in insertion order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Required joins in insertion order.
    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    /// True when the fragment modifies nothing.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.joins.is_empty() && !self.distinct
    }

    /// WHERE-clause text: predicates AND-ed, each parenthesized.
    ///
    /// Empty string when there are no row constraints; the host splices
    /// the text into its own WHERE clause.
    pub fn where_sql(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.predicates.iter().enumerate() {
            if i > 0 {
                out.push_str(" AND ");
            }
            let _ = write!(out, "({p})");
        }
        out
    }

    /// JOIN-clause text in insertion order, space-separated.
    pub fn join_sql(&self) -> String {
        let mut out = String::new();
        for (i, j) in self.joins.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{j}");
        }
        out
    }

    /// DISTINCT keyword, or empty when not required.
    pub fn distinct_sql(&self) -> &'static str {
        if self.distinct {
            "DISTINCT"
        } else {
            ""
        }
    }
}
