//! Structured query fragments for the Tagveil post-visibility overlay
//!
//! The host platform owns and executes the post-listing query; Tagveil only
//! hands it modifications: row constraints to AND into the WHERE clause,
//! joins the constraints depend on, and a distinct-rows requirement. This
//! crate models those modifications as data instead of clause strings:
//!
//! - [`Predicate`]: a row constraint (NOT-IN exclusion, slug selection,
//!   author ownership, OR-combinations)
//! - [`JoinKey`] / [`JoinClause`]: the post→term join chain, keyed by a
//!   canonical identifier so "already joined" is a set-membership check
//!   rather than substring search
//! - [`QueryFragment`]: the builder the visibility hooks thread through
//!
//! Hosts that splice clause text use the `where_sql`/`join_sql`/
//! `distinct_sql` renderings; structured hosts consume the fragment
//! directly.

pub mod fragment;
pub mod join;
pub mod predicate;

pub use fragment::QueryFragment;
pub use join::{JoinClause, JoinKey};
pub use predicate::Predicate;
