//! Visibility policy for the Tagveil post-visibility overlay
//!
//! This crate holds the two decision functions the host's listing pipeline
//! calls, plus the collaborator seam they share:
//!
//! - **Visibility policy**: [`apply_row_filter`], [`apply_join_filter`],
//!   and [`apply_distinct_filter`] modify a [`QueryFragment`] so that
//!   posts carrying configured tags are hidden (exclusive mode) or are the
//!   only ones shown (inclusive mode)
//! - **Term filter**: [`filter_terms`] trims the taxonomy the same way
//!
//! # Core Types
//!
//! - [`PolicyContext`]: request-scoped configuration + visitor identity,
//!   built once at the boundary and passed into every decision function
//! - [`TermPostIndex`]: the host-owned lookup "post ids linked to terms
//!   with these slugs", needed by exclusive-mode row filtering
//!
//! # Evaluation Semantics
//!
//! 1. **Author exception**: an authenticated author's own posts always
//!    stay visible, in both modes, regardless of tags
//! 2. **Exclusive mode**: resolve excluded post ids through the index and
//!    exclude those rows; an empty id set (no configured tags, no tagged
//!    posts, or a failed lookup) adds no constraint at all
//! 3. **Inclusive mode**: constrain on term slugs, which additionally
//!    requires the post→term join chain and distinct result rows
//! 4. **Fail open**: index lookup errors are logged and treated as "no
//!    excluded posts"; a decision function never returns an error to the
//!    listing pipeline
//!
//! All evaluation is synchronous, request-scoped, and idempotent; the
//! functions share nothing beyond the context passed in.
//!
//! [`QueryFragment`]: tagveil_query::QueryFragment

pub mod context;
pub mod error;
pub mod index;
pub mod terms;
pub mod visibility;

pub use context::PolicyContext;
pub use error::{PolicyError, Result};
pub use index::{MemoryTermIndex, NoOpTermIndex, TermPostIndex};
pub use terms::filter_terms;
pub use visibility::{apply_distinct_filter, apply_join_filter, apply_row_filter};
