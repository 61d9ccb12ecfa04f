//! Core types for the Tagveil post-visibility overlay
//!
//! Tagveil hides posts and taxonomy terms carrying configured tags from
//! visitors without an authenticated identity, while each author keeps
//! seeing their own posts. This crate holds the types every other Tagveil
//! crate shares:
//!
//! - [`PostId`] / [`AuthorId`]: typed identifiers for host-owned entities
//! - [`Visitor`]: the per-request identity signal (anonymous or authenticated)
//! - [`Slug`] / [`Term`]: normalized taxonomy slugs and term entries
//! - [`RawPolicySettings`]: the persisted, untyped settings shape
//! - [`PolicyConfig`]: the typed configuration produced by a single parse
//!   step at the request boundary
//!
//! # Configuration Lifecycle
//!
//! The host persists three values: a mode string and two comma-separated
//! tag lists. [`PolicyConfig::from_raw`] normalizes them (lower-case, trim,
//! drop empties) into typed sets once per evaluation boundary. Nothing is
//! cached across requests, so administrative writes take effect on the
//! next request.

pub mod config;
pub mod error;
pub mod ids;
pub mod term;

pub use config::{
    parse_tag_list, PolicyConfig, PolicyMode, RawPolicySettings, DEFAULT_EXCLUDED_TAGS,
    DEFAULT_INCLUDED_TAGS, DEFAULT_MODE,
};
pub use error::{CoreError, Result};
pub use ids::{AuthorId, PostId, Visitor};
pub use term::{Slug, Term};
