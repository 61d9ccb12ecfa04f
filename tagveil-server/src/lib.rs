//! Administrative settings server for the Tagveil post-visibility overlay
//!
//! Tagveil's decision functions read three persisted values: the filtering
//! mode and two comma-separated tag lists. This crate is the surface an
//! administrator changes them through: an HTML settings form plus a JSON
//! equivalent, backed by a [`SettingsStore`] that seeds the documented
//! defaults on first activation (`mode=exclusive`, excluded "Private",
//! included "Public").
//!
//! Reads fall back to the defaults on any failure; a broken settings file
//! never blocks a listing. Writes are validated: an unrecognized mode is
//! rejected with 400 rather than persisted.

pub mod config;
pub mod error;
pub mod routes;
pub mod settings;
pub mod state;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::build_router;
pub use settings::SettingsStore;
pub use state::AppState;
