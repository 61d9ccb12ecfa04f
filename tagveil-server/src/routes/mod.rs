//! HTTP routes

pub mod admin;
pub mod settings;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Build the settings server router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(admin::health))
        .route(
            "/settings",
            get(settings::settings_page).post(settings::update_settings),
        )
        .route(
            "/settings.json",
            get(settings::get_settings).put(settings::put_settings),
        )
        .with_state(state)
}
