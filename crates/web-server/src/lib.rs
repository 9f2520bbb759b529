//! Web server for ticklist
//!
//! Serves the server-rendered task list UI and a small JSON API over the
//! same task store. Every mutation goes through a post/redirect/get cycle,
//! so the page is re-rendered from storage after each interaction.

pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::task::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
