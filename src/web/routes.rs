//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, vote_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET  /`     - Home page with the current visit count
/// - `POST /vote` - Vote submission, redirects back to `/`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/vote", post(vote_handler))
}
