//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::domain::counter;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with the post-increment visit count.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub visit_count: i64,
}

/// Counts the visit and renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Every request increments the `hits` counter; the rendered count is the
/// store's post-increment value, never a cached one.
///
/// # Errors
///
/// Returns 500 if the store stays unreachable after the retry budget.
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let visit_count = state.counters.increment(counter::HITS).await?;

    Ok(HomeTemplate { visit_count })
}
