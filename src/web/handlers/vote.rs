//! Vote submission handler.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};

use crate::domain::counter;
use crate::error::AppError;
use crate::state::AppState;

/// Records a vote and sends the browser back to the home page.
///
/// # Endpoint
///
/// `POST /vote`
///
/// Responds with 303 See Other so the follow-up request is a plain `GET /`.
///
/// # Errors
///
/// Returns 500 if the store stays unreachable after the retry budget.
pub async fn vote_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.counters.increment(counter::VOTES).await?;

    Ok(Redirect::to("/"))
}
