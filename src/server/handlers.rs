use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::server::state::AppState;
use crate::utils::error::PromoError;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<String, PromoError> {
    let count = state.lookup().repository().len()?;
    Ok(format!("Promotion lookup is running ({} promotions loaded)", count))
}

/// GET /promotions/{id}
///
/// A suffix that does not decode to UTF-8 gets the same 400 as any other
/// malformed id.
pub async fn get_promotion(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, PromoError> {
    let Path(id) = id.map_err(|rejection| PromoError::InvalidIdError {
        raw: rejection.body_text(),
    })?;
    promotion_response(&state, &id)
}

/// GET /promotions/
pub async fn get_promotion_without_id(
    State(state): State<AppState>,
) -> Result<Response, PromoError> {
    promotion_response(&state, "")
}

fn promotion_response(state: &AppState, raw_id: &str) -> Result<Response, PromoError> {
    let promotion = state.lookup().find(raw_id)?;
    let body = serde_json::to_vec(&promotion)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
