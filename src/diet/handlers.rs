use axum::{extract::State, http::StatusCode, routing::post, Form, Json, Router};
use tracing::{instrument, warn};

use super::dto::{CalculateForm, CalculationResult};
use super::services::calculate_and_record;
use crate::state::AppState;

pub fn calculate_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// POST /calculate (form-encoded)
#[instrument(skip(state, form))]
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Result<Json<CalculationResult>, (StatusCode, String)> {
    match calculate_and_record(state.history.as_ref(), form).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_invalid_input() => {
            warn!(error = %e, "rejected calculation input");
            Err((StatusCode::BAD_REQUEST, format!("Error: {e}")))
        }
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}"))),
    }
}
