use super::AppState;
use super::actor::CurrentActor;
use super::validation::Valid;
use crate::application::asset::{IdResponse, UserCashOut, UserRegCashOut};
use crate::error::AssetError;
use axum::Json;
use axum::extract::State;

/// Lists unprocessed withdrawals of the caller (GET /asset/cio/unprocessedOut).
pub async fn find_unprocessed_cash_out(
    State(app): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<Vec<UserCashOut>>, AssetError> {
    let result = app.controller.find_unprocessed_cash_out(&actor).await?;
    Ok(Json(result))
}

/// Registers a withdrawal for the caller (POST /asset/cio/withdraw).
pub async fn withdraw(
    State(app): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Valid(payload): Valid<UserRegCashOut>,
) -> Result<Json<IdResponse>, AssetError> {
    let result = app.controller.withdraw(&actor, payload).await?;
    Ok(Json(result))
}

/// Liveness check (GET /health).
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
