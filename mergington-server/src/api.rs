use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use mergington_core::{Catalog, MessageResponse, RegistryError};
use serde::Deserialize;

use crate::errors::{ServerError, ServerResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.registry.get_all().await)
}

pub async fn signup_for_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    if let Err(e) = state
        .registry
        .add_participant(&activity_name, &query.email)
        .await
    {
        return Err(reject(&state, &activity_name, &query.email, e).await);
    }

    tracing::info!(activity = %activity_name, email = %query.email, "Signed up participant");
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_signed_up(&activity_name, &query.email).await;
    }

    Ok(Json(MessageResponse::signed_up(&query.email, &activity_name)))
}

pub async fn unregister_participant(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    if let Err(e) = state
        .registry
        .remove_participant(&activity_name, &query.email)
        .await
    {
        return Err(reject(&state, &activity_name, &query.email, e).await);
    }

    tracing::info!(activity = %activity_name, email = %query.email, "Unregistered participant");
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_unregistered(&activity_name, &query.email).await;
    }

    Ok(Json(MessageResponse::unregistered(&query.email, &activity_name)))
}

async fn reject(
    state: &AppState,
    activity_name: &str,
    email: &str,
    error: RegistryError,
) -> ServerError {
    if let Some(monitoring) = &state.monitoring {
        monitoring
            .log_rejected(activity_name, email, error.detail())
            .await;
    }
    error.into()
}
