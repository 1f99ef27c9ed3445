use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::registry::{RegistryError, SharedRegistry};

fn error_response(err: &RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        RegistryError::ActivityNotFound | RegistryError::ParticipantNotFound => {
            StatusCode::NOT_FOUND
        }
    };
    (status, Json(json!({ "detail": err.to_string() })))
}

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<IndexMap<String, Activity>> {
    Json(registry.read().await.activities().clone())
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut registry = registry.write().await;
    match registry.signup(&activity_name, &query.email) {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Signup rejected: {}", e);
            Err(error_response(&e))
        }
    }
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut registry = registry.write().await;
    match registry.remove(&activity_name, &email) {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "Removal rejected: {}", e);
            Err(error_response(&e))
        }
    }
}
