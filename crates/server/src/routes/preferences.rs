//! `/api/ai-company`, `/api/ai-field` and `/api/job-interest`.
//!
//! Each path stores one string per member under a fixed JSON key; all three
//! delegate to the shared [`PreferenceService`](service::preference::PreferenceService).
use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{Map, Value};
use service::{errors::ServiceError, preference::PreferenceKind};

use crate::errors::JsonApiError;
use crate::routes::auth::{Identity, ServerState};

/// Request/response body: a single `key -> value` pair; `{}` when unset.
pub type PreferenceBody = BTreeMap<&'static str, String>;

/// Incoming POST body; only the kind's key is inspected.
pub type PayloadMap = Map<String, Value>;

/// JSON key used on the wire for each kind.
pub fn payload_key(kind: PreferenceKind) -> &'static str {
    match kind {
        PreferenceKind::AiCompany => "aiCompany",
        PreferenceKind::AiField => "aiField",
        PreferenceKind::Job => "interest",
    }
}

async fn save(
    state: &ServerState,
    kind: PreferenceKind,
    identity: &Identity,
    body: &PayloadMap,
) -> Result<StatusCode, JsonApiError> {
    let key = payload_key(kind);
    let value = match body.get(key) {
        None => return Err(ServiceError::Validation(format!("missing field `{key}`")).into()),
        Some(Value::String(v)) => v,
        Some(other) => {
            return Err(JsonApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unprocessable Entity",
                Some(format!("`{key}` must be a string, got {other}")),
            ))
        }
    };
    state.preferences.upsert(kind, &identity.0, value).await?;
    Ok(StatusCode::OK)
}

async fn load(state: &ServerState, kind: PreferenceKind, identity: &Identity) -> Result<Json<PreferenceBody>, JsonApiError> {
    let mut out = PreferenceBody::new();
    if let Some(value) = state.preferences.query(kind, &identity.0).await? {
        out.insert(payload_key(kind), value);
    }
    Ok(Json(out))
}

#[utoipa::path(
    post, path = "/api/ai-company", tag = "preferences",
    request_body = crate::openapi::AiCompanyDoc,
    responses(
        (status = 200, description = "Saved"),
        (status = 400, description = "Missing aiCompany or token"),
        (status = 401, description = "Invalid token"),
        (status = 404, description = "Member Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn save_ai_company(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<PayloadMap>,
) -> Result<StatusCode, JsonApiError> {
    save(&state, PreferenceKind::AiCompany, &identity, &body).await
}

#[utoipa::path(
    get, path = "/api/ai-company", tag = "preferences",
    responses((status = 200, description = "`{\"aiCompany\": ...}` or `{}`", body = crate::openapi::AiCompanyDoc)),
    security(("bearer" = []))
)]
pub async fn get_ai_company(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<PreferenceBody>, JsonApiError> {
    load(&state, PreferenceKind::AiCompany, &identity).await
}

#[utoipa::path(
    post, path = "/api/ai-field", tag = "preferences",
    request_body = crate::openapi::AiFieldDoc,
    responses(
        (status = 200, description = "Saved"),
        (status = 400, description = "Missing aiField or token"),
        (status = 401, description = "Invalid token"),
        (status = 404, description = "Member Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn save_ai_field(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<PayloadMap>,
) -> Result<StatusCode, JsonApiError> {
    save(&state, PreferenceKind::AiField, &identity, &body).await
}

#[utoipa::path(
    get, path = "/api/ai-field", tag = "preferences",
    responses((status = 200, description = "`{\"aiField\": ...}` or `{}`", body = crate::openapi::AiFieldDoc)),
    security(("bearer" = []))
)]
pub async fn get_ai_field(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<PreferenceBody>, JsonApiError> {
    load(&state, PreferenceKind::AiField, &identity).await
}

#[utoipa::path(
    post, path = "/api/job-interest", tag = "preferences",
    request_body = crate::openapi::JobInterestDoc,
    responses(
        (status = 200, description = "Saved"),
        (status = 400, description = "Missing interest or token"),
        (status = 401, description = "Invalid token"),
        (status = 404, description = "Member Not Found")
    ),
    security(("bearer" = []))
)]
pub async fn save_job_interest(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<PayloadMap>,
) -> Result<StatusCode, JsonApiError> {
    save(&state, PreferenceKind::Job, &identity, &body).await
}

#[utoipa::path(
    get, path = "/api/job-interest", tag = "preferences",
    responses((status = 200, description = "`{\"interest\": ...}` or `{}`", body = crate::openapi::JobInterestDoc)),
    security(("bearer" = []))
)]
pub async fn get_job_interest(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<PreferenceBody>, JsonApiError> {
    load(&state, PreferenceKind::Job, &identity).await
}
