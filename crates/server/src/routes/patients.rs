use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use service::patient::{Patient, PatientDto};
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Patient id
    pub id: i64,
}

/// JSON body when present, empty 200 otherwise.
fn json_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(v) => Json(v).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

#[utoipa::path(
    get, path = "/get_patient", tag = "patient",
    params(IdQuery),
    responses(
        (status = 200, description = "Patient, or an empty body when the id is unknown", body = crate::openapi::PatientDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_patient(State(state): State<ServerState>, Query(q): Query<IdQuery>) -> Result<Response, ApiError> {
    let found = state.patients.get_by_id(q.id).await?;
    if found.is_none() {
        info!(id = q.id, "patient not found");
    }
    Ok(json_or_empty(found))
}

#[utoipa::path(
    post, path = "/post_patient", tag = "patient",
    request_body = crate::openapi::PatientDoc,
    responses(
        (status = 200, description = "Persisted patient", body = crate::openapi::PatientDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn post_patient(State(state): State<ServerState>, Json(patient): Json<Patient>) -> Result<Json<Patient>, ApiError> {
    let saved = state.patients.create(patient).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post, path = "/delete_patient", tag = "patient",
    params(IdQuery),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_patient(State(state): State<ServerState>, Query(q): Query<IdQuery>) -> Result<StatusCode, ApiError> {
    state.patients.delete_by_id(q.id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post, path = "/save", tag = "patient",
    request_body = crate::openapi::PatientDtoDoc,
    responses(
        (status = 200, description = "Persisted patient DTO", body = crate::openapi::PatientDtoDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn save(State(state): State<ServerState>, Json(dto): Json<PatientDto>) -> Result<Json<PatientDto>, ApiError> {
    let saved = state.patients.save_dto(dto).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    get, path = "/patients", tag = "patient",
    responses(
        (status = 200, description = "All patients ordered by id", body = [crate::openapi::PatientDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let all = state.patients.list().await?;
    info!(count = all.len(), "list patients");
    Ok(Json(all))
}
