//! Route handlers
//!
//! Each handler locks the shared service, runs one operation and renders
//! the result. Errors carry the request id into `ApiError`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use kinship_core::{ExError, ExErrorKind, Person, PersonRef, PersonStore, PersonView};
use kinship_core_types::RequestId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of an add request
///
/// A missing `name` deserializes as empty and is rejected by validation.
/// Missing or `null` relative lists are treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct AddPersonBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parents: Option<Vec<String>>,
    #[serde(default)]
    pub children: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AddPersonResponse {
    pub message: String,
    pub person: Person,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "kinship",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /person
pub async fn add_person<S>(
    State(state): State<AppState<S>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<AddPersonBody>, JsonRejection>,
) -> Result<(StatusCode, Json<AddPersonResponse>), ApiError>
where
    S: PersonStore + Send + 'static,
{
    let Json(body) = body.map_err(|rejection| {
        ApiError(
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("person_add")
                .with_request_id(request_id.clone())
                .with_message(rejection.body_text()),
        )
    })?;

    let parents = body.parents.unwrap_or_default();
    let children = body.children.unwrap_or_default();

    let person = state
        .lock()
        .await
        .add_person(&body.name, &parents, &children)
        .map_err(|e| ApiError(e.with_request_id(request_id)))?;

    Ok((
        StatusCode::CREATED,
        Json(AddPersonResponse {
            message: "Person added successfully!".to_string(),
            person,
        }),
    ))
}

/// GET /person/:name
pub async fn find_person<S>(
    State(state): State<AppState<S>>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> Result<Json<PersonView>, ApiError>
where
    S: PersonStore + Send + 'static,
{
    let view = state
        .lock()
        .await
        .find_person(&name)
        .map_err(|e| ApiError(e.with_request_id(request_id.clone())))?;

    view.map(Json).ok_or_else(|| {
        ApiError(
            ExError::new(ExErrorKind::NotFound)
                .with_op("person_find")
                .with_entity_id(name)
                .with_request_id(request_id)
                .with_message("Person not found"),
        )
    })
}

/// DELETE /person/:name
pub async fn delete_person<S>(
    State(state): State<AppState<S>>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    S: PersonStore + Send + 'static,
{
    let person = state
        .lock()
        .await
        .delete_person(&name)
        .map_err(|e| ApiError(e.with_request_id(request_id)))?;

    Ok(Json(MessageResponse {
        message: format!("{} has been deleted successfully", person.name),
    }))
}

/// GET /person
pub async fn list_people<S>(
    State(state): State<AppState<S>>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<Vec<PersonRef>>, ApiError>
where
    S: PersonStore + Send + 'static,
{
    let people = state
        .lock()
        .await
        .list_all()
        .map_err(|e| ApiError(e.with_request_id(request_id)))?;

    Ok(Json(people))
}
