//! People API handlers
//!
//! Contains HTTP request handlers for people CRUD operations.

use crate::error::AppError;
use crate::state::{AppState, Person, PersonId};
use crate::validation::PersonPayload;
use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the application state
pub type SharedState = Arc<RwLock<AppState>>;

/// Person response type
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    /// Identifier the person is stored under
    pub id: PersonId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl PersonResponse {
    fn project(id: PersonId, person: &Person) -> Self {
        Self {
            id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
        }
    }
}

/// GET /people - List all people
pub async fn list_people(State(state): State<SharedState>) -> Json<Vec<PersonResponse>> {
    let state = state.read().await;
    let people = state
        .people_list()
        .into_iter()
        .map(|(id, person)| PersonResponse::project(id, person))
        .collect();

    Json(people)
}

/// GET /people/:id - Get a specific person
pub async fn get_person(
    State(state): State<SharedState>,
    Path(id): Path<PersonId>,
) -> Result<Json<PersonResponse>, AppError> {
    let state = state.read().await;
    let person = state.get_person(id).ok_or(AppError::PersonNotFound(id))?;

    Ok(Json(PersonResponse::project(id, person)))
}

/// POST /people - Create a new person
///
/// Responds 201 with the created record and a Location header pointing at
/// the new resource.
pub async fn create_person(
    State(state): State<SharedState>,
    Json(payload): Json<PersonPayload>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<PersonResponse>), AppError> {
    // Validate before taking the write guard; no mutation on failure
    let person = payload.validate().map_err(AppError::Validation)?;

    let mut state = state.write().await;
    let id = state.add_person(person.clone());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/people/{id}"))],
        Json(PersonResponse::project(id, &person)),
    ))
}

/// PUT /people/:id - Replace a person wholesale
pub async fn update_person(
    State(state): State<SharedState>,
    Path(id): Path<PersonId>,
    Json(payload): Json<PersonPayload>,
) -> Result<StatusCode, AppError> {
    // Validation short-circuits ahead of the existence check
    let person = payload.validate().map_err(AppError::Validation)?;

    let mut state = state.write().await;
    if !state.replace_person(id, person) {
        return Err(AppError::PersonNotFound(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /people/:id - Remove a person
pub async fn delete_person(
    State(state): State<SharedState>,
    Path(id): Path<PersonId>,
) -> Result<StatusCode, AppError> {
    let mut state = state.write().await;
    state.remove_person(id).ok_or(AppError::PersonNotFound(id))?;

    Ok(StatusCode::NO_CONTENT)
}
