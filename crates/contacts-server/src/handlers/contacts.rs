//! Contact CRUD handlers (create, list, get, update, delete).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contacts_store::Contact;

use crate::error::ApiError;
use crate::extract::{ApiJson, ContactIdParam};
use crate::schema::common::MessageResponse;
use crate::schema::contacts::{CreateContactRequest, UpdateContactRequest};
use crate::state::AppState;

/// Creates a new contact.
///
/// `POST /contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let mut service = state.service.lock().await;
    let contact = service.create_contact(req)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Lists all contacts in creation order.
///
/// `GET /contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Contact>> {
    let service = state.service.lock().await;
    Json(service.list_contacts())
}

/// Returns a single contact.
///
/// `GET /contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    ContactIdParam(id): ContactIdParam,
) -> Result<Json<Contact>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.get_contact(id)?))
}

/// Updates the provided fields of a contact.
///
/// `PUT /contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    ContactIdParam(id): ContactIdParam,
    ApiJson(req): ApiJson<UpdateContactRequest>,
) -> Result<Json<Contact>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.update_contact(id, req)?))
}

/// Deletes a contact.
///
/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    ContactIdParam(id): ContactIdParam,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_contact(id)?;
    Ok(Json(MessageResponse::new("Contact deleted")))
}
