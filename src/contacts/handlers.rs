use super::store::ContactStore;
use super::types::{Contact, ContactPayload};
use crate::error::StoreError;

use axum::{
    Extension, Json, Router,
    body::Bytes,
    extract::Path,
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;

/// Collection endpoint: list and create.
pub const ENDPOINT_CONTACTS: &str = "/contacts";
/// Single-contact endpoint: get, replace and delete.
pub const ENDPOINT_CONTACT: &str = "/contacts/:id";

/// Builds the HTTP application over a shared store.
pub fn router(store: Arc<ContactStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_CONTACTS,
            get(handle_list_contacts).post(handle_create_contact),
        )
        .route(
            ENDPOINT_CONTACT,
            get(handle_get_contact)
                .put(handle_replace_contact)
                .delete(handle_delete_contact),
        )
        .layer(Extension(store))
}

pub async fn handle_list_contacts(
    Extension(store): Extension<Arc<ContactStore>>,
) -> Result<(StatusCode, Json<Vec<Contact>>), StatusCode> {
    match store.list().await {
        Ok(contacts) => {
            tracing::debug!("Listing {} contacts", contacts.len());
            Ok((StatusCode::OK, Json(contacts)))
        }
        Err(e) => Err(error_status("list", &e)),
    }
}

pub async fn handle_get_contact(
    Extension(store): Extension<Arc<ContactStore>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Contact>), StatusCode> {
    match store.get(&id).await {
        Ok(contact) => Ok((StatusCode::OK, Json(contact))),
        Err(e) => Err(error_status("get", &e)),
    }
}

pub async fn handle_create_contact(
    Extension(store): Extension<Arc<ContactStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), StatusCode> {
    let payload = parse_payload(&body)?;
    match store.create(payload).await {
        Ok(contact) => Ok((StatusCode::CREATED, Json(contact))),
        Err(e) => Err(error_status("create", &e)),
    }
}

pub async fn handle_replace_contact(
    Extension(store): Extension<Arc<ContactStore>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), StatusCode> {
    let payload = parse_payload(&body)?;
    match store.replace(&id, payload).await {
        Ok(contact) => Ok((StatusCode::OK, Json(contact))),
        Err(e) => Err(error_status("replace", &e)),
    }
}

pub async fn handle_delete_contact(
    Extension(store): Extension<Arc<ContactStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    match store.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => error_status("delete", &e),
    }
}

/// Decodes a request body whatever its content type; undecodable bodies get an empty 400.
fn parse_payload(body: &[u8]) -> Result<ContactPayload, StatusCode> {
    ContactPayload::from_body(body).map_err(|e| {
        tracing::debug!("Rejecting contact body: {}", e);
        StatusCode::BAD_REQUEST
    })
}

/// Maps a store failure to an empty-bodied status.
pub fn error_status(operation: &str, error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound(id) => {
            tracing::debug!("{}: contact {} not found", operation, id);
            StatusCode::NOT_FOUND
        }
        StoreError::MalformedData(_) | StoreError::StorageUnavailable { .. } => {
            tracing::error!("Failed to {} contact: {}", operation, error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
