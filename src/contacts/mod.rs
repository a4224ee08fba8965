//! Contacts Service Module
//!
//! CRUD over the single `Contact` entity, backed by the whole-collection storage layer.
//!
//! ## Overview
//! Every request is a fresh load -> mutate -> persist cycle against the backend.
//! No copy of the collection is cached between requests.
//!
//! ## Submodules
//! - **`types`**: The persisted `Contact` record and the request payload DTO.
//! - **`store`**: `ContactStore`, the five operations and identifier assignment.
//! - **`handlers`**: HTTP request handlers for the Axum web server and the router.

pub mod handlers;
pub mod store;
pub mod types;
