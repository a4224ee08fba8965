//! Contacts Service Library
//!
//! A small HTTP service exposing CRUD over contacts persisted as one JSON document.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`contacts`**: The `Contact` entity, the `ContactStore` with its five operations,
//!   and the Axum handlers that map HTTP requests onto them.
//! - **`storage`**: The JSON codec and the byte-level backends (file on disk, or memory).
//! - **`config`**: Command-line and environment configuration for the binary.
//! - **`error`**: The `StoreError` taxonomy shared by every layer.

pub mod config;
pub mod contacts;
pub mod error;
pub mod storage;
