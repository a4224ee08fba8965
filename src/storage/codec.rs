//! JSON codec for the persisted contact collection.
//!
//! The persisted form is a JSON array of objects with string fields `id`, `name`,
//! `phone` and `email`, pretty-printed with 2-space indentation.

use crate::contacts::types::Contact;
use crate::error::{Result, StoreError};

/// Decodes a persisted collection.
///
/// Decoding is all-or-nothing: a document that is not an array of objects with
/// string fields is rejected as a whole with `MalformedData`.
pub fn decode(bytes: &[u8]) -> Result<Vec<Contact>> {
    serde_json::from_slice(bytes).map_err(StoreError::MalformedData)
}

/// Encodes the collection, preserving its order.
pub fn encode(contacts: &[Contact]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(contacts).map_err(StoreError::MalformedData)
}
