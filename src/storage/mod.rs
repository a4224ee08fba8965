//! Contact Persistence Module
//!
//! Owns the on-disk representation of the contact collection.
//!
//! ## Core Concepts
//! - **Whole-collection I/O**: the collection is always read and written as one JSON document.
//!   No component reads or patches individual records.
//! - **Backend**: a bytes-in/bytes-out handle (`Backend`) injected into the store at construction,
//!   so the location of the data (a file, or memory in tests) is never a hidden global.
//! - **Codec**: converts between `Vec<Contact>` and the pretty-printed JSON bytes a backend holds.

pub mod backend;
pub mod codec;
