use serde::{Deserialize, Serialize};

/// A persisted contact.
///
/// `id` is assigned by the store and never taken from a client. Missing fields
/// decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Request body for create and replace.
///
/// Unknown fields are ignored, which is how a client-supplied `id` gets discarded.
/// Absent and `null` fields both become empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPayload {
    /// Decodes a raw request body regardless of its declared content type.
    ///
    /// An empty or `null` body is an empty payload.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default)
    }
}

impl Contact {
    pub fn from_payload(id: impl Into<String>, payload: ContactPayload) -> Self {
        Self {
            id: id.into(),
            name: payload.name.unwrap_or_default(),
            phone: payload.phone.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
        }
    }
}

/// Generates a new random UUID v4 contact identifier.
pub fn new_contact_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
