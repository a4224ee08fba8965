use super::types::{Contact, ContactPayload, new_contact_id};
use crate::error::{Result, StoreError};
use crate::storage::backend::Backend;
use crate::storage::codec;

use std::sync::Arc;
use tokio::sync::Mutex;

/// How the store reacts to persisted bytes that do not decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Treat undecodable data as an empty collection and log a warning.
    /// The next mutation overwrites the undecodable file.
    #[default]
    Lenient,
    /// Surface undecodable data as `StoreError::MalformedData`.
    Strict,
}

/// Repository of contacts over a whole-collection backend.
///
/// Each operation loads the full collection, applies at most one mutation and,
/// if it mutated, persists the full collection again. The cycle runs under a
/// single lock, so concurrent requests are applied one after another instead of
/// overwriting each other's changes.
pub struct ContactStore {
    backend: Arc<dyn Backend>,
    policy: DecodePolicy,
    cycle: Mutex<()>,
}

impl ContactStore {
    pub fn new(backend: Arc<dyn Backend>, policy: DecodePolicy) -> Self {
        Self {
            backend,
            policy,
            cycle: Mutex::new(()),
        }
    }

    /// Returns the full collection in persisted order.
    ///
    /// A backend with nothing persisted yields an empty collection.
    pub async fn list(&self) -> Result<Vec<Contact>> {
        let _guard = self.cycle.lock().await;
        self.load().await
    }

    /// Returns the first contact whose id equals `id`.
    pub async fn get(&self, id: &str) -> Result<Contact> {
        let _guard = self.cycle.lock().await;
        self.load()
            .await?
            .into_iter()
            .find(|contact| contact.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Appends a new contact with a freshly generated id.
    pub async fn create(&self, payload: ContactPayload) -> Result<Contact> {
        let _guard = self.cycle.lock().await;
        let mut contacts = self.load().await?;

        let contact = Contact::from_payload(new_contact_id(), payload);
        contacts.push(contact.clone());
        self.persist(&contacts).await?;

        tracing::info!("Created contact {}", contact.id);
        Ok(contact)
    }

    /// Replaces the first contact whose id equals `id`, keeping its position.
    ///
    /// Nothing is persisted when no contact matches.
    pub async fn replace(&self, id: &str, payload: ContactPayload) -> Result<Contact> {
        let _guard = self.cycle.lock().await;
        let mut contacts = self.load().await?;

        let slot = contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = Contact::from_payload(id, payload);
        let replaced = slot.clone();
        self.persist(&contacts).await?;

        tracing::info!("Replaced contact {}", id);
        Ok(replaced)
    }

    /// Removes the first contact whose id equals `id`.
    ///
    /// Nothing is persisted when no contact matches.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.cycle.lock().await;
        let mut contacts = self.load().await?;

        let index = contacts
            .iter()
            .position(|contact| contact.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contacts.remove(index);
        self.persist(&contacts).await?;

        tracing::info!("Deleted contact {}", id);
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        let Some(bytes) = self.backend.read().await? else {
            tracing::debug!(
                "No collection persisted at {}, starting empty",
                self.backend.describe()
            );
            return Ok(Vec::new());
        };

        match codec::decode(&bytes) {
            Ok(contacts) => Ok(contacts),
            Err(StoreError::MalformedData(e)) if self.policy == DecodePolicy::Lenient => {
                tracing::warn!(
                    "Ignoring malformed collection at {}: {}",
                    self.backend.describe(),
                    e
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, contacts: &[Contact]) -> Result<()> {
        let bytes = codec::encode(contacts)?;
        self.backend.write(&bytes).await
    }
}
