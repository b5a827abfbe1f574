//! ContactService: the single coordinator between HTTP handlers and the
//! contact store.
//!
//! All request-level validation flows through [`ContactService`]. Handlers
//! are thin wrappers that extract the request and delegate here; the store
//! itself never re-validates.

use contacts_store::{Contact, ContactError, ContactId, ContactPatch, ContactStore, NewContact};

use crate::config::StoreBackend;
use crate::error::ApiError;
use crate::schema::contacts::{CreateContactRequest, UpdateContactRequest};

/// Owns the contact store and maps its outcomes to [`ApiError`]s.
pub struct ContactService {
    store: Box<dyn ContactStore>,
}

impl ContactService {
    /// Creates a service over an empty store of the given backend.
    pub fn new(backend: StoreBackend) -> Self {
        ContactService {
            store: backend.open(),
        }
    }

    /// Validates the request and stores a new contact.
    pub fn create_contact(&mut self, req: CreateContactRequest) -> Result<Contact, ApiError> {
        let new = NewContact::try_from(req).map_err(|err| {
            let ContactError::MissingFields { missing } = &err;
            tracing::warn!(?missing, "contact rejected");
            ApiError::from(err)
        })?;
        let contact = self.store.create(new);
        tracing::info!(id = %contact.id(), total = self.store.len(), "contact created");
        Ok(contact)
    }

    /// All contacts in insertion order.
    pub fn list_contacts(&self) -> Vec<Contact> {
        let contacts = self.store.list();
        tracing::debug!(count = contacts.len(), "contacts listed");
        contacts
    }

    pub fn get_contact(&self, id: ContactId) -> Result<Contact, ApiError> {
        self.store
            .find_by_id(id)
            .ok_or_else(ApiError::contact_not_found)
    }

    /// Applies the non-empty fields of `req` to an existing contact.
    pub fn update_contact(
        &mut self,
        id: ContactId,
        req: UpdateContactRequest,
    ) -> Result<Contact, ApiError> {
        let patch = ContactPatch::from(req);
        let contact = self
            .store
            .update(id, &patch)
            .ok_or_else(ApiError::contact_not_found)?;
        tracing::info!(%id, unchanged = patch.is_empty(), "contact updated");
        Ok(contact)
    }

    pub fn delete_contact(&mut self, id: ContactId) -> Result<(), ApiError> {
        if !self.store.delete(id) {
            return Err(ApiError::contact_not_found());
        }
        tracing::info!(%id, total = self.store.len(), "contact deleted");
        Ok(())
    }

    /// Number of stored contacts.
    pub fn contact_count(&self) -> usize {
        self.store.len()
    }
}
