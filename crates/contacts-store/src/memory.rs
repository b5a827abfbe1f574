//! In-memory implementation of [`ContactStore`].
//!
//! [`InMemoryStore`] keeps contacts in a `Vec` in insertion order and finds
//! them by linear scan. At the scale of a single-user contact list that is
//! the simplest correct layout; [`IndexedStore`](crate::IndexedStore) is the
//! keyed alternative.

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};
use crate::traits::ContactStore;

/// Insertion-ordered contact store with linear-scan lookups.
#[derive(Debug)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    /// Next id to hand out. Only ever increments.
    next_id: u64,
}

impl InMemoryStore {
    /// Creates an empty store whose first contact will get id 1.
    pub fn new() -> Self {
        InMemoryStore {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for InMemoryStore {
    fn create(&mut self, new: NewContact) -> Contact {
        let id = ContactId(self.next_id);
        self.next_id += 1;

        let contact = Contact::from_new(id, new);
        self.contacts.push(contact.clone());
        contact
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn find_by_id(&self, id: ContactId) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id() == id).cloned()
    }

    fn update(&mut self, id: ContactId, patch: &ContactPatch) -> Option<Contact> {
        let contact = self.contacts.iter_mut().find(|c| c.id() == id)?;
        contact.apply(patch);
        Some(contact.clone())
    }

    fn delete(&mut self, id: ContactId) -> bool {
        match self.position(id) {
            Some(index) => {
                // `remove`, not `swap_remove`: listing order must survive.
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
