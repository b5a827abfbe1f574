//! Id-indexed implementation of [`ContactStore`].
//!
//! [`IndexedStore`] keys contacts by [`ContactId`] in a `BTreeMap`. Ids are
//! handed out in strictly increasing order, so key order is insertion order
//! and listing needs no extra bookkeeping.

use std::collections::BTreeMap;

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};
use crate::traits::ContactStore;

/// Contact store with logarithmic lookups by id.
#[derive(Debug)]
pub struct IndexedStore {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: u64,
}

impl IndexedStore {
    /// Creates an empty store whose first contact will get id 1.
    pub fn new() -> Self {
        IndexedStore {
            contacts: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for IndexedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for IndexedStore {
    fn create(&mut self, new: NewContact) -> Contact {
        let id = ContactId(self.next_id);
        self.next_id += 1;

        let contact = Contact::from_new(id, new);
        self.contacts.insert(id, contact.clone());
        contact
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    fn find_by_id(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(&id).cloned()
    }

    fn update(&mut self, id: ContactId, patch: &ContactPatch) -> Option<Contact> {
        let contact = self.contacts.get_mut(&id)?;
        contact.apply(patch);
        Some(contact.clone())
    }

    fn delete(&mut self, id: ContactId) -> bool {
        self.contacts.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
