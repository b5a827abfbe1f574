//! The [`ContactStore`] trait defining the storage contract for contacts.
//!
//! All backends ([`InMemoryStore`](crate::InMemoryStore),
//! [`IndexedStore`](crate::IndexedStore)) implement this trait and are fully
//! swappable behind `Box<dyn ContactStore>`.

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

/// The storage contract for contact records.
///
/// The trait is synchronous: every operation completes against local memory
/// with no suspension points. Callers that share a store across threads must
/// serialize access themselves (the server wraps it in a mutex).
pub trait ContactStore: Send {
    /// Stores a new contact under the next unused id and returns it.
    ///
    /// Ids start at 1 and strictly increase; deleted ids are never reused.
    fn create(&mut self, new: NewContact) -> Contact;

    /// Returns all current contacts in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Looks up a contact by exact id.
    fn find_by_id(&self, id: ContactId) -> Option<Contact>;

    /// Applies `patch` to the contact with the given id in place.
    ///
    /// Returns the updated record, or `None` if no such contact exists.
    fn update(&mut self, id: ContactId, patch: &ContactPatch) -> Option<Contact>;

    /// Removes the contact with the given id.
    ///
    /// Returns `true` if a record was removed. Remaining records keep their
    /// relative order.
    fn delete(&mut self, id: ContactId) -> bool;

    /// Number of contacts currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Behavioural checks shared by every backend's test module.
#[cfg(test)]
pub(crate) mod conformance {
    use super::*;

    pub fn new_contact(name: &str) -> NewContact {
        NewContact::new(
            Some(name.to_string()),
            Some(format!("{}@example.com", name.to_lowercase())),
            Some("123456789".to_string()),
        )
        .unwrap()
    }

    pub fn ids_start_at_one_and_increase(store: &mut dyn ContactStore) {
        let a = store.create(new_contact("A"));
        let b = store.create(new_contact("B"));
        assert_eq!(a.id(), ContactId(1));
        assert_eq!(b.id(), ContactId(2));
    }

    pub fn ids_are_not_reused_after_delete(store: &mut dyn ContactStore) {
        let a = store.create(new_contact("A"));
        let b = store.create(new_contact("B"));
        assert!(store.delete(b.id()));
        assert!(store.delete(a.id()));
        let c = store.create(new_contact("C"));
        assert_eq!(c.id(), ContactId(3));
        assert!(store.find_by_id(b.id()).is_none());
    }

    pub fn list_preserves_insertion_order(store: &mut dyn ContactStore) {
        assert!(store.list().is_empty());
        assert!(store.is_empty());
        let names = ["Ada", "Grace", "Linus", "Ken"];
        for name in names {
            store.create(new_contact(name));
        }
        let listed: Vec<String> = store.list().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(listed, names);
        assert_eq!(store.len(), 4);
    }

    pub fn find_returns_created_record(store: &mut dyn ContactStore) {
        let created = store.create(new_contact("John"));
        assert_eq!(store.find_by_id(created.id()), Some(created));
        assert_eq!(store.find_by_id(ContactId(99)), None);
    }

    pub fn update_replaces_only_provided_fields(store: &mut dyn ContactStore) {
        let created = store.create(new_contact("John"));
        let patch = ContactPatch::new(Some("Jane".to_string()), Some(String::new()), None);
        let updated = store.update(created.id(), &patch).unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Jane");
        assert_eq!(updated.email(), created.email());
        assert_eq!(updated.phone(), created.phone());
        assert_eq!(store.find_by_id(created.id()), Some(updated));
    }

    pub fn update_missing_returns_none(store: &mut dyn ContactStore) {
        store.create(new_contact("John"));
        let before = store.list();
        let patch = ContactPatch::new(Some("Jane".to_string()), None, None);
        assert!(store.update(ContactId(42), &patch).is_none());
        assert_eq!(store.list(), before);
    }

    pub fn delete_removes_exactly_one(store: &mut dyn ContactStore) {
        let a = store.create(new_contact("A"));
        let b = store.create(new_contact("B"));
        let c = store.create(new_contact("C"));

        assert!(!store.delete(ContactId(10)));
        assert_eq!(store.len(), 3);

        assert!(store.delete(b.id()));
        assert!(!store.delete(b.id()));
        assert_eq!(store.list(), vec![a, c]);
    }

    /// Runs every check above against fresh stores from `make`.
    pub fn run_all(make: fn() -> Box<dyn ContactStore>) {
        ids_start_at_one_and_increase(make().as_mut());
        ids_are_not_reused_after_delete(make().as_mut());
        list_preserves_insertion_order(make().as_mut());
        find_returns_created_record(make().as_mut());
        update_replaces_only_provided_fields(make().as_mut());
        update_missing_returns_none(make().as_mut());
        delete_removes_exactly_one(make().as_mut());
    }
}
