//! In-memory storage for contact records.
//!
//! Provides the [`ContactStore`] trait defining the storage contract, plus
//! two in-memory backends:
//!
//! - [`InMemoryStore`]: an insertion-ordered `Vec` with linear-scan lookups.
//! - [`IndexedStore`]: a `BTreeMap` keyed by [`ContactId`].
//!
//! Both backends own the id counter. Ids start at 1, are strictly increasing
//! in assignment order, and are never reused after deletion.
//!
//! # Modules
//!
//! - [`contact`]: Contact, ContactId, NewContact, ContactPatch
//! - [`error`]: ContactError for creation payload validation
//! - [`traits`]: ContactStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`indexed`]: IndexedStore implementation

pub mod contact;
pub mod error;
pub mod indexed;
pub mod memory;
pub mod traits;

// Re-export key types for ergonomic use.
pub use contact::{Contact, ContactId, ContactPatch, NewContact};
pub use error::ContactError;
pub use indexed::IndexedStore;
pub use memory::InMemoryStore;
pub use traits::ContactStore;
