//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization. Contact
//! records themselves are serialized directly from
//! [`contacts_store::Contact`].

pub mod common;
pub mod contacts;
