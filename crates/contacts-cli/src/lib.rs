//! HTTP client for the contacts API.
//!
//! [`ContactsClient`] wraps the six API calls. Non-2xx responses surface as
//! [`ClientError::Api`] carrying the server's `message` text verbatim.

pub mod client;
pub mod error;
pub mod render;

pub use client::{ContactFields, ContactView, ContactsClient};
pub use error::ClientError;
