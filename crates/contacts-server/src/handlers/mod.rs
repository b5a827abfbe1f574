//! HTTP handler modules for the contacts API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`ContactService`](crate::service::ContactService),
//! and return JSON responses. No business logic lives in handlers.

pub mod contacts;
pub mod root;
