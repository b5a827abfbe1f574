//! HTTP/JSON API server for contact management.
//!
//! Exposes create, list, get, update, and delete operations over a single
//! in-memory contact store. This crate contains the server framework, API
//! schema types, error handling, configuration, and route definitions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
