//! Error types for contacts-store.
//!
//! The store operations themselves cannot fail: lookups that miss return
//! `None` or `false`. [`ContactError`] covers the one caller-side failure,
//! an incomplete creation payload.

use thiserror::Error;

/// Errors produced while building store inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more of name, email, phone was missing or empty.
    #[error("All fields are required")]
    MissingFields {
        /// Names of the fields that were absent, in declaration order.
        missing: Vec<&'static str>,
    },
}
