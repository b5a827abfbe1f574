//! Contact record types.
//!
//! [`Contact`] fields are private to this crate: records are only created
//! and mutated by a [`ContactStore`](crate::ContactStore). Other crates read
//! them through accessors. `Contact` serializes but does not deserialize;
//! API clients decode into their own view type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Unique identifier for a stored contact.
///
/// Serializes as a bare integer. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: String,
    phone: String,
}

impl Contact {
    pub(crate) fn from_new(id: ContactId, new: NewContact) -> Self {
        Contact {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
        }
    }

    /// Overwrites every field the patch provides. The id never changes.
    pub(crate) fn apply(&mut self, patch: &ContactPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// A validated creation payload.
///
/// Only obtainable through [`NewContact::new`], so holding one proves all
/// three fields are non-empty. Stores accept it without re-validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    phone: String,
}

impl NewContact {
    /// Builds a creation payload from optional request fields.
    ///
    /// Fails with [`ContactError::MissingFields`] when any field is `None`
    /// or the empty string.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, ContactError> {
        let mut missing = Vec::new();
        let name = require("name", name, &mut missing);
        let email = require("email", email, &mut missing);
        let phone = require("phone", phone, &mut missing);

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) => Ok(NewContact { name, email, phone }),
            _ => Err(ContactError::MissingFields { missing }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

fn require(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// A partial update.
///
/// `None` means "keep the current value". An empty string is treated the
/// same as an omitted field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl ContactPatch {
    pub fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self {
        ContactPatch {
            name: non_empty(name),
            email: non_empty(email),
            phone: non_empty(phone),
        }
    }

    /// Returns true when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
