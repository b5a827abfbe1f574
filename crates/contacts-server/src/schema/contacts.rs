//! Contact request types.
//!
//! Every field is optional at the wire level. Presence rules are enforced
//! afterwards: creation requires all three (see
//! [`contacts_store::NewContact`]), updates treat missing, `null`, and empty
//! values alike as "keep the current value".

use contacts_store::{ContactError, ContactPatch, NewContact};
use serde::Deserialize;

/// Body of `POST /contacts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl TryFrom<CreateContactRequest> for NewContact {
    type Error = ContactError;

    fn try_from(req: CreateContactRequest) -> Result<Self, Self::Error> {
        NewContact::new(req.name, req.email, req.phone)
    }
}

/// Body of `PUT /contacts/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<UpdateContactRequest> for ContactPatch {
    fn from(req: UpdateContactRequest) -> Self {
        ContactPatch::new(req.name, req.email, req.phone)
    }
}
