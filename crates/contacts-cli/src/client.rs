//! Typed wrapper over the contacts HTTP API.

use contacts_store::ContactId;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request body for create and update. Unset fields are omitted from the
/// JSON, which the server treats as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A contact as returned by the API.
///
/// The client's own decoding target: only the server's store creates
/// contacts, this is a read-only snapshot of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Client for one contacts API server.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactsClient {
    pub fn new(base_url: &str) -> Self {
        ContactsClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /` — returns the server's welcome message.
    pub async fn welcome(&self) -> Result<String, ClientError> {
        let body: MessageBody = send(self.http.get(self.url("/"))).await?;
        Ok(body.message)
    }

    /// `GET /contacts`
    pub async fn list(&self) -> Result<Vec<ContactView>, ClientError> {
        send(self.http.get(self.url("/contacts"))).await
    }

    /// `GET /contacts/{id}`
    pub async fn get(&self, id: ContactId) -> Result<ContactView, ClientError> {
        send(self.http.get(self.url(&format!("/contacts/{id}")))).await
    }

    /// `POST /contacts`
    pub async fn create(&self, fields: &ContactFields) -> Result<ContactView, ClientError> {
        send(self.http.post(self.url("/contacts")).json(fields)).await
    }

    /// `PUT /contacts/{id}`
    pub async fn update(
        &self,
        id: ContactId,
        fields: &ContactFields,
    ) -> Result<ContactView, ClientError> {
        send(
            self.http
                .put(self.url(&format!("/contacts/{id}")))
                .json(fields),
        )
        .await
    }

    /// `DELETE /contacts/{id}` — returns the confirmation message.
    pub async fn delete(&self, id: ContactId) -> Result<String, ClientError> {
        let body: MessageBody =
            send(self.http.delete(self.url(&format!("/contacts/{id}")))).await?;
        Ok(body.message)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await?;
    let message = match serde_json::from_str::<MessageBody>(&text) {
        Ok(body) => body.message,
        Err(_) if text.is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => text,
    };
    Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ContactsClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/contacts"), "http://localhost:8000/contacts");
    }

    #[test]
    fn contact_view_decodes_server_json() {
        let view: ContactView = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "1"
        }))
        .unwrap();
        assert_eq!(view.id, ContactId(4));
        assert_eq!(view.name, "Ada");
    }

    #[test]
    fn unset_fields_are_omitted_from_the_body() {
        let fields = ContactFields {
            name: Some("Jane".to_string()),
            ..ContactFields::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({ "name": "Jane" })
        );
    }
}
