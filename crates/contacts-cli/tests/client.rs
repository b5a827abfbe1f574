//! Client tests against a real server bound to an ephemeral local port.

use contacts_cli::{ContactFields, ContactsClient};
use contacts_server::router::build_router;
use contacts_server::state::AppState;
use contacts_store::ContactId;
use reqwest::StatusCode;

/// Starts a fresh server and returns its base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(AppState::in_memory());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn fields(name: &str, email: &str, phone: &str) -> ContactFields {
    ContactFields {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
    }
}

#[tokio::test]
async fn welcome_reports_server_message() {
    let client = ContactsClient::new(&spawn_server().await);
    assert_eq!(
        client.welcome().await.unwrap(),
        "Backend Deployed Successfully"
    );
}

#[tokio::test]
async fn full_lifecycle_through_client() {
    let client = ContactsClient::new(&spawn_server().await);

    let created = client
        .create(&fields("John Doe", "john@example.com", "123456789"))
        .await
        .unwrap();
    assert_eq!(created.id, ContactId(1));
    assert_eq!(created.name, "John Doe");
    assert_eq!(client.list().await.unwrap(), vec![created.clone()]);
    assert_eq!(client.get(created.id).await.unwrap(), created);

    let patch = ContactFields {
        name: Some("Jane Doe".to_string()),
        ..ContactFields::default()
    };
    let updated = client.update(created.id, &patch).await.unwrap();
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email, "john@example.com");
    assert_eq!(updated.phone, "123456789");

    assert_eq!(client.delete(created.id).await.unwrap(), "Contact deleted");
    let err = client.get(created.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_messages_surface_as_api_errors() {
    let client = ContactsClient::new(&spawn_server().await);

    let err = client
        .create(&ContactFields {
            name: Some("John".to_string()),
            ..ContactFields::default()
        })
        .await
        .unwrap_err();
    match err {
        contacts_cli::ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(message, "All fields are required");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client.delete(ContactId(9)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Contact not found (HTTP 404 Not Found)");
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ContactsClient::new(&format!("http://{addr}"));
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, contacts_cli::ClientError::Http(_)));
}
