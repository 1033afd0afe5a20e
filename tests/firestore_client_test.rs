//! Integration tests for the Firestore REST client
//!
//! Stubs the `documents.list` endpoint with mockito and exercises
//! pagination, auth propagation, and error classification.

use harvest::adapters::firestore::{DocumentSource, FirestoreClient};
use harvest::config::FirestoreConfig;
use harvest::domain::{FirestoreError, HarvestError};
use mockito::Matcher;
use std::io::Write;
use tempfile::NamedTempFile;

fn credential_file(project_id: &str, token: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"project_id": "{project_id}", "token": "{token}"}}"#).unwrap();
    file
}

fn client_for(server: &mockito::ServerGuard, credentials: &NamedTempFile) -> FirestoreClient {
    let config = FirestoreConfig {
        credential_path: credentials.path().to_str().unwrap().to_string(),
        base_url: server.url(),
        page_size: 2,
        ..Default::default()
    };
    FirestoreClient::new(&config).unwrap()
}

fn page_body(ids: &[&str], next_page_token: Option<&str>) -> String {
    let documents: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{
                    "name": "projects/school-app/databases/(default)/documents/reflections/{id}",
                    "fields": {{"projectCode": {{"stringValue": "print('{id}')"}}}}
                }}"#
            )
        })
        .collect();

    match next_page_token {
        Some(token) => format!(
            r#"{{"documents": [{}], "nextPageToken": "{token}"}}"#,
            documents.join(",")
        ),
        None => format!(r#"{{"documents": [{}]}}"#, documents.join(",")),
    }
}

#[tokio::test]
async fn test_list_documents_single_page() {
    let mut server = mockito::Server::new_async().await;
    let credentials = credential_file("school-app", "tok-1");

    let mock = server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/reflections",
        )
        .match_query(Matcher::UrlEncoded("pageSize".into(), "2".into()))
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(&["doc-1", "doc-2"], None))
        .create_async()
        .await;

    let client = client_for(&server, &credentials);
    let documents = client.list_documents("reflections").await.unwrap();

    mock.assert_async().await;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].document_id().unwrap().as_str(), "doc-1");
}

#[tokio::test]
async fn test_list_documents_follows_page_tokens() {
    let mut server = mockito::Server::new_async().await;
    let credentials = credential_file("school-app", "tok-1");

    let first = server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/reflections",
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageSize".into(), "2".into()),
            // Single-parameter query string, i.e. no pageToken alongside pageSize
            Matcher::Regex("^[^&]*$".into()),
        ]))
        .with_status(200)
        .with_body(page_body(&["doc-1", "doc-2"], Some("token-1")))
        .create_async()
        .await;

    let second = server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/reflections",
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageSize".into(), "2".into()),
            Matcher::UrlEncoded("pageToken".into(), "token-1".into()),
        ]))
        .with_status(200)
        .with_body(page_body(&["doc-3"], None))
        .create_async()
        .await;

    let client = client_for(&server, &credentials);
    let documents = client.list_documents("reflections").await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(documents.len(), 3);
    assert_eq!(documents[2].document_id().unwrap().as_str(), "doc-3");
}

#[tokio::test]
async fn test_empty_collection_yields_no_documents() {
    let mut server = mockito::Server::new_async().await;
    let credentials = credential_file("school-app", "tok-1");

    server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/reflections",
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, &credentials);
    let documents = client.list_documents("reflections").await.unwrap();
    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let mut server = mockito::Server::new_async().await;
    let credentials = credential_file("school-app", "expired");

    server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/reflections",
        )
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error": {"status": "UNAUTHENTICATED"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, &credentials);
    let error = client.list_documents("reflections").await.unwrap_err();

    assert!(matches!(
        error,
        HarvestError::Firestore(FirestoreError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn test_missing_collection_maps_to_collection_not_found() {
    let mut server = mockito::Server::new_async().await;
    let credentials = credential_file("school-app", "tok-1");

    server
        .mock(
            "GET",
            "/projects/school-app/databases/(default)/documents/nothere",
        )
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": {"status": "NOT_FOUND"}}"#)
        .create_async()
        .await;

    let client = client_for(&server, &credentials);
    let error = client.list_documents("nothere").await.unwrap_err();

    assert!(matches!(
        error,
        HarvestError::Firestore(FirestoreError::CollectionNotFound(_))
    ));
}

#[test]
fn test_missing_credential_file_fails_before_any_request() {
    let config = FirestoreConfig {
        credential_path: "/nonexistent/serviceAccountKey.json".to_string(),
        ..Default::default()
    };

    let error = FirestoreClient::new(&config).unwrap_err();
    assert!(matches!(error, HarvestError::CredentialNotFound(_)));
}
