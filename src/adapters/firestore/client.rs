//! Firestore REST client
//!
//! This module provides the session initializer and document listing for
//! the Firestore REST API. The session is established once per process:
//! [`connect`] guards initialization behind a process-scoped `OnceCell`,
//! so repeated calls return the already-connected client. There is no
//! teardown; the process exits after a single export pass.

use crate::config::{secret_string, FirestoreConfig, SecretString};
use crate::domain::{FirestoreError, HarvestError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::models::{Document, ListDocumentsResponse};

/// Process-wide client handle, initialized at most once
static CLIENT: OnceCell<Arc<FirestoreClient>> = OnceCell::const_new();

/// Source of raw submission documents
///
/// Trait seam over the remote store so the export pipeline can be driven
/// by an in-memory source in tests.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Lists every document in the named collection
    ///
    /// The returned sequence is finite and not restartable; a repeat run
    /// issues a fresh query.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>>;
}

/// Credential file contents
///
/// A JSON service key carrying the project identifier and a bearer token.
/// The token is held as a [`SecretString`] and never logged.
#[derive(Debug, Deserialize)]
struct ServiceCredentials {
    project_id: String,
    token: String,
}

/// Firestore REST API client
#[derive(Debug)]
pub struct FirestoreClient {
    http: Client,
    base_url: String,
    project_id: String,
    token: SecretString,
    page_size: u32,
}

/// Establishes the process-wide Firestore session
///
/// Idempotent: the first call initializes the client from the credential
/// file; later calls return the same handle regardless of the passed
/// configuration.
///
/// # Errors
///
/// - [`HarvestError::CredentialNotFound`] when the credential path does
///   not exist
/// - [`HarvestError::Firestore`] for any other initialization failure
pub async fn connect(config: &FirestoreConfig) -> Result<Arc<FirestoreClient>> {
    CLIENT
        .get_or_try_init(|| async {
            let client = FirestoreClient::new(config)?;
            tracing::info!(
                project_id = %client.project_id(),
                base_url = %client.base_url,
                "Firestore session established"
            );
            Ok(Arc::new(client))
        })
        .await
        .cloned()
}

impl FirestoreClient {
    /// Creates a new client from configuration
    ///
    /// Reads and parses the credential file and builds the HTTP client.
    /// Prefer [`connect`] outside of tests; it adds the process-wide
    /// initialization guard.
    pub fn new(config: &FirestoreConfig) -> Result<Self> {
        let credentials = load_credentials(&config.credential_path)?;

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FirestoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: credentials.project_id,
            token: secret_string(credentials.token),
            page_size: config.page_size,
        })
    }

    /// The project the client is bound to
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }

    async fn fetch_page(
        &self,
        collection: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse> {
        let mut request = self
            .http
            .get(self.collection_url(collection))
            .query(&[("pageSize", self.page_size.to_string())])
            .bearer_auth(self.token.expose_secret());

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FirestoreError::Timeout(e.to_string())
            } else {
                FirestoreError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(classify_status(collection, status, message).into());
        }

        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| FirestoreError::InvalidResponse(e.to_string()).into())
    }
}

#[async_trait]
impl DocumentSource for FirestoreClient {
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(collection, page_token.as_deref()).await?;

            tracing::debug!(
                collection = %collection,
                page_documents = page.documents.len(),
                "Fetched document page"
            );
            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::info!(
            collection = %collection,
            count = documents.len(),
            "Fetched all documents from collection"
        );

        Ok(documents)
    }
}

/// Reads and parses the credential file
fn load_credentials(path: &str) -> Result<ServiceCredentials> {
    let path_ref = Path::new(path);
    if !path_ref.exists() {
        return Err(HarvestError::CredentialNotFound(path.to_string()));
    }

    let contents = std::fs::read_to_string(path_ref)
        .map_err(|e| FirestoreError::InvalidCredentials(format!("{path}: {e}")))?;

    let credentials: ServiceCredentials = serde_json::from_str(&contents)
        .map_err(|e| FirestoreError::InvalidCredentials(format!("{path}: {e}")))?;

    if credentials.project_id.trim().is_empty() {
        return Err(FirestoreError::InvalidCredentials(format!(
            "{path}: project_id is empty"
        ))
        .into());
    }
    if credentials.token.trim().is_empty() {
        return Err(FirestoreError::InvalidCredentials(format!("{path}: token is empty")).into());
    }

    Ok(credentials)
}

fn classify_status(collection: &str, status: StatusCode, message: String) -> FirestoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            FirestoreError::AuthenticationFailed(message)
        }
        StatusCode::NOT_FOUND => FirestoreError::CollectionNotFound(collection.to_string()),
        s if s.is_server_error() => FirestoreError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => FirestoreError::ClientError {
            status: s.as_u16(),
            message,
        },
    }
}
