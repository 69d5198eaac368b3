//! Firestore REST (v1) client

use super::credentials::TokenSource;
use super::value::{decode_fields, encode_fields};
use crate::settings::Settings;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use simr_core::{BatchWrite, Document, DocumentStore, Result, SimrError};
use tracing::debug;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: &str = "300";

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl RawDocument {
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn into_document(self) -> Result<Document> {
        let fields = decode_fields(&self.fields)?;
        Ok(Document {
            id: self.id().to_string(),
            fields,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    next_page_token: Option<String>,
}

pub struct FirestoreClient {
    http: Client,
    tokens: TokenSource,
    base_url: Url,
    project: String,
    database: String,
}

impl FirestoreClient {
    pub fn new(http: Client, tokens: TokenSource, settings: &Settings) -> Result<Self> {
        let base = match &settings.firestore_emulator_host {
            Some(host) => format!("http://{}/v1", host),
            None => FIRESTORE_BASE_URL.to_string(),
        };
        let base_url = Url::parse(&base)
            .map_err(|e| SimrError::Config(format!("invalid Firestore url {}: {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SimrError::Config(format!("invalid Firestore url {}", base)));
        }

        Ok(Self {
            http,
            tokens,
            base_url,
            project: settings.google_cloud_project.clone(),
            database: settings.firestore_database.clone(),
        })
    }

    pub fn tokens(&self) -> &TokenSource {
        &self.tokens
    }

    /// `projects/<p>/databases/<db>/documents/<collection>/<id>`
    fn document_name(&self, collection: &str, id: &str) -> String {
        format!(
            "projects/{}/databases/{}/documents/{}/{}",
            self.project, self.database, collection, id
        )
    }

    /// URL under `.../documents`; each segment is percent-encoded
    fn documents_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend([
                    "projects",
                    self.project.as_str(),
                    "databases",
                    self.database.as_str(),
                    "documents",
                ])
                .extend(segments);
        }
        url
    }

    fn commit_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend([
                "projects",
                self.project.as_str(),
                "databases",
                self.database.as_str(),
                "documents:commit",
            ]);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.tokens.token().await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        request
            .send()
            .await
            .map_err(|e| SimrError::Transport(e.to_string()))
    }

    async fn list_raw(&self, collection: &str, show_missing: bool) -> Result<Vec<RawDocument>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", PAGE_SIZE.to_string())];
            if show_missing {
                query.push(("showMissing", "true".to_string()));
            }
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let request = self.http.get(self.documents_url(&[collection])).query(&query);
            let page: ListDocumentsResponse = read_json(self.send(request).await?).await?;
            documents.extend(page.documents);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Listed {} documents from {}", documents.len(), collection);
        Ok(documents)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        self.list_raw(collection, false)
            .await?
            .into_iter()
            .map(RawDocument::into_document)
            .collect()
    }

    async fn list_document_ids(&self, collection: &str) -> Result<Vec<String>> {
        Ok(self
            .list_raw(collection, true)
            .await?
            .iter()
            .map(|doc| doc.id().to_string())
            .collect())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let request = self.http.get(self.documents_url(&[collection, id]));
        let response = self.send(request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let raw: RawDocument = read_json(response).await?;
        raw.into_document().map(Some)
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<()> {
        // No update mask: the document is replaced wholesale, or created
        let request = self
            .http
            .patch(self.documents_url(&[collection, id]))
            .json(&json!({ "fields": encode_fields(fields) }));
        check_status(self.send(request).await?).await?;
        Ok(())
    }

    async fn commit(&self, writes: Vec<BatchWrite>) -> Result<()> {
        let writes: Vec<Value> = writes
            .iter()
            .map(|write| match write {
                BatchWrite::Set {
                    collection,
                    id,
                    fields,
                } => json!({
                    "update": {
                        "name": self.document_name(collection, id),
                        "fields": encode_fields(fields),
                    }
                }),
                BatchWrite::Delete { collection, id } => json!({
                    "delete": self.document_name(collection, id),
                }),
            })
            .collect();

        let request = self
            .http
            .post(self.commit_url())
            .json(&json!({ "writes": writes }));
        check_status(self.send(request).await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SimrError::Remote(format!("{}: {}", status, error_message(&body))))
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| SimrError::Decode(e.to_string()))
}

/// Google APIs wrap errors as `{"error": {"message": ...}}`
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
