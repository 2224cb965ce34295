use crate::config::AppwriteConfig;
use crate::trending::{NewSearchRecord, SearchRecord, SearchRecordUpdate, SearchStore, StoreError};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

/// Appwrite list-documents response
#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<SearchRecord>,
}

/// Appwrite error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Serialize)]
struct CreateDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: &'a NewSearchRecord,
}

#[derive(Serialize)]
struct UpdateDocument<'a> {
    data: &'a SearchRecordUpdate,
}

/// Search store backed by an Appwrite database collection
#[derive(Clone)]
pub struct AppwriteStore {
    client: Client,
    project_id: String,
    api_key: Option<String>,
    documents_url: String,
}

impl AppwriteStore {
    pub fn new(config: &AppwriteConfig) -> Self {
        let documents_url = format!(
            "{}/databases/{}/collections/{}/documents",
            config.endpoint.trim_end_matches('/'),
            config.database_id,
            config.collection_id
        );

        Self {
            client: Client::new(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
            documents_url,
        }
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.project_id);
        match &self.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    async fn list(&self, queries: &[serde_json::Value]) -> Result<Vec<SearchRecord>, StoreError> {
        let params = queries
            .iter()
            .map(|q| serde_json::to_string(q).map(|q| ("queries[]", q)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Appwrite: GET {} with {:?}", self.documents_url, params);

        let response = self
            .with_headers(self.client.get(&self.documents_url))
            .query(&params)
            .send()
            .await?;

        let list: DocumentList = check(response).await?.json().await?;
        Ok(list.documents)
    }
}

/// Map non-success responses to store errors
async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    warn!("✗ Appwrite API error {}: {}", status, message);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Permission(message)),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(message)),
        _ => Err(StoreError::Api {
            status: status.as_u16(),
            message,
        }),
    }
}

#[async_trait::async_trait]
impl SearchStore for AppwriteStore {
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, StoreError> {
        let documents = self
            .list(&[json!({
                "method": "equal",
                "attribute": "term",
                "values": [term],
            })])
            .await?;

        Ok(documents.into_iter().next())
    }

    async fn create_record(&self, record: NewSearchRecord) -> Result<SearchRecord, StoreError> {
        let body = CreateDocument {
            document_id: "unique()",
            data: &record,
        };

        debug!("Appwrite: POST {} term='{}'", self.documents_url, record.term);

        let response = self
            .with_headers(self.client.post(&self.documents_url))
            .json(&body)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn update_record(
        &self,
        id: &str,
        update: SearchRecordUpdate,
    ) -> Result<SearchRecord, StoreError> {
        let url = format!("{}/{}", self.documents_url, id);
        debug!("Appwrite: PATCH {} count={}", url, update.count);

        let response = self
            .with_headers(self.client.patch(&url))
            .json(&UpdateDocument { data: &update })
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn get_trending(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError> {
        self.list(&[
            json!({ "method": "orderDesc", "attribute": "count" }),
            json!({ "method": "limit", "values": [limit] }),
        ])
        .await
    }
}
