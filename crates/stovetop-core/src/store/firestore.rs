//! Recipe store backed by the Firestore REST API.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use super::{
    value::{Document, QueryRow},
    RecipeStore,
};
use crate::{
    error::{KitchenError, Result, StoreResultExt},
    models::{Recipe, RecipeSummary},
};

/// Default Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
/// Default database name.
pub const DEFAULT_DATABASE: &str = "(default)";
/// Collection holding the recipes.
pub const RECIPES_COLLECTION: &str = "recipes";

/// Connection settings for [`FirestoreStore`].
#[derive(Debug)]
pub struct FirestoreConfig {
    /// Google Cloud project ID
    pub project_id: String,
    /// Web API key
    pub api_key: SecretString,
    /// Database name, usually `(default)`
    pub database: String,
    /// Collection holding the recipes
    pub collection: String,
    /// REST endpoint, overridable for emulators and tests
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl FirestoreConfig {
    /// Settings for a project with every other field at its default.
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: SecretString::from(api_key.into()),
            database: DEFAULT_DATABASE.to_string(),
            collection: RECIPES_COLLECTION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Firestore-backed [`RecipeStore`].
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    /// Creates a store client.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Configuration` if the project ID or API key is
    /// empty, or if the HTTP client cannot be built.
    pub fn new(config: FirestoreConfig) -> Result<Self> {
        if config.project_id.trim().is_empty() {
            return Err(KitchenError::configuration("Firestore project ID is empty"));
        }
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(KitchenError::configuration("Firestore API key is empty"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| KitchenError::configuration(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.database,
        )
    }

    fn list_query(&self) -> serde_json::Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.config.collection }],
                "select": {
                    "fields": [
                        { "fieldPath": "name" },
                        { "fieldPath": "variation" },
                        { "fieldPath": "category" }
                    ]
                },
                "orderBy": [{
                    "field": { "fieldPath": "name" },
                    "direction": "ASCENDING"
                }]
            }
        })
    }
}

#[async_trait]
impl RecipeStore for FirestoreStore {
    async fn list(&self) -> Result<Vec<RecipeSummary>> {
        let url = format!("{}:runQuery", self.documents_url());
        debug!("Listing recipe index from {}", self.config.collection);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(&self.list_query())
            .send()
            .await
            .store_context("Failed to query recipe index")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Recipe index query returned {status}: {body}");
            return Err(KitchenError::store(format!(
                "Recipe index query returned {status}"
            )));
        }

        let rows: Vec<QueryRow> = response
            .json()
            .await
            .store_context("Failed to read recipe index")?;

        let summaries: Vec<RecipeSummary> = rows
            .into_iter()
            .filter_map(|row| row.document)
            .filter_map(|doc| {
                let id = doc.id().to_string();
                match doc.decode::<RecipeSummary>() {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        warn!("Skipping unreadable index entry '{id}': {e}");
                        None
                    }
                }
            })
            .collect();
        debug!("Recipe index holds {} dishes", summaries.len());
        Ok(summaries)
    }

    async fn get(&self, id: &str) -> Result<Recipe> {
        if id.is_empty() || id.contains('/') {
            return Err(KitchenError::not_found(id));
        }

        let url = format!("{}/{}/{}", self.documents_url(), self.config.collection, id);
        debug!("Fetching recipe {id}");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.expose_secret())])
            .send()
            .await
            .store_context("Failed to fetch recipe")?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(KitchenError::not_found(id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Fetching recipe {id} returned {status}: {body}");
            return Err(KitchenError::store(format!(
                "Fetching recipe '{id}' returned {status}"
            )));
        }

        let document: Document = response
            .json()
            .await
            .store_context("Failed to read recipe document")?;

        document
            .decode::<Recipe>()
            .map_err(|source| KitchenError::InvalidRecord {
                id: id.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    const DOCS: &str = "/v1/projects/kitchen/databases/(default)/documents";

    fn store_for(server: &MockServer) -> FirestoreStore {
        let mut config = FirestoreConfig::new("kitchen", "test-key");
        config.base_url = server.uri();
        FirestoreStore::new(config).expect("store should build")
    }

    #[test]
    fn test_new_rejects_empty_project() {
        let result = FirestoreStore::new(FirestoreConfig::new(" ", "key"));
        assert!(matches!(result, Err(KitchenError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_list_orders_by_name_and_skips_empty_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{DOCS}:runQuery")))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "structuredQuery": { "orderBy": [{ "field": { "fieldPath": "name" } }] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/a",
                    "fields": {
                        "name": { "stringValue": "Aloo Gobi" },
                        "category": { "stringValue": "Sabzi" }
                    }
                }, "readTime": "2024-01-01T00:00:00Z" },
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/b",
                    "fields": {
                        "name": { "stringValue": "Dal Tadka" },
                        "variation": { "stringValue": "Dhaba Style" },
                        "category": { "stringValue": "Dal" }
                    }
                } },
                { "readTime": "2024-01-01T00:00:00Z" }
            ])))
            .mount(&server)
            .await;

        let summaries = store_for(&server).list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "a");
        assert_eq!(summaries[1].variation.as_deref(), Some("Dhaba Style"));
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{DOCS}:runQuery")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/a",
                    "fields": {
                        "name": { "stringValue": "Aloo Gobi" },
                        "category": { "stringValue": "Sabzi" }
                    }
                } },
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/b",
                    "fields": {
                        "name": { "stringValue": "Dal Tadka" },
                        "category": { "nullValue": null }
                    }
                } },
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/c",
                    "fields": {
                        "name": { "integerValue": "42" },
                        "category": { "stringValue": "Rice" }
                    }
                } },
                { "document": {
                    "name": "projects/kitchen/databases/(default)/documents/recipes/d",
                    "fields": {
                        "name": { "stringValue": "Jeera Rice" },
                        "category": { "stringValue": "Rice" }
                    }
                } }
            ])))
            .mount(&server)
            .await;

        let summaries = store_for(&server).list().await.unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "d"]);
    }

    #[tokio::test]
    async fn test_list_server_error_is_store_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert!(matches!(err, KitchenError::StoreUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_get_decodes_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{DOCS}/recipes/dal")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/kitchen/databases/(default)/documents/recipes/dal",
                "fields": {
                    "name": { "stringValue": "Dal Tadka" },
                    "category": { "stringValue": "Dal" },
                    "ingredients": { "arrayValue": {} },
                    "steps": { "arrayValue": { "values": [
                        { "mapValue": { "fields": {
                            "instruction": { "stringValue": "Boil dal" },
                            "durationMinutes": { "doubleValue": 12.5 },
                            "requiresStove": { "booleanValue": true }
                        } } }
                    ] } }
                },
                "createTime": "2024-01-01T00:00:00Z",
                "updateTime": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let recipe = store_for(&server).get("dal").await.unwrap();
        assert_eq!(recipe.id, "dal");
        assert_eq!(recipe.steps[0].duration_minutes, 12.5);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = store_for(&server).get("x").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_rejects_path_ids_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = store_for(&server);
        assert!(store.get("../secrets").await.unwrap_err().is_not_found());
        assert!(store.get("").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_get_malformed_document_is_invalid_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/kitchen/databases/(default)/documents/recipes/bad",
                "fields": { "category": { "stringValue": "Dal" } }
            })))
            .mount(&server)
            .await;

        let err = store_for(&server).get("bad").await.unwrap_err();
        assert!(matches!(err, KitchenError::InvalidRecord { .. }));
    }
}
