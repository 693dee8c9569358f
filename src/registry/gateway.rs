//! Registry access over the Pub/Sub REST surface.
//!
//! [`RegistryGateway`] is the seam between the sync pipeline and the remote
//! registry; [`HttpGateway`] is the production implementation. Listing
//! pagination is handled here so callers always see the complete project
//! listing. Retries, if desired, also belong at this layer — the pipeline
//! never retries.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::name::SchemaName;
use super::schema::Schema;
use crate::error::{Result, SyncError};

/// Default endpoint of the hosted registry.
pub const DEFAULT_ENDPOINT: &str = "https://pubsub.googleapis.com";

/// Environment variable holding an OAuth bearer token for the registry.
pub const TOKEN_ENV_VAR: &str = "PUBSUB_ACCESS_TOKEN";

/// Read access to a project's schema registry.
///
/// The gateway is constructed once at run start and owned by the sync runner;
/// dropping it releases any underlying connections on every exit path.
pub trait RegistryGateway {
    /// List every schema in the configured project (BASIC view, no
    /// definitions).
    fn list(&self) -> Result<Vec<Schema>>;

    /// Fetch one schema with its definition (FULL view).
    ///
    /// `key` is either a bare schema id (`orders` or `orders@rev`), resolved
    /// against the configured project, or a fully-qualified resource name.
    fn fetch(&self, key: &str) -> Result<Schema>;
}

/// Gateway over the registry's REST API using a blocking HTTP client.
pub struct HttpGateway {
    client: Client,
    endpoint: String,
    project: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSchemasResponse {
    #[serde(default)]
    schemas: Vec<Schema>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl HttpGateway {
    /// Create a gateway for one project with the default 30-second timeout.
    ///
    /// A bearer token is picked up from `PUBSUB_ACCESS_TOKEN` if set.
    pub fn new(endpoint: &str, project: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("schema-sync")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SyncError::Registry {
                message: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project: project.to_string(),
            token: std::env::var(TOKEN_ENV_VAR).ok(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| SyncError::Registry {
            message: format!("request to {url} failed: {e}"),
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SyncError::SchemaNotFound {
                name: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SyncError::Registry {
                message: format!("HTTP {status} from {url}"),
            });
        }

        response.json().map_err(|e| SyncError::Registry {
            message: format!("invalid response body from {url}: {e}"),
        })
    }

    fn resource_for(&self, key: &str) -> String {
        if SchemaName::is_qualified(key) {
            key.to_string()
        } else {
            format!("projects/{}/schemas/{}", self.project, key)
        }
    }
}

impl RegistryGateway for HttpGateway {
    fn list(&self) -> Result<Vec<Schema>> {
        let base = format!(
            "{}/v1/projects/{}/schemas?view=BASIC",
            self.endpoint, self.project
        );

        let mut schemas = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = match &page_token {
                Some(token) => format!("{base}&pageToken={token}"),
                None => base.clone(),
            };

            let page: ListSchemasResponse = self.get_json(&url)?;
            schemas.extend(page.schemas);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!("listed {} schema(s) in project {}", schemas.len(), self.project);
        Ok(schemas)
    }

    fn fetch(&self, key: &str) -> Result<Schema> {
        let resource = self.resource_for(key);
        let url = format!("{}/v1/{}?view=FULL", self.endpoint, resource);

        self.get_json(&url).map_err(|e| match e {
            // Report the schema key rather than the request URL.
            SyncError::SchemaNotFound { .. } => SyncError::SchemaNotFound {
                name: resource.clone(),
            },
            other => other,
        })
    }
}
