//! Manticore backend implementation.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Backend, BackendKind};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::search::FieldRegistry;

pub(crate) const BACKEND_NAME: &str = "manticore";

/// Configuration for the Manticore backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManticoreConfig {
    /// Base URL of the Manticore HTTP listener (default: `http://localhost:9308`).
    #[serde(default = "default_url")]
    pub url: String,

    /// Index holding idea documents (default: `idea`).
    #[serde(default = "default_index")]
    pub index: String,

    /// Request timeout in milliseconds (default: 5000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Connect timeout in milliseconds (default: 2000).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Ranking weight per full-text field.
    #[serde(default = "default_field_weights")]
    pub field_weights: BTreeMap<String, i64>,
}

fn default_url() -> String {
    "http://localhost:9308".to_string()
}

fn default_index() -> String {
    "idea".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_connect_timeout_ms() -> u64 {
    2000
}

fn default_field_weights() -> BTreeMap<String, i64> {
    BTreeMap::from([
        ("itinerary_name".to_string(), 6),
        ("wild_mode".to_string(), 4),
        ("attraction_location".to_string(), 4),
        ("attraction_name".to_string(), 3),
        ("tags".to_string(), 2),
    ])
}

impl Default for ManticoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            index: default_index(),
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            field_weights: default_field_weights(),
        }
    }
}

/// Manticore Search backend for idea documents.
///
/// Talks to the JSON/HTTP API: `/search` for queries, `/insert`, `/replace`
/// and `/delete` for writes, and `/sql` for health checks.
pub struct ManticoreBackend {
    client: Client,
    base_url: Url,
    config: ManticoreConfig,
    registry: FieldRegistry,
}

impl Debug for ManticoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManticoreBackend")
            .field("config", &self.config)
            .field("registry_len", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl ManticoreBackend {
    /// Creates a backend with the default field registry.
    pub fn new(config: ManticoreConfig) -> StorageResult<Self> {
        Self::with_registry(config, FieldRegistry::default())
    }

    /// Creates a backend with a custom field registry.
    pub fn with_registry(config: ManticoreConfig, registry: FieldRegistry) -> StorageResult<Self> {
        let base_url = parse_base_url(&config.url)?;
        let client = Self::build_client(&config)?;

        tracing::info!(
            url = %base_url,
            index = %config.index,
            fields = registry.len(),
            "Manticore backend initialized"
        );

        Ok(Self {
            client,
            base_url,
            config,
            registry,
        })
    }

    fn build_client(config: &ManticoreConfig) -> StorageResult<Client> {
        Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| {
                StorageError::Backend(BackendError::ConnectionFailed {
                    backend_name: BACKEND_NAME.to_string(),
                    message: format!("Failed to build HTTP client: {}", e),
                })
            })
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &ManticoreConfig {
        &self.config
    }

    /// Returns the field registry used to resolve filter keys.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns the index name.
    pub fn index(&self) -> &str {
        &self.config.index
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Invalid endpoint {}: {}", path, e),
            })
    }

    /// Posts a JSON body and returns the parsed JSON response.
    ///
    /// `timeout` overrides the client-wide request timeout for this call.
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &Value,
        timeout: Option<Duration>,
    ) -> Result<Value, BackendError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, body = %body, "Manticore request");

        let mut request = self.client.post(url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let text = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(BackendError::QueryError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| BackendError::SerializationError {
            message: format!("Failed to parse response from {}: {}", path, e),
        })
    }
}

/// Parses the configured URL as a base for endpoint paths.
///
/// The path always ends with `/` so a prefix such as `/manticore` survives
/// [`Url::join`].
fn parse_base_url(raw: &str) -> StorageResult<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: format!("Invalid URL '{}': {}", raw, e),
        })
    })?;
    if url.cannot_be_a_base() {
        return Err(StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: format!("URL '{}' cannot be used as a base", raw),
        }));
    }
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("");
    }
    Ok(url)
}

/// Maps a transport error onto the backend error taxonomy.
fn classify(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout {
            backend_name: BACKEND_NAME.to_string(),
        }
    } else if e.is_connect() {
        BackendError::Unavailable {
            backend_name: BACKEND_NAME.to_string(),
            message: e.to_string(),
        }
    } else {
        BackendError::Internal {
            backend_name: BACKEND_NAME.to_string(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }
}

/// Extracts a readable message from a Manticore error body.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    match value.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(err @ Value::Object(_)) => err
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string()),
        _ => value.to_string(),
    }
}

#[async_trait]
impl Backend for ManticoreBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Manticore
    }

    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        let url = self.endpoint("sql?mode=raw")?;
        let response = self
            .client
            .post(url)
            .form(&[("query", "SHOW STATUS")])
            .send()
            .await
            .map_err(|e| BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Health check failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Health check returned status {}", status),
            });
        }

        Ok(())
    }
}
