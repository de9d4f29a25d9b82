use crate::domain::model::{AnalysisRequest, AnalysisResult};
use crate::domain::ports::{AnalysisService, ConfigProvider};
use crate::utils::error::{AnalysisError, AnalyzerError, Result, GENERIC_FAILURE_MESSAGE};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// Calls the analysis service over HTTP: `POST {"topic": ...}`.
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                AnalyzerError::InvalidConfigValueError {
                    field: "service.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| {
                AnalyzerError::InvalidConfigValueError {
                    field: format!("service.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| AnalyzerError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, topic: &str) -> std::result::Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest {
            topic: topic.to_string(),
        };

        tracing::debug!("POST {} with topic '{}'", self.endpoint, topic);
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        tracing::debug!("Analysis response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(AnalysisError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_slice(&body)?;
        Ok(result)
    }
}
