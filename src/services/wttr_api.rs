use crate::config::Config;
use crate::models::{
    error::AppError,
    weather::{ProviderResponse, WeatherResult},
};
use async_trait::async_trait;

/// Anything that can answer a current-conditions lookup for a city.
///
/// The widget only ever talks to this trait, so tests can swap the HTTP
/// client for a stub.
#[async_trait(?Send)]
pub trait WeatherSource {
    async fn current_conditions(&self, city: &str) -> Result<WeatherResult, AppError>;
}

// API CONFIGURATION
/// Configuration for the wttr.in client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    format: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the lookup URL. The city is inserted as typed, without
    /// percent-encoding.
    pub fn lookup_url(&self, city: &str) -> String {
        format!(
            "{}/{city}?format={}",
            self.base_url.trim_end_matches('/'),
            self.format
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    format: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the response format selector.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::PROVIDER_BASE_URL.to_string()),
            format: self
                .format
                .unwrap_or_else(|| Config::RESPONSE_FORMAT.to_string()),
        }
    }
}

// WTTR CLIENT
/// HTTP client for wttr.in.
#[derive(Debug)]
pub struct WttrClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl WttrClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes a single fetch attempt.
    async fn fetch(&self, city: &str) -> Result<WeatherResult, AppError> {
        let url = self.config.lookup_url(city);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        let body: ProviderResponse = response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))?;

        WeatherResult::from_response(body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_builder() {
            AppError::Network(format!("Invalid request URL: {error}"))
        } else if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Connection failed: {error}"))
        }
    }
}

#[async_trait(?Send)]
impl WeatherSource for WttrClient {
    async fn current_conditions(&self, city: &str) -> Result<WeatherResult, AppError> {
        self.fetch(city).await
    }
}
