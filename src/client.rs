use reqwest::Method;
use reqwest::blocking::{Client as HttpClient, Request};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::{ClientConfig, load_config};
use crate::error::{Error, Result, decode_api_error};
use crate::installation::InstallationService;
use crate::measurement::MeasurementService;
use crate::meta::MetaService;
use crate::query::QueryParams;
use crate::transport::{Transport, TransportError};
use crate::util::{endpoint_url, parse_base_url};

const API_KEY_HEADER: &str = "apikey";
const APPLICATION_JSON: &str = "application/json";

/// Blocking client for the Airly API.
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    key: HeaderValue,
    language: Option<String>,
    timeout: Duration,

    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("key", &"<redacted>")
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client talking to the public API with the given key.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(key))
    }

    /// Creates a client using environment variables and/or `.airlyrc`.
    ///
    /// See [`load_config`] for the lookup order.
    pub fn from_env() -> Result<Self> {
        Self::with_config(load_config(None, None, None)?)
    }

    /// Creates a client backed by a `reqwest` blocking client.
    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        // Validate before spinning up the HTTP stack.
        validate_key(&cfg.key)?;

        let http = HttpClient::builder()
            .user_agent(concat!("airly-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Self::with_transport(cfg, http)
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(cfg: ClientConfig, transport: impl Transport + 'static) -> Result<Self> {
        let key = validate_key(&cfg.key)?;
        let base_url = parse_base_url(&cfg.url)?;

        Ok(Self {
            base_url,
            key,
            language: cfg.language.filter(|l| !l.trim().is_empty()),
            timeout: cfg.timeout,
            transport: Arc::new(transport),
        })
    }

    /// Asks the API to localise descriptions and advice (e.g. `"pl"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = if language.trim().is_empty() {
            None
        } else {
            Some(language)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn installation(&self) -> InstallationService<'_> {
        InstallationService::new(self)
    }

    pub fn measurement(&self) -> MeasurementService<'_> {
        MeasurementService::new(self)
    }

    pub fn meta(&self) -> MetaService<'_> {
        MetaService::new(self)
    }

    /// Issues a GET for `path` (relative to the base URL) and decodes the JSON reply.
    ///
    /// Any status other than 200 becomes [`Error::Api`].
    pub fn get<T: DeserializeOwned>(&self, path: &str, params: Option<&QueryParams>) -> Result<T> {
        let request = self.build_request(path, params)?;
        let url = request.url().to_string();

        tracing::debug!(url = %url, "GET");
        let response = self.transport.send(request).map_err(Error::Transport)?;
        tracing::debug!(url = %url, status = %response.status, len = response.body.len(), "response");

        if response.status != reqwest::StatusCode::OK {
            return Err(decode_api_error(response.status, &response.body).into());
        }

        let de = &mut serde_json::Deserializer::from_slice(&response.body);
        serde_path_to_error::deserialize(de).map_err(|e| Error::Decode {
            url,
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }

    fn build_request(&self, path: &str, params: Option<&QueryParams>) -> Result<Request> {
        let url = endpoint_url(&self.base_url, path, params)?;
        let mut request = Request::new(Method::GET, url);

        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.key.clone());
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(language) = &self.language {
            let value = HeaderValue::from_str(language).map_err(|_| {
                Error::RequestBuild(format!("invalid language {:?}", language))
            })?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        *request.timeout_mut() = Some(self.timeout);
        Ok(request)
    }
}

fn validate_key(key: &str) -> Result<HeaderValue> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::Configuration("api key must not be empty".into()));
    }
    let mut value = HeaderValue::from_str(key)
        .map_err(|_| Error::Configuration("api key is not a valid header value".into()))?;
    value.set_sensitive(true);
    Ok(value)
}
