use std::time::Duration;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use http::{header, Request, Uri};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use tracing::debug;

use super::client::{Backend, Endpoint};
use super::error::{BackendError, BackendResult};
use crate::config::settings::BackendConfig;

/// JSON-over-HTTP client for the detection backend.
pub struct HttpBackend {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(Duration::from_secs(30))
            .build_http();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
        }
    }

    fn uri_for(&self, endpoint: Endpoint) -> BackendResult<Uri> {
        let raw = format!("{}{}", self.base_url, endpoint.path());
        raw.parse::<Uri>()
            .map_err(|e| BackendError::InvalidUri(format!("{}: {}", raw, e)))
    }

    async fn execute(&self, endpoint: Endpoint, body: Option<Value>) -> BackendResult<Value> {
        let uri = self.uri_for(endpoint)?;

        let payload = match body {
            Some(ref value) => Bytes::from(serde_json::to_vec(value)?),
            None => Bytes::new(),
        };

        let mut builder = Request::builder()
            .method(endpoint.method())
            .uri(uri)
            .header(header::ACCEPT, "application/json");
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let req = builder.body(Full::new(payload))?;

        let resp: http::Response<Incoming> = match tokio::time::timeout(self.timeout, self.client.request(req)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => return Err(BackendError::Transport(e.to_string())),
            Err(_) => return Err(BackendError::Timeout(self.timeout.as_millis() as u64)),
        };

        let status = resp.status();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?
            .to_bytes();

        debug!(
            endpoint = endpoint.path(),
            status = status.as_u16(),
            bytes = bytes.len(),
            "Backend call completed"
        );

        decode_body(status, &bytes)
    }
}

impl Backend for HttpBackend {
    fn call(&self, endpoint: Endpoint, body: Option<Value>) -> BoxFuture<'_, BackendResult<Value>> {
        self.execute(endpoint, body).boxed()
    }
}

/// JSON bodies win over the status line; an empty body is `null`.
fn decode_body(status: http::StatusCode, bytes: &[u8]) -> BackendResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return if status.is_success() {
            Ok(Value::Null)
        } else {
            Err(BackendError::Status(status.as_u16()))
        };
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(BackendError::Status(status.as_u16())),
        Err(e) => Err(BackendError::Decode(e)),
    }
}
