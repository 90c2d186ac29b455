use futures_util::future::BoxFuture;
use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::BackendResult;

/// Calls exposed by the detection backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stats,
    History,
    Alerts,
    Blocked,
    Status,
    AiStatus,
    Unblock,
    ClearAlerts,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Stats => "/api/stats",
            Endpoint::History => "/api/history",
            Endpoint::Alerts => "/api/alerts",
            Endpoint::Blocked => "/api/blocked",
            Endpoint::Status => "/api/status",
            Endpoint::AiStatus => "/api/ai_status",
            Endpoint::Unblock => "/api/unblock",
            Endpoint::ClearAlerts => "/api/clear_alerts",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Unblock | Endpoint::ClearAlerts => Method::POST,
            _ => Method::GET,
        }
    }
}

/// The detection backend as seen by the console.
///
/// Implementations return the decoded JSON body for any HTTP status:
/// logical failures travel in the body (`{"error": ...}`), not the status.
pub trait Backend: Send + Sync + 'static {
    fn call(&self, endpoint: Endpoint, body: Option<Value>) -> BoxFuture<'_, BackendResult<Value>>;
}

/// GET `endpoint` and decode the body into `T`.
pub async fn fetch<T: DeserializeOwned>(backend: &dyn Backend, endpoint: Endpoint) -> BackendResult<T> {
    let value = backend.call(endpoint, None).await?;
    Ok(serde_json::from_value(value)?)
}
