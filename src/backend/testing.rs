//! In-memory backend for unit tests.

use std::collections::HashMap;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use parking_lot::Mutex;
use serde_json::Value;

use super::client::{Backend, Endpoint};
use super::error::{BackendError, BackendResult};

#[derive(Default)]
pub struct MockBackend {
    responses: Mutex<HashMap<Endpoint, Option<Value>>>,
    calls: Mutex<Vec<(Endpoint, Option<Value>)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` for every subsequent call to `endpoint`.
    pub fn respond(&self, endpoint: Endpoint, value: Value) {
        self.responses.lock().insert(endpoint, Some(value));
    }

    /// Make every subsequent call to `endpoint` fail at the transport level.
    pub fn fail(&self, endpoint: Endpoint) {
        self.responses.lock().insert(endpoint, None);
    }

    pub fn calls(&self) -> Vec<(Endpoint, Option<Value>)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls.lock().iter().filter(|(e, _)| *e == endpoint).count()
    }
}

impl Backend for MockBackend {
    fn call(&self, endpoint: Endpoint, body: Option<Value>) -> BoxFuture<'_, BackendResult<Value>> {
        self.calls.lock().push((endpoint, body));
        let result = match self.responses.lock().get(&endpoint) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(BackendError::Transport("connection refused".to_string())),
            None => Err(BackendError::Status(404)),
        };
        async move { result }.boxed()
    }
}
