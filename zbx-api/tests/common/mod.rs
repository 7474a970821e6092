//! Common test utilities for API tests
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use zbx_core::{Error, JsonRpcErrorData, Result, RpcTransport};

/// Transport double that records every call and replays scripted outcomes
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<VecDeque<Result<Value>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful `result`
    pub fn reply(self, result: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Queue a remote error object
    pub fn reply_error(self, code: i32, message: &str, data: &str) -> Self {
        let error = JsonRpcErrorData::with_data(code, message, Value::String(data.to_string()));
        self.replies.lock().unwrap().push_back(Err(Error::JsonRpc(error)));
        self
    }

    /// Queue a local failure
    pub fn fail(self, error: Error) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call
    pub fn only_call(&self) -> (String, Value) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.calls.lock().unwrap().push((method.to_string(), params));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Internal(format!("no reply scripted for {}", method))))
    }
}
