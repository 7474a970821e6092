//! Request tracking for the JSON-RPC client
//!
//! Every outgoing request gets a fresh numeric id and a oneshot slot. The
//! receive loop completes the slot whose id matches an incoming response;
//! responses are free to arrive in any order.
//!
//! A slot leaves the table in exactly one of four ways: completed by a
//! response, failed with an error, released by a caller that stopped waiting
//! (timeout, send failure), or drained by `fail_all` when the connection dies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use zbx_core::{Error, Id, JsonRpcResponse, Result};

type Slot = oneshot::Sender<Result<JsonRpcResponse>>;

/// Table of requests waiting for a response
#[derive(Clone)]
pub struct RequestManager {
    pending: Arc<Mutex<HashMap<Id, Slot>>>,
    counter: Arc<AtomicI64>,
}

impl RequestManager {
    /// Create an empty manager; ids start at 1
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            counter: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Allocate the next request id
    pub fn next_id(&self) -> Id {
        Id::Number(self.counter.fetch_add(1, Ordering::Relaxed))
    }

    /// Register a pending request and return the receiving half of its slot
    pub async fn register(&self, id: Id) -> oneshot::Receiver<Result<JsonRpcResponse>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);
        rx
    }

    /// Deliver a response; returns false if no request was waiting on `id`
    pub async fn complete(&self, id: &Id, response: JsonRpcResponse) -> bool {
        match self.pending.lock().await.remove(id) {
            Some(tx) => {
                // The waiter may have given up already
                let _ = tx.send(Ok(response));
                true
            }
            None => false,
        }
    }

    /// Fail one pending request
    pub async fn fail(&self, id: &Id, error: Error) {
        if let Some(tx) = self.pending.lock().await.remove(id) {
            let _ = tx.send(Err(error));
        }
    }

    /// Fail the pending request if it is the only one
    ///
    /// Used for replies that cannot be matched by id. Returns false, leaving
    /// the table untouched, when zero or several requests are waiting.
    pub async fn fail_sole(&self, error: Error) -> bool {
        let mut pending = self.pending.lock().await;
        if pending.len() != 1 {
            return false;
        }
        let sent = match pending.drain().next() {
            Some((_, tx)) => {
                let _ = tx.send(Err(error));
                true
            }
            None => false,
        };
        sent
    }

    /// Drop a pending slot without notifying anyone
    pub async fn release(&self, id: &Id) {
        self.pending.lock().await.remove(id);
    }

    /// Fail every pending request with the same error
    pub async fn fail_all(&self, error: Error) {
        let mut pending = self.pending.lock().await;
        for (_, tx) in pending.drain() {
            let _ = tx.send(Err(error.clone()));
        }
    }

    /// Number of requests still waiting
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

impl Default for RequestManager {
    fn default() -> Self {
        Self::new()
    }
}
