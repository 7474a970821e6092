//! The API handle every resource method hangs off

use serde::de::DeserializeOwned;
use serde::Serialize;
use zbx_core::{Error, Result, RpcTransport};

/// Typed Zabbix API over any [`RpcTransport`]
///
/// Authentication, connection handling and envelope semantics belong to the
/// transport; this type only maps typed parameters to method calls and back.
/// Resource methods live in the [`item`](crate::item) and
/// [`itemprototype`](crate::itemprototype) modules.
#[derive(Debug, Clone)]
pub struct ZabbixApi<T> {
    transport: T,
}

impl<T: RpcTransport> ZabbixApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    #[tracing::instrument(name = "zabbix_api", skip_all, fields(method = %method))]
    pub(crate) async fn request<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params).map_err(|e| {
            Error::Serialization(format!("{}: cannot encode params: {}", method, e))
        })?;

        let result = self.transport.call(method, params).await?;

        serde_json::from_value(result).map_err(|e| {
            tracing::warn!(error = %e, "Result does not match the expected shape");
            Error::Serialization(format!("{}: cannot decode result: {}", method, e))
        })
    }
}
