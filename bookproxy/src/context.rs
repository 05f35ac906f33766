use async_trait::async_trait;
use bookproxy_core::{Context, Env, HttpSend, OsEnv, Result};
use bookproxy_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::collections::HashMap;

/// DefaultContext sends upstream requests with reqwest and reads the
/// process environment.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a context with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, for example one with timeouts.
    pub fn with_client(client: Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }

    /// Wrap self into a [`Context`].
    pub fn into_context(self) -> Context {
        Context::new().with_http_send(self.clone()).with_env(self)
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }

    fn vars(&self) -> HashMap<String, String> {
        OsEnv.vars()
    }
}

/// Build a [`Context`] backed by [`DefaultContext`].
pub fn default_context() -> Context {
    DefaultContext::new().into_context()
}
