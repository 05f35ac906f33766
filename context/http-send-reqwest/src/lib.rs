//! Reqwest-based HTTP client implementation for bookproxy.
//!
//! `ReqwestHttpSend` implements the `HttpSend` trait from `bookproxy_core`,
//! which every proxy uses to reach its upstream API.
//!
//! ## Example
//!
//! ```no_run
//! use bookproxy_core::Context;
//! use bookproxy_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! // Upstream timeouts are configured on the client.
//! let client = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! ```

use async_trait::async_trait;
use bookproxy_core::{Error, HttpSend, Result};
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// Reqwest-based implementation of the `HttpSend` trait.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        // Query strings may carry api keys, keep urls out of every error source.
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e.without_url())
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::unexpected("failed to send upstream request").with_source(e.without_url())
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::unexpected("failed to read upstream response").with_source(e.without_url())
            })?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
