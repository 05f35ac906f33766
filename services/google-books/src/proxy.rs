use crate::constants::*;
use crate::{Credential, EnvCredentialProvider, RequestSigner};
use async_trait::async_trait;
use bookproxy_core::response::{error_response, json_response, preflight_response, Cors};
use bookproxy_core::{lenient, Context, Error, Proxy, Result, Signer};
use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use log::{debug, error};
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;
use serde_json::{json, Value};

/// Body a client posts to the proxy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    /// Full text query. Numbers, such as an ISBN, are read as text.
    #[serde(default, deserialize_with = "lenient::text")]
    pub query: Option<String>,
    /// Number of volumes to return, defaults to 10. Numeric strings are
    /// accepted.
    #[serde(default, deserialize_with = "lenient::count")]
    pub max_results: Option<u32>,
}

impl ClientRequest {
    /// Parse a client body. An empty body is an empty request.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body)
            .map_err(|e| Error::request_invalid(ERR_INVALID_JSON).with_source(e))
    }
}

/// GoogleBooksProxy forwards volume searches to the Google Books API.
#[derive(Debug, Clone)]
pub struct GoogleBooksProxy {
    signer: Signer<Credential>,
}

impl GoogleBooksProxy {
    /// Create a new proxy reading `GOOGLE_BOOKS_API_KEY` through `ctx`.
    pub fn new(ctx: Context) -> Self {
        Self {
            signer: Signer::new(ctx, EnvCredentialProvider::new(), RequestSigner::new()),
        }
    }

    /// Search volumes and return the upstream JSON untouched.
    pub async fn volumes(&self, query: &str, max_results: u32) -> Result<Value> {
        let uri = format!(
            "{VOLUMES_ENDPOINT}?q={}&maxResults={max_results}",
            utf8_percent_encode(query, &URI_COMPONENT_ENCODE_SET)
        );
        debug!("searching google books volumes: {uri}");

        let (mut parts, _) = Request::get(uri).body(())?.into_parts();
        self.signer.sign(&mut parts, &[]).await?;

        let resp = self
            .signer
            .context()
            .http_send(Request::from_parts(parts, Bytes::new()))
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = format!(
                "Google Books API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
            return Err(Error::upstream(status, message.trim_end()));
        }

        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected("failed to parse Google Books API response").with_source(e)
        })
    }
}

#[async_trait]
impl Proxy for GoogleBooksProxy {
    fn name(&self) -> &'static str {
        "google-books-proxy"
    }

    async fn handle(&self, req: Request<Bytes>) -> Response<Bytes> {
        if req.method() == Method::OPTIONS {
            return preflight_response();
        }

        let client = match ClientRequest::parse(req.body()) {
            Ok(v) => v,
            Err(err) => {
                return error_response(StatusCode::BAD_REQUEST, &err.to_string(), Cors::AllowOrigin)
            }
        };
        let Some(query) = client.query.as_deref().filter(|v| !v.is_empty()) else {
            return error_response(StatusCode::BAD_REQUEST, ERR_QUERY_REQUIRED, Cors::AllowOrigin);
        };

        match self.signer.credential().await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERR_KEY_NOT_CONFIGURED,
                    Cors::AllowOrigin,
                )
            }
            Err(err) => {
                error!("failed to load Google Books API key: {err}");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERR_KEY_NOT_CONFIGURED,
                    Cors::AllowOrigin,
                );
            }
        }

        let max_results = client.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        match self.volumes(query, max_results).await {
            Ok(data) => json_response(StatusCode::OK, &data, Cors::AllowOrigin),
            Err(err) => {
                error!("Google Books API error: {err}");
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({
                        "error": ERR_FETCH_FAILED,
                        "details": err.to_string(),
                    }),
                    Cors::AllowOrigin,
                )
            }
        }
    }
}
