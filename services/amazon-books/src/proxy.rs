use crate::constants::*;
use crate::{ClientRequest, Config, SearchItemsRequest, SearchItemsResponse, SearchResponse};
use async_trait::async_trait;
use bookproxy_aws_v4::{RequestSigner, X_AMZ_TARGET};
use bookproxy_core::response::{
    error_response, json_response, method_not_allowed, preflight_response, Cors,
};
use bookproxy_core::{Context, Error, Proxy, Result, SignRequest};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request, Response, StatusCode};
use log::{debug, error, warn};
use serde_json::json;

/// AmazonBooksProxy searches books through the Product Advertising API.
///
/// Credentials are read through the context's env on every call and the
/// upstream request is signed with AWS SigV4.
#[derive(Debug, Clone)]
pub struct AmazonBooksProxy {
    ctx: Context,
}

impl AmazonBooksProxy {
    /// Create a new proxy over the given context.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Load config from the context, failing if anything required is absent.
    pub fn config(&self) -> Result<Config> {
        let config = Config::from_env(&self.ctx);
        if config.missing().any() {
            return Err(Error::config_invalid(ERR_CREDENTIALS_NOT_CONFIGURED));
        }
        Ok(config)
    }

    /// Validate a client request, call PA-API and map the result.
    pub async fn search(&self, client: &ClientRequest) -> Result<SearchResponse> {
        let config = self.config()?;
        let request = SearchItemsRequest::from_client(client)?;
        let resp = self.search_items(&config, &request).await?;
        Ok(search_response(resp, &request, client))
    }

    /// Send one signed `SearchItems` call.
    ///
    /// 401 and 403 answers fail with [`bookproxy_core::ErrorKind::UpstreamDenied`].
    pub async fn search_items(
        &self,
        config: &Config,
        request: &SearchItemsRequest,
    ) -> Result<SearchItemsResponse> {
        let partner_tag = config
            .partner_tag
            .as_deref()
            .ok_or_else(|| Error::config_invalid("partner tag must not be empty"))?;
        let credential = config
            .credential()
            .ok_or_else(|| Error::config_invalid(ERR_CREDENTIALS_NOT_CONFIGURED))?;

        // Serialized once: these bytes are both hashed and sent.
        let body = Bytes::from(serde_json::to_vec(&request.payload(partner_tag))?);

        let (mut parts, _) = Request::post(format!("https://{}{}", config.host, SEARCH_ITEMS_PATH))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_UTF8)
            .header(X_AMZ_TARGET, SEARCH_ITEMS_TARGET)
            .body(())?
            .into_parts();
        RequestSigner::new(SERVICE, &config.region)
            .sign_request(&self.ctx, &mut parts, &body, Some(&credential))
            .await?;

        debug!("sending {} request to {}", request.search_type(), parts.uri);
        let resp = self.ctx.http_send(Request::from_parts(parts, body)).await?;

        let status = resp.status();
        if !status.is_success() {
            let message = format!(
                "Amazon API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
            return Err(Error::upstream(status, message.trim_end()));
        }

        let resp: SearchItemsResponse = serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected("failed to parse Amazon API response").with_source(e)
        })?;
        for e in &resp.errors {
            warn!(
                "Amazon API reported {}: {}",
                e.code.as_deref().unwrap_or("unknown error"),
                e.message.as_deref().unwrap_or_default()
            );
        }
        Ok(resp)
    }
}

fn search_response(
    resp: SearchItemsResponse,
    request: &SearchItemsRequest,
    client: &ClientRequest,
) -> SearchResponse {
    let books = resp.into_books();
    SearchResponse {
        total_results: books.len(),
        books,
        search_type: request.search_type().to_string(),
        query: client.query.clone().unwrap_or_default(),
    }
}

#[async_trait]
impl Proxy for AmazonBooksProxy {
    fn name(&self) -> &'static str {
        "amazon-books-proxy"
    }

    async fn handle(&self, req: Request<Bytes>) -> Response<Bytes> {
        if req.method() == Method::OPTIONS {
            return preflight_response();
        }
        if req.method() != Method::POST {
            return method_not_allowed();
        }

        let config = Config::from_env(&self.ctx);
        let missing = config.missing();
        if missing.any() {
            error!("Amazon API credentials not configured: {missing:?}");
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({
                    "error": ERR_CREDENTIALS_NOT_CONFIGURED,
                    "missing": missing,
                }),
                Cors::None,
            );
        }

        let client = match ClientRequest::parse(req.body()) {
            Ok(v) => v,
            Err(err) => {
                return error_response(StatusCode::BAD_REQUEST, &err.to_string(), Cors::AllowOrigin)
            }
        };
        let request = match SearchItemsRequest::from_client(&client) {
            Ok(v) => v,
            Err(err) => {
                return error_response(StatusCode::BAD_REQUEST, &err.to_string(), Cors::AllowOrigin)
            }
        };

        match self.search_items(&config, &request).await {
            Ok(resp) => json_response(
                StatusCode::OK,
                &search_response(resp, &request, &client),
                Cors::AllowOrigin,
            ),
            Err(err) => {
                error!("Amazon Books API error: {err}");
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
