use crate::constants::*;
use crate::{Credential, EnvCredentialProvider, RequestSigner};
use async_trait::async_trait;
use bookproxy_core::response::{error_response, json_response, method_not_allowed, Cors};
use bookproxy_core::{Context, Error, Proxy, Result, Signer};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request, Response, StatusCode};
use log::error;
use serde_json::Value;

/// OpenAiProxy forwards chat completion requests to OpenAI.
///
/// The upstream status is passed through as is, errors included.
#[derive(Debug, Clone)]
pub struct OpenAiProxy {
    signer: Signer<Credential>,
}

impl OpenAiProxy {
    /// Create a new proxy reading `OPENAI_API_KEY` through `ctx`.
    pub fn new(ctx: Context) -> Self {
        Self {
            signer: Signer::new(ctx, EnvCredentialProvider::new(), RequestSigner::new()),
        }
    }

    /// Send `body` to the chat completions endpoint.
    ///
    /// Returns the upstream status with its JSON body. A body that is not
    /// JSON is an error.
    pub async fn chat_completions(&self, body: &Value) -> Result<(StatusCode, Value)> {
        let body = Bytes::from(serde_json::to_vec(body)?);

        let (mut parts, _) = Request::post(CHAT_COMPLETIONS_ENDPOINT)
            .header(CONTENT_TYPE, "application/json")
            .body(())?
            .into_parts();
        self.signer.sign(&mut parts, &body).await?;

        let resp = self
            .signer
            .context()
            .http_send(Request::from_parts(parts, body))
            .await?;

        let status = resp.status();
        let data = serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected(format!("OpenAI API answered {status} with a non json body"))
                .with_source(e)
        })?;
        Ok((status, data))
    }
}

#[async_trait]
impl Proxy for OpenAiProxy {
    fn name(&self) -> &'static str {
        "openai-proxy"
    }

    async fn handle(&self, req: Request<Bytes>) -> Response<Bytes> {
        if req.method() != Method::POST {
            return method_not_allowed();
        }

        match self.signer.credential().await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERR_KEY_NOT_CONFIGURED,
                    Cors::None,
                )
            }
            Err(err) => {
                error!("failed to load OpenAI API key: {err}");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERR_KEY_NOT_CONFIGURED,
                    Cors::None,
                );
            }
        }

        let body: Value = match serde_json::from_slice(req.body()) {
            Ok(v) => v,
            Err(_) => return error_response(StatusCode::BAD_REQUEST, ERR_INVALID_JSON, Cors::None),
        };

        match self.chat_completions(&body).await {
            Ok((status, data)) => json_response(status, &data, Cors::AllowOriginAndHeaders),
            Err(err) => {
                error!("OpenAI API error: {err}");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERR_CONTACT_FAILED,
                    Cors::None,
                )
            }
        }
    }
}
