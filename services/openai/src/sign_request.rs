use crate::Credential;
use async_trait::async_trait;
use bookproxy_core::{Context, Error, Result, SignRequest};
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::HeaderValue;

/// RequestSigner sets `Authorization: Bearer <api key>`.
#[derive(Debug, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new RequestSigner.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        _: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|c| !c.api_key.is_empty()) else {
            return Err(Error::config_invalid(
                "openai api key is required to sign the request",
            ));
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", cred.api_key))
            .map_err(|_| Error::config_invalid("openai api key is not a valid header value"))?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}
