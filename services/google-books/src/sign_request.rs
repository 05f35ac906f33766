use crate::constants::URI_COMPONENT_ENCODE_SET;
use crate::Credential;
use async_trait::async_trait;
use bookproxy_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::request::Parts;
use percent_encoding::utf8_percent_encode;

/// RequestSigner appends the API key as the `key` query parameter.
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
                "google books api key is required to sign the request",
            ));
        };

        let mut signed_req = SigningRequest::build(req)?;
        signed_req.query_push(
            "key",
            utf8_percent_encode(&cred.api_key, &URI_COMPONENT_ENCODE_SET).to_string(),
        );
        signed_req.apply(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookproxy_core::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parts(uri: &str) -> Parts {
        http::Request::get(uri)
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_sign_appends_key() -> Result<()> {
        let mut req = parts("https://www.googleapis.com/books/v1/volumes?q=dune&maxResults=10");
        let cred = Credential {
            api_key: "AIza+Key/1".to_string(),
        };

        RequestSigner::new()
            .sign_request(&Context::new(), &mut req, b"", Some(&cred))
            .await?;

        assert_eq!(
            req.uri.to_string(),
            "https://www.googleapis.com/books/v1/volumes?q=dune&maxResults=10&key=AIza%2BKey%2F1"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_without_credential() {
        let mut req = parts("https://www.googleapis.com/books/v1/volumes?q=dune");

        let err = RequestSigner::new()
            .sign_request(&Context::new(), &mut req, b"", None)
            .await
            .expect_err("key is required");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(
            req.uri.to_string(),
            "https://www.googleapis.com/books/v1/volumes?q=dune"
        );
    }
}
