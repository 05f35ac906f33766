use crate::{Context, Result};
use bytes::Bytes;
use http::request::Parts;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(ctx) = self else {
            return false;
        };

        ctx.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Services may require different credentials: AWS requires an access key
/// pair, Google Books and OpenAI only an API key.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    ///
    /// Returns `Ok(None)` when this provider has nothing configured.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to attach authentication to a request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` must be the exact bytes that will be transmitted. Signers that
    /// hash the payload hash these bytes and nothing else.
    ///
    /// ## Credential
    ///
    /// Implementations must return [`crate::ErrorKind::ConfigInvalid`] when
    /// `credential` is `None` instead of leaving the request unsigned.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// Proxy turns one client request into one upstream call and one response.
///
/// Failures are part of the response: a proxy always answers.
#[async_trait::async_trait]
pub trait Proxy: Debug + Send + Sync + 'static {
    /// Name the proxy is routed by, e.g. `openai-proxy`.
    fn name(&self) -> &'static str;

    /// Handle one client request.
    async fn handle(&self, req: http::Request<Bytes>) -> http::Response<Bytes>;
}
