use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use log::debug;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and reused while it stays valid.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the credential provider, dropping any cached credential.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.loader = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    /// The context this signer sends requests and reads env through.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Load the credential, reusing the cached one while it is valid.
    ///
    /// Returns `Ok(None)` when the provider has nothing configured.
    pub async fn credential(&self) -> Result<Option<K>> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if cached.is_valid() {
            return Ok(cached);
        }

        let loaded = self.loader.provide_credential(&self.ctx).await?;
        debug!(
            "credential provider {:?} returned {}",
            self.loader,
            if loaded.is_some() { "a credential" } else { "nothing" }
        );
        *self.credential.lock().expect("lock poisoned") = loaded.clone();
        Ok(loaded)
    }

    /// Sign the request.
    ///
    /// `body` must be the exact bytes that will be sent with `req`.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let credential = self.credential().await?;

        self.builder
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }
}
