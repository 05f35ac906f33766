use async_trait::async_trait;
use bookproxy_core::utils::Redact;
use bookproxy_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
};
use http::request::Parts;
use std::fmt::{Debug, Formatter};

// A credential that only carries an API key.
#[derive(Clone)]
struct ApiKey(String);

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&Redact::from(&self.0)).finish()
    }
}

impl SigningCredential for ApiKey {
    fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

// Load the key from the environment.
#[derive(Debug)]
struct EnvApiKey;

#[async_trait]
impl ProvideCredential for EnvApiKey {
    type Credential = ApiKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(ctx.env_var_non_empty("MY_API_KEY").map(ApiKey))
    }
}

// Put the key into a header.
#[derive(Debug)]
struct HeaderKeySigner;

#[async_trait]
impl SignRequest for HeaderKeySigner {
    type Credential = ApiKey;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        _body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(key) = credential else {
            return Err(Error::config_invalid("MY_API_KEY is not configured"));
        };

        let mut value: http::HeaderValue = key.0.parse()?;
        value.set_sensitive(true);
        req.headers.insert("x-api-key", value);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, EnvApiKey, HeaderKeySigner);

    let mut parts = http::Request::builder()
        .method("GET")
        .uri("https://api.example.com/v1/books")
        .body(())?
        .into_parts()
        .0;

    match signer.sign(&mut parts, b"").await {
        Ok(_) => println!("Request signed, headers: {:?}", parts.headers),
        Err(e) => eprintln!("Failed to sign request: {e}"),
    }

    Ok(())
}
