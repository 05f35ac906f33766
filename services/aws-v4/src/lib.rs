//! AWS SigV4 signer for bookproxy.
//!
//! Builds the canonical request, derives the signing key and produces the
//! `Authorization` header value used by the Amazon Product Advertising API.
//!
//! ## Example
//!
//! ```no_run
//! use bookproxy_aws_v4::{RequestSigner, StaticCredentialProvider};
//! use bookproxy_core::{Context, Result, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let loader = StaticCredentialProvider::new("access_key_id", "secret_access_key");
//!     let builder = RequestSigner::new("ProductAdvertisingAPI", "us-east-1");
//!     let signer = Signer::new(Context::new(), loader, builder);
//!
//!     let body = br#"{"Keywords":"rust"}"#;
//!     let mut parts = http::Request::post("https://webservices.amazon.com/paapi5/searchitems")
//!         .header("content-type", "application/json; charset=utf-8")
//!         .body(())?
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut parts, body).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod canonical;
pub use canonical::CanonicalRequest;

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::credential_scope;
pub use sign_request::generate_signing_key;
pub use sign_request::sign;
pub use sign_request::string_to_sign;
pub use sign_request::RequestSigner;
