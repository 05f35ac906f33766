//! Core components for the bookproxy workspace.
//!
//! This crate provides the foundational types and traits shared by every proxy:
//! how requests get signed, how upstream calls get sent and how responses are
//! shaped for the client.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that coordinates credential loading and request signing
//! - **Proxy**: A handler that turns one client request into one upstream call and one response
//!
//! ## Example
//!
//! ```no_run
//! use bookproxy_core::{Context, Result, Signer, ProvideCredential, SignRequest, SigningCredential};
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     token: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.token.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx.env_var("MY_TOKEN").map(|token| MyCredential { token }))
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MyRequestSigner;
//!
//! #[async_trait]
//! impl SignRequest for MyRequestSigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         _body: &[u8],
//!         credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let Some(cred) = credential else {
//!             return Err(bookproxy_core::Error::config_invalid("token is not configured"));
//!         };
//!         req.headers.insert("x-token", cred.token.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyRequestSigner);
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts, b"").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction
//! - [`response`]: JSON and CORS response helpers

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod lenient;
pub mod response;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, Proxy, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
