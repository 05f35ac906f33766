//! Google Books API proxy.
//!
//! Forwards `{query, maxResults?}` to the volumes endpoint with the server
//! held API key appended as `key`.

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::EnvCredentialProvider;

mod sign_request;
pub use sign_request::RequestSigner;

mod proxy;
pub use proxy::ClientRequest;
pub use proxy::GoogleBooksProxy;
