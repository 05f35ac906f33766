//! OpenAI chat completions proxy.
//!
//! Clients post the chat completion body as is; the proxy adds the server
//! held API key as a bearer token and relays the answer.

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::EnvCredentialProvider;

mod sign_request;
pub use sign_request::RequestSigner;

mod proxy;
pub use proxy::OpenAiProxy;
