//! OpenAI chat completions support.

pub use bookproxy_openai::*;

#[cfg(feature = "default-context")]
use crate::default_context;

/// Create an openai proxy using `OPENAI_API_KEY` from the process environment.
#[cfg(feature = "default-context")]
pub fn default_proxy() -> OpenAiProxy {
    OpenAiProxy::new(default_context())
}
