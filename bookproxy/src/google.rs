//! Google Books volume search support.

pub use bookproxy_google_books::*;

#[cfg(feature = "default-context")]
use crate::default_context;

/// Create a google books proxy using `GOOGLE_BOOKS_API_KEY` from the process
/// environment.
#[cfg(feature = "default-context")]
pub fn default_proxy() -> GoogleBooksProxy {
    GoogleBooksProxy::new(default_context())
}
