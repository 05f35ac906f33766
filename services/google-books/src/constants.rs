use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values.
pub const GOOGLE_BOOKS_API_KEY: &str = "GOOGLE_BOOKS_API_KEY";

pub const VOLUMES_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Characters kept as is by javascript's `encodeURIComponent`.
pub static URI_COMPONENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// Client facing messages.
pub const ERR_QUERY_REQUIRED: &str = "Query parameter is required";
pub const ERR_KEY_NOT_CONFIGURED: &str =
    "Google Books API key not configured in environment variables";
pub const ERR_INVALID_JSON: &str = "Invalid JSON in request body.";
pub const ERR_FETCH_FAILED: &str = "Failed to fetch from Google Books API";
