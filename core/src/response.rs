//! Response helpers shared by every proxy.

use bytes::Bytes;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::{HeaderValue, Response, StatusCode};
use log::error;
use serde::Serialize;

/// Value of `Access-Control-Allow-Origin` on proxy responses.
pub const CORS_ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers` on proxy responses.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
/// Value of `Access-Control-Allow-Methods` on preflight responses.
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

const APPLICATION_JSON: &str = "application/json";

/// Which CORS headers a response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cors {
    /// No CORS headers.
    None,
    /// `Access-Control-Allow-Origin` only.
    AllowOrigin,
    /// `Access-Control-Allow-Origin` and `Access-Control-Allow-Headers`.
    AllowOriginAndHeaders,
}

/// Answer a CORS preflight (`OPTIONS`) request.
pub fn preflight_response() -> Response<Bytes> {
    let mut resp = Response::new(Bytes::new());
    let headers = resp.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    resp
}

/// Serialize `body` into a JSON response.
///
/// If `body` cannot be serialized the client gets a bare 500 instead.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
    cors: Cors,
) -> Response<Bytes> {
    match serde_json::to_vec(body) {
        Ok(bs) => raw_json_response(status, Bytes::from(bs), cors),
        Err(err) => {
            error!("failed to serialize response body: {err}");
            raw_json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Failed to serialize response"}"#),
                cors,
            )
        }
    }
}

/// Wrap already serialized JSON bytes into a response.
pub fn raw_json_response(status: StatusCode, body: Bytes, cors: Cors) -> Response<Bytes> {
    let mut resp = Response::new(body);
    *resp.status_mut() = status;

    let headers = resp.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    if cors != Cors::None {
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        );
    }
    if cors == Cors::AllowOriginAndHeaders {
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        );
    }
    resp
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: &str, cors: Cors) -> Response<Bytes> {
    json_response(status, &serde_json::json!({ "error": message }), cors)
}

/// 405 answer for unsupported methods.
pub fn method_not_allowed() -> Response<Bytes> {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", Cors::None)
}
