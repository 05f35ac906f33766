use crate::constants::{
    ALGORITHM, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, SCOPE_TERMINATOR, X_AMZ_CONTENT_SHA_256,
    X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::{CanonicalRequest, Credential};
use async_trait::async_trait;
use bookproxy_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use bookproxy_core::time::{format_iso8601, now, parse_iso8601, DateTime};
use bookproxy_core::{Context, Error, Result, SignRequest, SigningRequest};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Every header present on the request when it reaches the signer is signed.
/// `host` and `x-amz-date` are added when absent.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// Requests should always be signed with the current time. Pin it only
    /// to reproduce a known signature.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::config_invalid(
                "aws credential is required to sign the request",
            ));
        };
        cred.check()?;

        let mut signed_req = SigningRequest::build(req)?;

        let timestamp = canonicalize_header(&mut signed_req, cred, self.time.unwrap_or_else(now))?;
        let query = canonicalize_query(&mut signed_req);
        let path = canonicalize_path(&signed_req.path)?;

        let authorization = {
            let names = signed_req.header_name_to_vec_sorted();
            let mut headers = Vec::with_capacity(names.len());
            for name in &names {
                headers.push((*name, signed_req.headers[*name].to_str()?));
            }

            let payload_hash = match signed_req.headers.get(X_AMZ_CONTENT_SHA_256) {
                Some(v) => v.to_str()?.to_string(),
                None => hex_sha256(body),
            };

            let creq = CanonicalRequest::with_payload_hash(
                signed_req.method.as_str(),
                &path,
                &query,
                &headers,
                &names,
                &payload_hash,
            )?;
            sign(
                cred,
                &timestamp,
                &self.region,
                &self.service,
                &creq.to_string(),
                &names,
            )?
        };
        let mut authorization = HeaderValue::from_str(&authorization)?;
        authorization.set_sensitive(true);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req)
    }
}

/// Trim header values and insert the headers SigV4 requires.
///
/// Returns the timestamp the request is signed at.
fn canonicalize_header(
    ctx: &mut SigningRequest,
    cred: &Credential,
    now: DateTime,
) -> Result<String> {
    // Header names and values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if ctx.headers.get(header::HOST).is_none() {
        ctx.headers
            .insert(header::HOST, ctx.authority.as_str().parse()?);
    }

    // Keep a caller supplied date so the signature matches what is sent.
    let timestamp = match ctx.headers.get(X_AMZ_DATE) {
        Some(v) => v.to_str()?.to_string(),
        None => {
            let ts = format_iso8601(now);
            ctx.headers.insert(X_AMZ_DATE, HeaderValue::from_str(&ts)?);
            ts
        }
    };

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
    if let Some(token) = &cred.session_token {
        let mut value = HeaderValue::from_str(token)
            .map_err(|_| Error::config_invalid("session token is not a valid header value"))?;
        // Set token value sensitive to avoid leaking.
        value.set_sensitive(true);

        ctx.headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }

    Ok(timestamp)
}

/// Sort and re-encode the query, returning its canonical form.
///
/// The request query is replaced with the encoded pairs so the signed string
/// and the transmitted query stay identical.
fn canonicalize_query(ctx: &mut SigningRequest) -> String {
    if ctx.query.is_empty() {
        return String::new();
    }

    let raw = ctx
        .query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let mut pairs = form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| {
            (
                utf8_percent_encode(&k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(&v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by param name
    pairs.sort();

    let canonical = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    ctx.query = pairs;
    canonical
}

fn canonicalize_path(path: &str) -> Result<String> {
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|e| Error::request_invalid("request path is not valid utf-8").with_source(e))?;
    Ok(utf8_percent_encode(&decoded, &AWS_URI_ENCODE_SET).to_string())
}

/// Derive the SigV4 signing key.
///
/// ```text
/// kDate    = HMAC("AWS4" + secret, date)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
///
/// `date` is the `YYYYMMDD` part of the signing timestamp. The key must not
/// outlive the signing operation and is never logged.
pub fn generate_signing_key(
    secret: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>> {
    if secret.is_empty() {
        return Err(Error::config_invalid("secret access key must not be empty"));
    }

    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    Ok(hmac_sha256(
        sign_service.as_slice(),
        SCOPE_TERMINATOR.as_bytes(),
    ))
}

/// Scope: `20150830/us-east-1/service/aws4_request`
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{SCOPE_TERMINATOR}")
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/us-east-1/service/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(timestamp: &str, scope: &str, canonical_request: &str) -> String {
    format!(
        "{ALGORITHM}\n{timestamp}\n{scope}\n{}",
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Sign a canonical request and build the `Authorization` header value.
///
/// `timestamp` must be `YYYYMMDDTHHMMSSZ` and equal to the `x-amz-date` sent
/// with the request. `signed_headers` must be the same sorted, lower-cased
/// names the canonical request was built with.
pub fn sign(
    cred: &Credential,
    timestamp: &str,
    region: &str,
    service: &str,
    canonical_request: &str,
    signed_headers: &[&str],
) -> Result<String> {
    cred.check()?;
    parse_iso8601(timestamp)?;
    if signed_headers.is_empty() {
        return Err(Error::request_invalid("signed headers must not be empty"));
    }
    let signed_headers = signed_headers.join(";");

    let date = &timestamp[..8];
    let scope = credential_scope(date, region, service);
    debug!("calculated scope: {scope}");

    let string_to_sign = string_to_sign(timestamp, &scope, canonical_request);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_access_key, date, region, service)?;
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    Ok(format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        cred.access_key_id
    ))
}
