use anyhow::Result;
use bookproxy_aws_v4::{RequestSigner, StaticCredentialProvider, X_AMZ_DATE};
use bookproxy_core::time::DateTime;
use bookproxy_core::{Context, ErrorKind, ProvideCredential, SignRequest, Signer};
use chrono::TimeZone;
use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;

const ACCESS_KEY: &str = "AKIDEXAMPLE";
const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn signing_time() -> DateTime {
    chrono::Utc
        .with_ymd_and_hms(2015, 8, 30, 12, 36, 0)
        .single()
        .expect("time must be valid")
}

fn signer() -> RequestSigner {
    RequestSigner::new("service", "us-east-1").with_time(signing_time())
}

async fn sign(
    builder: &RequestSigner,
    provider: StaticCredentialProvider,
    req: http::Request<&'static [u8]>,
) -> Result<http::request::Parts> {
    let ctx = Context::new();
    let cred = provider.provide_credential(&ctx).await?;

    let (mut parts, body) = req.into_parts();
    builder
        .sign_request(&ctx, &mut parts, body, cred.as_ref())
        .await?;
    Ok(parts)
}

fn authorization(parts: &http::request::Parts) -> &str {
    parts.headers[AUTHORIZATION]
        .to_str()
        .expect("authorization must be valid string")
}

#[tokio::test]
async fn test_get_vanilla() -> Result<()> {
    init();

    let req = http::Request::get("https://example.amazonaws.com/").body(&b""[..])?;
    let parts = sign(
        &signer(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        req,
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
    assert_eq!(parts.headers["host"], "example.amazonaws.com");
    assert_eq!(parts.headers[X_AMZ_DATE], "20150830T123600Z");
    assert!(parts.headers[AUTHORIZATION].is_sensitive());
    Ok(())
}

#[tokio::test]
async fn test_post_x_www_form_urlencoded() -> Result<()> {
    init();

    let req = http::Request::post("https://example.amazonaws.com/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(&b"Param1=value1"[..])?;
    let parts = sign(
        &signer(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        req,
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=content-type;host;x-amz-date, Signature=ff11897932ad3f4e8b18135d722051e5ac45fc38421b1da7b9d196a0fe09473a"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_vanilla_query_order_key_case() -> Result<()> {
    init();

    let req = http::Request::get("https://example.amazonaws.com/?Param2=value2&Param1=value1")
        .body(&b""[..])?;
    let parts = sign(
        &signer(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        req,
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
    );
    // The transmitted query follows the signed order.
    assert_eq!(
        parts.uri.to_string(),
        "https://example.amazonaws.com/?Param1=value1&Param2=value2"
    );
    Ok(())
}

#[tokio::test]
async fn test_query_is_reencoded() -> Result<()> {
    init();

    let req =
        http::Request::get("https://example.amazonaws.com/?Param1=value+one").body(&b""[..])?;
    let parts = sign(
        &signer(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        req,
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=ffb4ff39bd71adfcc563cbecb7d967309bd9ac80b54162f65eba75481cb5153d"
    );
    assert_eq!(
        parts.uri.to_string(),
        "https://example.amazonaws.com/?Param1=value%20one"
    );
    Ok(())
}

#[tokio::test]
async fn test_session_token_is_signed() -> Result<()> {
    init();

    let req = http::Request::get("https://example.amazonaws.com/").body(&b""[..])?;
    let parts = sign(
        &signer(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY).with_session_token("token"),
        req,
    )
    .await?;

    assert_eq!(
        authorization(&parts),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date;x-amz-security-token, Signature=74e6e438e6f4460297db2935c12e2d008496363238dc6820b0e964cae4f33903"
    );
    assert!(parts.headers["x-amz-security-token"].is_sensitive());
    Ok(())
}

#[tokio::test]
async fn test_existing_date_header_is_kept() -> Result<()> {
    init();

    // No pinned time: the signature must come from the supplied header.
    let req = http::Request::get("https://example.amazonaws.com/")
        .header(X_AMZ_DATE, "20150830T123600Z")
        .body(&b""[..])?;
    let parts = sign(
        &RequestSigner::new("service", "us-east-1"),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        req,
    )
    .await?;

    assert!(authorization(&parts)
        .ends_with("Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_date_header_is_rejected() -> Result<()> {
    init();

    let ctx = Context::new();
    let cred = StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY)
        .provide_credential(&ctx)
        .await?;
    let (mut parts, _) = http::Request::get("https://example.amazonaws.com/")
        .header(X_AMZ_DATE, "2015-08-30T12:36:00Z")
        .body(())?
        .into_parts();

    let err = signer()
        .sign_request(&ctx, &mut parts, b"", cred.as_ref())
        .await
        .expect_err("malformed date must be rejected");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_is_an_error() -> Result<()> {
    init();

    let ctx = Context::new();
    let (mut parts, _) = http::Request::get("https://example.amazonaws.com/")
        .body(())?
        .into_parts();

    let err = signer()
        .sign_request(&ctx, &mut parts, b"", None)
        .await
        .expect_err("unsigned requests must not be produced");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn test_signer_with_empty_secret() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new(ACCESS_KEY, ""),
        signer(),
    );
    let (mut parts, _) = http::Request::get("https://example.amazonaws.com/")
        .body(())?
        .into_parts();

    let err = signer
        .sign(&mut parts, b"")
        .await
        .expect_err("empty secret must be rejected");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    Ok(())
}
