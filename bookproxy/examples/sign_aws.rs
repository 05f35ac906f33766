use anyhow::Result;
use bookproxy::amazon::aws::{RequestSigner, StaticCredentialProvider};
use bookproxy::{default_context, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let provider = StaticCredentialProvider::new(
        &std::env::var("AMAZON_ACCESS_KEY_ID")?,
        &std::env::var("AMAZON_SECRET_ACCESS_KEY")?,
    );
    let signer = Signer::new(
        default_context(),
        provider,
        RequestSigner::new("ProductAdvertisingAPI", "us-east-1"),
    );

    let body = br#"{"Keywords":"rust","PartnerTag":"example-20","PartnerType":"Associates"}"#;
    let mut req = http::Request::builder()
        .method(http::Method::POST)
        .uri("https://webservices.amazon.com/paapi5/searchitems")
        .header("content-type", "application/json; charset=utf-8")
        .header(
            "x-amz-target",
            "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems",
        )
        .body(())?
        .into_parts()
        .0;

    signer.sign(&mut req, body).await?;

    for (name, value) in &req.headers {
        if value.is_sensitive() {
            println!("{name}: <redacted>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }

    Ok(())
}
