use anyhow::Result;
use bookproxy::{default_context, Router};
use bytes::Bytes;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let function = args.next().unwrap_or_else(|| "google-books-proxy".to_string());
    let query = args.collect::<Vec<_>>().join(" ");

    let router = Router::from_context(default_context());

    let body = serde_json::json!({ "query": query, "maxResults": 5 });
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri(format!("/.netlify/functions/{function}"))
        .body(Bytes::from(serde_json::to_vec(&body)?))?;

    let resp = router.route(req).await;
    println!("Response status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
