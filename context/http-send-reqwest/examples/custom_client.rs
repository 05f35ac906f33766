use anyhow::Result;
use bookproxy_core::Context;
use bookproxy_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Upstream timeouts live on the client, not in the proxies.
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .user_agent("bookproxy-example/0.1")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = "https://www.googleapis.com/books/v1/volumes?q=rust&maxResults=1";
    println!("GET {url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(url)
        .body(Bytes::new())?;

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", String::from_utf8_lossy(resp.body()));
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
