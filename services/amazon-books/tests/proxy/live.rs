use anyhow::Result;
use bookproxy_amazon_books::{AmazonBooksProxy, ClientRequest};
use bookproxy_core::{Context, OsEnv};
use bookproxy_http_send_reqwest::ReqwestHttpSend;
use log::warn;
use std::env;

fn init_live_proxy() -> Option<AmazonBooksProxy> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("BOOKPROXY_AMAZON_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    Some(AmazonBooksProxy::new(ctx))
}

#[tokio::test]
async fn test_live_search() -> Result<()> {
    let Some(proxy) = init_live_proxy() else {
        warn!("BOOKPROXY_AMAZON_TEST is not set, skipped");
        return Ok(());
    };

    let resp = proxy
        .search(&ClientRequest {
            search_type: Some("search".to_string()),
            query: Some("rust programming".to_string()),
            max_results: Some(3),
            ..Default::default()
        })
        .await?;

    assert_eq!(resp.search_type, "search");
    assert!(resp.books.len() <= 3);
    assert_eq!(resp.total_results, resp.books.len());
    Ok(())
}
