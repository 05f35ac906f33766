//! Amazon Product Advertising API 5.0 books proxy.
//!
//! Turns a `{searchType, query, category?, maxResults?}` request into a
//! SigV4 signed `SearchItems` call and maps the items into [`Book`]s.
//!
//! ## Example
//!
//! ```no_run
//! use bookproxy_amazon_books::{AmazonBooksProxy, ClientRequest};
//! use bookproxy_core::{Context, OsEnv, Result};
//! use bookproxy_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!     let proxy = AmazonBooksProxy::new(ctx);
//!
//!     let resp = proxy
//!         .search(&ClientRequest {
//!             search_type: Some("search".to_string()),
//!             query: Some("rust".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("found {} books", resp.total_results);
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::Config;
pub use config::Missing;

mod payload;
pub use payload::ClientRequest;
pub use payload::Payload;
pub use payload::SearchItemsRequest;
pub use payload::SearchType;

mod response;
pub use response::*;

mod proxy;
pub use proxy::AmazonBooksProxy;
