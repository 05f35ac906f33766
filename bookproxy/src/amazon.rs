// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Amazon Product Advertising API support with convenience APIs
//!
//! Besides the book search proxy this module re-exports the SigV4 primitives
//! it is built on, so callers can sign other AWS JSON requests as well.

pub use bookproxy_amazon_books::*;

/// AWS SigV4 signing primitives.
pub mod aws {
    pub use bookproxy_aws_v4::*;
}

#[cfg(feature = "default-context")]
use crate::default_context;

/// Create an amazon books proxy reading its configuration from the process
/// environment.
///
/// Configuration is read on every invocation, so missing variables surface as
/// a `500` response listing what is absent rather than as a panic here.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// use bookproxy::Proxy;
///
/// let proxy = bookproxy::amazon::default_proxy();
/// let req = http::Request::builder()
///     .method("POST")
///     .uri("/amazon-books-proxy")
///     .body(bytes::Bytes::from_static(br#"{"query":"rust"}"#))
///     .unwrap();
///
/// let resp = proxy.handle(req).await;
/// println!("{}", resp.status());
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_proxy() -> AmazonBooksProxy {
    AmazonBooksProxy::new(default_context())
}
