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

use bookproxy_core::response::{error_response, Cors};
use bookproxy_core::{Context, Proxy};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Router maps function names to proxies.
///
/// Requests are routed by the last segment of their path, so both
/// `/openai-proxy` and `/.netlify/functions/openai-proxy` reach the proxy
/// named `openai-proxy`.
#[derive(Debug, Default, Clone)]
pub struct Router {
    proxies: HashMap<&'static str, Arc<dyn Proxy>>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with every enabled proxy sharing `ctx`.
    #[allow(unused_mut, unused_variables)]
    pub fn from_context(ctx: Context) -> Self {
        let mut router = Self::new();
        #[cfg(feature = "amazon")]
        {
            router = router.register(crate::amazon::AmazonBooksProxy::new(ctx.clone()));
        }
        #[cfg(feature = "google")]
        {
            router = router.register(crate::google::GoogleBooksProxy::new(ctx.clone()));
        }
        #[cfg(feature = "openai")]
        {
            router = router.register(crate::openai::OpenAiProxy::new(ctx.clone()));
        }
        router
    }

    /// Register a proxy under its name, replacing any previous one.
    pub fn register(mut self, proxy: impl Proxy) -> Self {
        self.proxies.insert(proxy.name(), Arc::new(proxy));
        self
    }

    /// Names of all registered proxies, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.proxies.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Route `req` to the proxy named by the last segment of `path`.
    pub async fn dispatch(&self, path: &str, req: Request<Bytes>) -> Response<Bytes> {
        let name = function_name(path);
        match self.proxies.get(name) {
            Some(proxy) => proxy.handle(req).await,
            None => {
                debug!("no proxy registered for path {path}");
                error_response(StatusCode::NOT_FOUND, "Not Found", Cors::None)
            }
        }
    }

    /// Route `req` by its own uri path.
    pub async fn route(&self, req: Request<Bytes>) -> Response<Bytes> {
        let path = req.uri().path().to_string();
        self.dispatch(&path, req).await
    }
}

fn function_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
