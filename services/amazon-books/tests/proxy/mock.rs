use async_trait::async_trait;
use bookproxy_core::{HttpSend, Result};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use std::sync::{Arc, Mutex};

/// HttpSend that records requests and answers with a canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    status: StatusCode,
    body: Bytes,
    requests: Arc<Mutex<Vec<Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::default(),
        }
    }

    pub fn take_requests(&self) -> Vec<Request<Bytes>> {
        std::mem::take(&mut *self.requests.lock().expect("lock poisoned"))
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        self.requests.lock().expect("lock poisoned").push(req);

        let mut resp = Response::new(self.body.clone());
        *resp.status_mut() = self.status;
        Ok(resp)
    }
}
