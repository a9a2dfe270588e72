//! ==============================================================================
//! api.rs - browser transport for the activities backend
//! ==============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{ClientError, HttpReply, Method, Transport};

/// fetch-backed transport. urls arrive fully built and encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, url: &str) -> Result<HttpReply, ClientError> {
        let request = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Delete => Request::delete(url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(HttpReply::new(status, body))
    }
}
