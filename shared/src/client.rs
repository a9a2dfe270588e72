//! ==============================================================================
//! client.rs - typed calls against the activities backend
//! ==============================================================================
//!
//! the transport only moves bytes; status checks and json decoding happen
//! here so they behave the same in the browser and in tests.
//!
//! ==============================================================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::endpoints::{Endpoint, Method};
use crate::error::ClientError;
use crate::model::Snapshot;

// ==============================================================================
// transport seam
// ==============================================================================

/// raw http answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// sends one request and hands back the status and body.
/// only a transport-level failure (no response at all) is an error.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, method: Method, url: &str) -> Result<HttpReply, ClientError>;
}

// ==============================================================================
// response bodies
// ==============================================================================

/// success body of signup/unregister; only its validity matters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// pulls a string `detail` out of an error body.
/// anything else (bad json, list-shaped detail) decodes to `None`.
pub fn decode_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.detail {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

fn reject(reply: &HttpReply) -> ClientError {
    ClientError::Server {
        status: reply.status,
        detail: decode_error_detail(&reply.body),
    }
}

fn decode<T: DeserializeOwned>(reply: &HttpReply) -> Result<T, ClientError> {
    serde_json::from_str(&reply.body).map_err(|e| ClientError::UnrecognizedResponse(e.to_string()))
}

// ==============================================================================
// client
// ==============================================================================

pub struct ActivitiesClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ActivitiesClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, endpoint: &Endpoint) -> Result<HttpReply, ClientError> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(method = %endpoint.method(), %url, "sending request");
        let reply = self.transport.send(endpoint.method(), &url).await?;
        if !reply.is_success() {
            return Err(reject(&reply));
        }
        Ok(reply)
    }

    pub async fn fetch_activities(&self) -> Result<Snapshot, ClientError> {
        let reply = self.call(&Endpoint::ListActivities).await?;
        decode(&reply)
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<Ack, ClientError> {
        let endpoint = Endpoint::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        };
        let reply = self.call(&endpoint).await?;
        decode(&reply)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Ack, ClientError> {
        let endpoint = Endpoint::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        };
        let reply = self.call(&endpoint).await?;
        decode(&reply)
    }
}

// ==============================================================================
// tests
// ==============================================================================
