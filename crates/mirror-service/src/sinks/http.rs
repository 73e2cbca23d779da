//! HTTP mirror sink
//!
//! POSTs the event as JSON with a shared `reqwest::Client`. The client is
//! built once at startup and cloned cheaply into each delivery.

use async_trait::async_trait;
use mirror_common::{AppError, MirrorTargetConfig};
use mirror_core::{MirrorResponse, MirrorSink, PresenceEvent, SinkError, SinkResult};

/// User agent sent with every mirror request
const USER_AGENT: &str = concat!("presence-mirror/", env!("CARGO_PKG_VERSION"));

/// `MirrorSink` backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpMirrorSink {
    client: reqwest::Client,
}

impl HttpMirrorSink {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the client from the mirror target settings
    pub fn from_config(config: &MirrorTargetConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map(Self::new)
            .map_err(|e| AppError::HttpClient(e.to_string()))
    }
}

#[async_trait]
impl MirrorSink for HttpMirrorSink {
    async fn deliver(&self, url: &str, event: &PresenceEvent) -> SinkResult<MirrorResponse> {
        let response = self
            .client
            .post(url)
            .json(event)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(MirrorResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(SinkError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Classify a failed send; body serialization surfaces as a builder error
fn send_error(e: reqwest::Error) -> SinkError {
    let from_encoder = std::error::Error::source(&e).is_some_and(|s| s.is::<serde_json::Error>());
    if e.is_builder() && from_encoder {
        SinkError::Encoding(e.to_string())
    } else {
        SinkError::Transport(e.to_string())
    }
}
