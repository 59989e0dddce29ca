use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use ssoflow_core::error::{Result, SsoError};

use super::message::HttpMessage;

/// Transport for outbound messages. Returns the HTTP status observed.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, msg: &HttpMessage) -> Result<u16>;
}

/// `reqwest`-backed sender: POST with the message's content type.
pub struct HttpClientSender {
    client: reqwest::Client,
}

impl HttpClientSender {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SsoError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MessageSender for HttpClientSender {
    async fn send(&self, msg: &HttpMessage) -> Result<u16> {
        let resp = self
            .client
            .post(msg.url().clone())
            .header(reqwest::header::CONTENT_TYPE, msg.content_type())
            .body(msg.body())
            .send()
            .await
            .map_err(|e| SsoError::Notification(format!("send to {} failed: {e}", msg.url())))?;
        Ok(resp.status().as_u16())
    }
}

/// Outcome of handing a message to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Spawned; the caller never sees the result.
    Dispatched,
    /// Sent inline with this response status.
    Completed(u16),
    /// Asynchronous message with no runtime to spawn on.
    Dropped,
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: Arc<dyn MessageSender>,
}

impl NotificationDispatcher {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Asynchronous messages are detached; synchronous ones are awaited and
    /// their failures returned.
    pub async fn dispatch(&self, msg: Arc<HttpMessage>) -> Result<Delivery> {
        if msg.is_asynchronous() {
            return Ok(self.dispatch_detached(msg));
        }

        let code = self.sender.send(&msg).await?;
        msg.record_response_code(code);
        tracing::debug!(url = %msg.url(), status = code, "notification sent");
        Ok(Delivery::Completed(code))
    }

    /// Fire-and-forget on the current tokio runtime. Failures are logged only.
    pub fn dispatch_detached(&self, msg: Arc<HttpMessage>) -> Delivery {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(url = %msg.url(), "no async runtime; notification dropped");
            return Delivery::Dropped;
        };

        let sender = Arc::clone(&self.sender);
        handle.spawn(async move {
            match sender.send(&msg).await {
                Ok(code) => {
                    msg.record_response_code(code);
                    tracing::debug!(url = %msg.url(), status = code, "notification sent");
                }
                Err(e) => {
                    tracing::warn!(url = %msg.url(), error = %e, "notification failed");
                }
            }
        });
        Delivery::Dispatched
    }
}
