use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use reqwest::Url;
use thiserror::Error;

/// Default content type for outbound messages.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Messages are fire-and-forget unless asked otherwise.
pub const DEFAULT_ASYNCHRONOUS: bool = true;

#[derive(Debug, Error)]
#[error("payload encoding failed: {0}")]
pub struct EncodeError(pub String);

/// Turns the raw payload into its wire form.
pub trait PayloadEncoder: Send + Sync + fmt::Debug {
    fn encode(&self, raw: &str) -> std::result::Result<String, EncodeError>;
}

/// UTF-8 percent-encoding in HTML form style: space as `+`, and only
/// `A-Z a-z 0-9 . - * _` left unescaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormUrlEncoder;

impl PayloadEncoder for FormUrlEncoder {
    fn encode(&self, raw: &str) -> std::result::Result<String, EncodeError> {
        // `urlencoding` keeps `~` and escapes `*`; form encoding does the opposite.
        // A literal `%` is always escaped to `%25`, so these rewrites cannot
        // touch input text.
        Ok(urlencoding::encode(raw)
            .replace("%20", "+")
            .replace("%2A", "*")
            .replace('~', "%7E"))
    }
}

/// One outbound notification: destination, payload, delivery mode, and the
/// last response status observed for it.
#[derive(Debug)]
pub struct HttpMessage {
    url: Url,
    message: String,
    asynchronous: bool,
    content_type: String,
    // 0 = no response observed yet
    response_code: AtomicU16,
    encoder: Arc<dyn PayloadEncoder>,
}

impl HttpMessage {
    pub fn new(url: Url, message: impl Into<String>) -> Self {
        Self::with_async(url, message, DEFAULT_ASYNCHRONOUS)
    }

    pub fn with_async(url: Url, message: impl Into<String>, asynchronous: bool) -> Self {
        Self {
            url,
            message: message.into(),
            asynchronous,
            content_type: FORM_URLENCODED.to_string(),
            response_code: AtomicU16::new(0),
            encoder: Arc::new(FormUrlEncoder),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn PayloadEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_asynchronous(&self) -> bool {
        self.asynchronous
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn raw_message(&self) -> &str {
        &self.message
    }

    /// Encoded payload. If encoding fails the raw payload is sent instead;
    /// the failure is logged, never returned.
    pub fn message(&self) -> String {
        match self.encoder.encode(&self.message) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(
                    url = %self.url,
                    error = %e,
                    "unable to encode message; sending raw payload"
                );
                self.message.clone()
            }
        }
    }

    pub fn body(&self) -> Bytes {
        Bytes::from(self.message())
    }

    pub fn response_code(&self) -> Option<u16> {
        match self.response_code.load(Ordering::Relaxed) {
            0 => None,
            code => Some(code),
        }
    }

    pub fn record_response_code(&self, code: u16) {
        self.response_code.store(code, Ordering::Relaxed);
    }
}
