//! Outbound HTTP notification side channel (best effort).
//!
//! Nothing in the decision path depends on this module; it is here so the
//! surrounding server can tell relying parties about session events with the
//! same encoding and delivery rules everywhere.

pub mod message;
pub mod sender;

pub use message::{
    EncodeError, FormUrlEncoder, HttpMessage, PayloadEncoder, DEFAULT_ASYNCHRONOUS, FORM_URLENCODED,
};
pub use sender::{Delivery, HttpClientSender, MessageSender, NotificationDispatcher};
