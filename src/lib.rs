//! Typed Rust driver for the NGH Corp SMS gateway.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating the single
//! `POST /api/send-sms` call.
//!
//! ```rust,no_run
//! use nghcorp::{ApiKey, ApiSecret, Driver, MessageText, Receiver, Sender, SmsNotification};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nghcorp::DriverError> {
//!     let driver = Driver::new("https://extranet.nghcorp.net")
//!         .with_credentials(ApiKey::new("...")?, ApiSecret::new("...")?);
//!     let notification = SmsNotification::new(
//!         Sender::new("1000")?,
//!         Receiver::new("23799999999")?,
//!         MessageText::new("hello")?,
//!     );
//!     let result = driver.send_request(&notification).await?;
//!     println!("{:?} accepted: {}", result.id(), result.is_ok());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_ENDPOINT, Driver, DriverBuilder, DriverError, NotificationClient,
};
pub use domain::{
    ApiKey, ApiSecret, Callback, DATE_FORMAT, ErrorCode, KnownErrorCode, MessageText,
    Notification, NotificationResult, PhoneNumber, Receiver, Reference, STATUS_OK, SendResult,
    Sender, SmsNotification, UNKNOWN_ERROR, ValidationError, error_message,
};
