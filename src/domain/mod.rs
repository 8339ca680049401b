//! Domain layer: strong types with validation and invariants (no I/O).

mod error_code;
mod notification;
mod request;
mod response;
mod validation;
mod value;

pub use error_code::{ErrorCode, KnownErrorCode, UNKNOWN_ERROR, error_message};
pub use notification::{Notification, SmsNotification};
pub use request::Callback;
pub use response::{DATE_FORMAT, NotificationResult, STATUS_OK, SendResult};
pub(crate) use response::coerce_int;
pub use validation::ValidationError;
pub use value::{ApiKey, ApiSecret, MessageText, PhoneNumber, Receiver, Reference, Sender};
