use std::fmt;

use crate::domain::value::{MessageText, Receiver, Sender};

/// A message handed to a notification backend.
///
/// Sender, receiver and content only need a string form; backends render
/// them with `to_string()`.
pub trait Notification: Send + Sync {
    fn sender(&self) -> &dyn fmt::Display;

    fn receiver(&self) -> &dyn fmt::Display;

    fn content(&self) -> &dyn fmt::Display;

    /// Caller-supplied identifier, used as the gateway `reference` when present.
    fn id(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Plain SMS notification.
pub struct SmsNotification {
    sender: Sender,
    receiver: Receiver,
    content: MessageText,
    id: Option<String>,
}

impl SmsNotification {
    pub fn new(sender: Sender, receiver: Receiver, content: MessageText) -> Self {
        Self {
            sender,
            receiver,
            content,
            id: None,
        }
    }

    /// Attach a caller-side identifier. Blank ids are ignored.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = if id.trim().is_empty() { None } else { Some(id) };
        self
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    pub fn content(&self) -> &MessageText {
        &self.content
    }
}

impl Notification for SmsNotification {
    fn sender(&self) -> &dyn fmt::Display {
        &self.sender
    }

    fn receiver(&self) -> &dyn fmt::Display {
        &self.receiver
    }

    fn content(&self) -> &dyn fmt::Display {
        &self.content
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> SmsNotification {
        SmsNotification::new(
            Sender::new("1000").unwrap(),
            Receiver::new("23799999999").unwrap(),
            MessageText::new("Hi").unwrap(),
        )
    }

    #[test]
    fn renders_parts_through_the_trait() {
        let n = notification();
        let view: &dyn Notification = &n;
        assert_eq!(view.sender().to_string(), "1000");
        assert_eq!(view.receiver().to_string(), "23799999999");
        assert_eq!(view.content().to_string(), "Hi");
        assert_eq!(view.id(), None);
    }

    #[test]
    fn with_id_ignores_blank_values() {
        assert_eq!(Notification::id(&notification().with_id("ref-1")), Some("ref-1"));
        assert_eq!(Notification::id(&notification().with_id("  ")), None);
    }
}
