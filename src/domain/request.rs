use std::fmt;
use std::sync::Arc;

use crate::domain::notification::Notification;

type Resolver = Arc<dyn Fn(&dyn Notification) -> String + Send + Sync>;

#[derive(Clone)]
/// Delivery-status callback attached to outgoing messages.
///
/// Either a fixed URL or a resolver computing the URL from the notification
/// at send time.
pub enum Callback {
    Url(String),
    Resolver(Resolver),
}

impl Callback {
    /// Wrap a resolver function.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&dyn Notification) -> String + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(f))
    }

    /// Produce the callback value for `notification`.
    pub fn resolve(&self, notification: &dyn Notification) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Resolver(resolve) => resolve(notification),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<String> for Callback {
    fn from(value: String) -> Self {
        Self::Url(value)
    }
}

impl From<&str> for Callback {
    fn from(value: &str) -> Self {
        Self::Url(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, Receiver, Sender, SmsNotification};

    use super::*;

    #[test]
    fn literal_and_resolver_callbacks() {
        let n = SmsNotification::new(
            Sender::new("1000").unwrap(),
            Receiver::new("23799999999").unwrap(),
            MessageText::new("Hi").unwrap(),
        );

        let literal = Callback::from("https://example.com/dlr");
        assert_eq!(literal.resolve(&n), "https://example.com/dlr");

        let computed =
            Callback::resolver(|n| format!("https://example.com/dlr/{}", n.receiver()));
        assert_eq!(computed.resolve(&n), "https://example.com/dlr/23799999999");
        assert_eq!(format!("{computed:?}"), "Resolver(..)");
    }
}
