use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway `api_key`.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// JSON field name used by the gateway (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway `api_secret`.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// `Debug` output never contains the secret.
pub struct ApiSecret(String);

impl ApiSecret {
    /// JSON field name used by the gateway (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Sender id (`from`): a short code, a phone number or an alphanumeric id
/// registered with the gateway.
///
/// Invariant: non-empty after trimming.
pub struct Sender(String);

impl Sender {
    /// JSON field name used by the gateway (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`Sender`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient number (`to`) exactly as sent to the gateway.
///
/// This type performs minimal validation (non-empty after trimming). For
/// normalization, parse into [`PhoneNumber`] and convert it into [`Receiver`].
pub struct Receiver(String);

impl Receiver {
    /// JSON field name used by the gateway (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Receiver {
    /// The gateway expects bare international digits, so the E.164 `+` is dropped.
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Receiver::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the gateway (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Client-side correlation id (`reference`).
///
/// Invariant: non-empty after trimming.
pub struct Reference(String);

impl Reference {
    /// JSON field name used by the gateway (`reference`).
    pub const FIELD: &'static str = "reference";

    /// Create a validated [`Reference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a time-derived reference.
    ///
    /// Layout: decimal unix seconds, then the seconds as 8 hex digits and the
    /// sub-second microseconds as 5 hex digits.
    pub fn generate() -> Self {
        Self::from_timestamp(jiff::Timestamp::now())
    }

    fn from_timestamp(now: jiff::Timestamp) -> Self {
        let secs = now.as_second();
        let micros = now.subsec_microsecond();
        Self(format!("{secs}{secs:08x}{micros:05x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = ApiKey::new("  key ").unwrap();
        assert_eq!(key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let secret = ApiSecret::new(" secret ").unwrap();
        assert_eq!(secret.as_str(), " secret ");
        assert!(ApiSecret::new("").is_err());

        let sender = Sender::new(" 1000 ").unwrap();
        assert_eq!(sender.to_string(), "1000");
        assert!(Sender::new(" ").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.to_string(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let reference = Reference::new(" order-42 ").unwrap();
        assert_eq!(reference.as_str(), "order-42");
        assert!(Reference::new("").is_err());
    }

    #[test]
    fn api_secret_debug_is_redacted() {
        let secret = ApiSecret::new("hunter2").unwrap();
        assert!(!format!("{secret:?}").contains("hunter2"));
    }

    #[test]
    fn receiver_from_phone_number_strips_plus() {
        let pn = PhoneNumber::parse(None, "+237 699 99 99 99").unwrap();
        assert_eq!(pn.e164(), "+237699999999");

        let receiver: Receiver = pn.into();
        assert_eq!(receiver.raw(), "237699999999");
        assert_eq!(receiver.to_string(), "237699999999");
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+79251234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+7 925 123-45-67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.raw(), "+79251234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(matches!(
            PhoneNumber::parse(None, "   "),
            Err(ValidationError::Empty { field: "to" })
        ));
    }

    #[test]
    fn generated_reference_is_prefixed_by_unix_seconds() {
        let now = jiff::Timestamp::new(1_700_000_000, 123_456_000).unwrap();
        let reference = Reference::from_timestamp(now);
        assert_eq!(reference.as_str(), "17000000006553f1001e240");
    }

    #[test]
    fn generated_references_are_not_empty() {
        let reference = Reference::generate();
        assert!(reference.as_str().len() >= 13);
        assert!(reference.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
