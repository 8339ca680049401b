/// Description returned for codes outside the documented table.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway error code carried in the response `status` field.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(self.0)
    }

    /// Human-readable description of this code.
    pub fn description(self) -> &'static str {
        Self::message(self.0)
    }

    /// Description for a raw code. Total over all integers: unknown codes map
    /// to [`UNKNOWN_ERROR`].
    pub fn message(code: i32) -> &'static str {
        KnownErrorCode::from_code(code).map_or(UNKNOWN_ERROR, KnownErrorCode::message)
    }

    /// Returns `true` if the gateway rejected the credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }

    /// Returns `true` if the code points at a malformed request.
    pub fn is_request_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_request_error())
    }

    /// Returns `true` if the code points at an account/billing problem.
    pub fn is_account_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_account_error())
    }

    /// Returns `true` if the failure is on the gateway side and a later attempt may succeed.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }
}

/// Shorthand for [`ErrorCode::message`].
pub fn error_message(code: i32) -> &'static str {
    ErrorCode::message(code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Error codes documented by the gateway.
pub enum KnownErrorCode {
    PostOnly,
    InvalidJson,
    MissingCredentials,
    InvalidCredentials,
    NoData,
    MissingSender,
    SenderIdError,
    MissingMessage,
    MissingRecipient,
    InvalidRecipient,
    RouteNotFound,
    InsufficientCredit,
    BillingProblem,
    InternalError,
}

impl KnownErrorCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            100 => Self::PostOnly,
            101 => Self::InvalidJson,
            102 => Self::MissingCredentials,
            103 => Self::InvalidCredentials,
            104 => Self::NoData,
            105 => Self::MissingSender,
            106 => Self::SenderIdError,
            107 => Self::MissingMessage,
            108 => Self::MissingRecipient,
            109 => Self::InvalidRecipient,
            110 => Self::RouteNotFound,
            111 => Self::InsufficientCredit,
            112 => Self::BillingProblem,
            113 => Self::InternalError,
            _ => return None,
        })
    }

    /// The integer code used on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::PostOnly => 100,
            Self::InvalidJson => 101,
            Self::MissingCredentials => 102,
            Self::InvalidCredentials => 103,
            Self::NoData => 104,
            Self::MissingSender => 105,
            Self::SenderIdError => 106,
            Self::MissingMessage => 107,
            Self::MissingRecipient => 108,
            Self::InvalidRecipient => 109,
            Self::RouteNotFound => 110,
            Self::InsufficientCredit => 111,
            Self::BillingProblem => 112,
            Self::InternalError => 113,
        }
    }

    /// Description as documented by the gateway.
    pub fn message(self) -> &'static str {
        match self {
            Self::PostOnly => "Only POST is allowed.",
            Self::InvalidJson => "Invalid JSON",
            Self::MissingCredentials => "Missing credentials",
            Self::InvalidCredentials => "Invalid credentials",
            Self::NoData => "No data",
            Self::MissingSender => "Missing from parameter.",
            Self::SenderIdError => "Sender ID error",
            Self::MissingMessage => "Missing message.",
            Self::MissingRecipient => "Missing to number",
            Self::InvalidRecipient => "Invalid to number",
            Self::RouteNotFound => "Route not found",
            Self::InsufficientCredit => "Insufficient credit",
            Self::BillingProblem => "Billing problem",
            Self::InternalError => "Unable to send sms - internal error",
        }
    }

    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::MissingCredentials | Self::InvalidCredentials)
    }

    pub fn is_request_error(self) -> bool {
        matches!(
            self,
            Self::PostOnly
                | Self::InvalidJson
                | Self::NoData
                | Self::MissingSender
                | Self::SenderIdError
                | Self::MissingMessage
                | Self::MissingRecipient
                | Self::InvalidRecipient
        )
    }

    pub fn is_account_error(self) -> bool {
        matches!(self, Self::InsufficientCredit | Self::BillingProblem)
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, Self::InternalError)
    }
}

impl From<KnownErrorCode> for ErrorCode {
    fn from(value: KnownErrorCode) -> Self {
        Self(value.code())
    }
}
