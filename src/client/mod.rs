//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiKey, ApiSecret, Callback, ErrorCode, Notification, NotificationResult, SendResult,
    ValidationError,
};
use crate::transport::{
    SEND_SMS_PATH, SendSmsBody, decode_send_sms_json_response, encode_send_sms_body,
    payload_status,
};

/// Production base URL of the gateway.
pub const DEFAULT_ENDPOINT: &str = "https://extranet.nghcorp.net";

const CONTENT_TYPE_JSON: &str = "application/json";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, &'static str)],
        body: &'a SendSmsBody,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: &'a [(&'static str, &'static str)],
        body: &'a SendSmsBody,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(*name, *value);
            }
            let response = request.json(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// A notification backend: sends one notification and reports the outcome.
pub trait NotificationClient: Send + Sync {
    fn send_request<'a>(
        &'a self,
        notification: &'a dyn Notification,
    ) -> BoxFuture<'a, Result<Box<dyn NotificationResult + Send + Sync>, DriverError>>;
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Driver`].
///
/// Every failure is surfaced as-is; nothing is retried.
pub enum DriverError {
    /// The driver has no api key/secret; raised before any network call.
    #[error(
        "authorization credentials were not provided; call with_credentials() to pass in the api key and secret"
    )]
    InvalidCredentials,

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP status outside `200..=204`.
    #[error("POST /api/send-sms failed with status {status} - {body}")]
    HttpStatus { status: u16, body: String },

    /// The payload `status` field is set and is not `200`.
    #[error("{message}")]
    Api {
        code: ErrorCode,
        message: &'static str,
    },

    /// Response body could not be parsed as a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DriverError {
    /// Numeric code carried by the error: the provider code for
    /// [`DriverError::Api`], the HTTP status for [`DriverError::HttpStatus`].
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Api { code, .. } => Some(code.as_i32()),
            Self::HttpStatus { status, .. } => Some(i32::from(*status)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Driver`].
///
/// Use this when you need to customize the timeout or user-agent, or want the
/// endpoint validated up front.
pub struct DriverBuilder {
    endpoint: String,
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    callback: Option<Callback>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DriverBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            api_secret: None,
            callback: None,
            timeout: None,
            user_agent: None,
        }
    }

    pub fn credentials(mut self, api_key: ApiKey, api_secret: ApiSecret) -> Self {
        self.api_key = Some(api_key);
        self.api_secret = Some(api_secret);
        self
    }

    pub fn callback(mut self, callback: impl Into<Callback>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Driver`].
    ///
    /// Fails with [`ValidationError::InvalidUrl`] unless the endpoint is an
    /// absolute `http`/`https` URL.
    pub fn build(self) -> Result<Driver, DriverError> {
        let endpoint = normalize_endpoint(self.endpoint);
        validate_endpoint(&endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DriverError::Transport(Box::new(err)))?;

        Ok(Driver {
            endpoint,
            api_key: self.api_key,
            api_secret: self.api_secret,
            callback: self.callback,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// SMS driver for the NGH Corp gateway.
///
/// A `Driver` is an immutable value: [`Driver::with_credentials`] and
/// [`Driver::with_callback_url`] return a modified copy and leave the original
/// untouched, so one instance can be shared freely between tasks.
pub struct Driver {
    endpoint: String,
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    callback: Option<Callback>,
    http: Arc<dyn HttpTransport>,
}

impl Driver {
    /// Create a driver without credentials or callback.
    ///
    /// A trailing `/` on `endpoint` is stripped. For more customization, use
    /// [`Driver::builder`].
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint.into()),
            api_key: None,
            api_secret: None,
            callback: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a driver with custom settings.
    pub fn builder(endpoint: impl Into<String>) -> DriverBuilder {
        DriverBuilder::new(endpoint)
    }

    /// Copy of this driver using the given credentials.
    pub fn with_credentials(&self, api_key: ApiKey, api_secret: ApiSecret) -> Self {
        Self {
            api_key: Some(api_key),
            api_secret: Some(api_secret),
            ..self.clone()
        }
    }

    /// Copy of this driver using the given delivery callback.
    ///
    /// Accepts a literal URL or a [`Callback::resolver`].
    pub fn with_callback_url(&self, callback: impl Into<Callback>) -> Self {
        Self {
            callback: Some(callback.into()),
            ..self.clone()
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Send `notification` through the gateway.
    ///
    /// Errors:
    /// - [`DriverError::InvalidCredentials`] when credentials are missing (no request is made),
    /// - [`DriverError::HttpStatus`] for HTTP statuses outside `200..=204`,
    /// - [`DriverError::Api`] when the payload `status` is set and is not `200`,
    /// - [`DriverError::Parse`] when the body is not a JSON object.
    pub async fn send_request(
        &self,
        notification: &dyn Notification,
    ) -> Result<SendResult, DriverError> {
        let (Some(api_key), Some(api_secret)) = (&self.api_key, &self.api_secret) else {
            return Err(DriverError::InvalidCredentials);
        };

        let callback = self
            .callback
            .as_ref()
            .map(|callback| callback.resolve(notification));
        let body = encode_send_sms_body(notification, api_key, api_secret, callback);
        let url = format!("{}{}", self.endpoint, SEND_SMS_PATH);

        debug!(
            url = %url,
            reference = %body.reference,
            callback = body.callback.is_some(),
            "sending sms"
        );

        let response = self
            .http
            .post_json(&url, &[("Content-Type", CONTENT_TYPE_JSON)], &body)
            .await
            .map_err(DriverError::Transport)?;

        if !(200..=204).contains(&response.status) {
            warn!(status = response.status, "gateway rejected the request");
            return Err(DriverError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        let payload = decode_send_sms_json_response(&response.body)
            .map_err(|err| DriverError::Parse(Box::new(err)))?;

        if let Some(status) = payload_status(&payload).filter(|status| *status != 200) {
            let code = ErrorCode::new(status);
            warn!(code = status, "gateway returned an error status");
            return Err(DriverError::Api {
                code,
                message: code.description(),
            });
        }

        let result = SendResult::from_json(&payload);
        debug!(message_id = ?result.id(), ok = result.is_ok(), "sms accepted");
        Ok(result)
    }
}

impl NotificationClient for Driver {
    fn send_request<'a>(
        &'a self,
        notification: &'a dyn Notification,
    ) -> BoxFuture<'a, Result<Box<dyn NotificationResult + Send + Sync>, DriverError>> {
        Box::pin(async move {
            let result = Driver::send_request(self, notification).await?;
            Ok(Box::new(result) as Box<dyn NotificationResult + Send + Sync>)
        })
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret)
            .field("callback", &self.callback)
            .finish_non_exhaustive()
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    endpoint.trim().trim_end_matches('/').to_owned()
}

fn validate_endpoint(endpoint: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        field: "endpoint",
        input: endpoint.to_owned(),
    };
    let url = url::Url::parse(endpoint).map_err(|_| invalid())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid());
    }
    Ok(())
}
