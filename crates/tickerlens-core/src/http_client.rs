use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// HTTP request envelope used by the API client.
///
/// The client only ever issues GET requests, so the envelope carries no
/// method or body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: 30_000,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: String::from("OK"),
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failure category.
///
/// `TimedOut` and `ConnectionFailed` mean no usable response reached the
/// client; status-code failures are NOT transport errors and arrive as a
/// normal [`HttpResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    TimedOut,
    ConnectionFailed,
    Other,
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    kind: HttpErrorKind,
    message: String,
}

impl HttpError {
    pub fn timed_out(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::TimedOut,
            message: message.into(),
        }
    }

    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::ConnectionFailed,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Other,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract behind the API client.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Default no-op transport for deterministic offline tests.
#[derive(Debug, Default)]
pub struct NoopHttpClient;

impl HttpClient for NoopHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let _ = request;
        Box::pin(async move { Ok(HttpResponse::ok_json("{}")) })
    }
}

/// Production transport using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("tickerlens/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let timeout = std::time::Duration::from_millis(request.timeout_ms);
            builder = builder.timeout(timeout);

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::timed_out(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    HttpError::connection_failed(format!("connection failed: {e}"))
                } else {
                    HttpError::other(format!("request failed: {e}"))
                }
            })?;

            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("unknown")
                .to_owned();
            let body = response.text().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::timed_out(format!("request timeout while reading body: {e}"))
                } else {
                    HttpError::other(format!("failed to read response body: {e}"))
                }
            })?;

            Ok(HttpResponse {
                status,
                status_text,
                body,
            })
        })
    }
}
