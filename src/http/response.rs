/// Server identifier sent on every response.
pub const SERVER_NAME: &str = "aquaweb";

const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// HTTP status codes this server produces.
///
/// - `Ok` (200): page rendered
/// - `BadRequest` (400): unrecognized verb or garbled request
/// - `NotFound` (404): unrecognized path or mode
/// - `InternalServerError` (500): renderer failure
/// - `NotImplemented` (501): PUT, DELETE, HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use aquaweb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep insertion order; the builder emits Server, Content-Type,
/// Content-Length in that order, which is the order they go on the wire.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```
/// # use aquaweb::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("image/x-icon")
///     .body(vec![0u8; 4])
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("4"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response. Content-Length is the byte length of the
    /// body, not its character count.
    pub fn build(self) -> Response {
        let headers = vec![
            ("Server".to_string(), SERVER_NAME.to_string()),
            ("Content-Type".to_string(), self.content_type),
            ("Content-Length".to_string(), self.body.len().to_string()),
        ];

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 with an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body.into().into_bytes())
            .build()
    }

    /// 200 with raw file bytes and an explicit content type.
    pub fn file(content_type: &str, body: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest).build()
    }

    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError).build()
    }

    pub fn not_implemented() -> Self {
        ResponseBuilder::new(StatusCode::NotImplemented).build()
    }

    /// First header with the given name, if any.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
