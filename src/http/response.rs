use bytes::Bytes;

/// HTTP status codes the server produces.
///
/// - `Ok` (200): file found and read
/// - `NotFound` (404): no file at the routed path
/// - `InternalServerError` (500): any other read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// The status line as written after `HTTP/1.1 `, e.g. `404 Not Found`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A response ready to be serialized.
///
/// Only `Content-Type` and `Content-Length` are ever emitted, so the
/// content type is carried directly instead of a header map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the `Content-Type` header
    pub content_type: String,
    /// Response body as bytes
    pub body: Bytes,
}

impl Response {
    /// Creates a 200 OK response carrying a file's bytes.
    pub fn ok(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Creates the fixed 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/plain".to_string(),
            body: Bytes::from_static(b"Not Found"),
        }
    }

    /// Creates the fixed 500 Internal Server Error response (empty body).
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            content_type: "text/plain".to_string(),
            body: Bytes::new(),
        }
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
