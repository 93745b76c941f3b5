//! Request path to response mapping

use std::path::PathBuf;

use crate::http::mime::MimeTable;
use crate::http::response::Response;
use crate::site::files::{self, FileError};

/// Path served for requests to `/`.
pub const HOME_PAGE: &str = "/index.html";

/// Serves files from a document root.
#[derive(Debug, Clone)]
pub struct FileRouter {
    doc_root: String,
    mime: &'static MimeTable,
}

impl FileRouter {
    /// Create a router over `doc_root` using the process-wide MIME table
    pub fn new(doc_root: impl Into<String>) -> Self {
        Self::with_mime_table(doc_root, MimeTable::global())
    }

    pub fn with_mime_table(doc_root: impl Into<String>, mime: &'static MimeTable) -> Self {
        Self {
            doc_root: doc_root.into(),
            mime,
        }
    }

    pub fn doc_root(&self) -> &str {
        &self.doc_root
    }

    /// Filesystem location for a request path.
    ///
    /// Plain concatenation of root and path: `..` segments are not resolved
    /// or rejected.
    pub fn resolve(&self, path: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.doc_root, path))
    }

    /// Load the file behind `path` and build the response for it.
    ///
    /// `/` is served as [`HOME_PAGE`].
    pub async fn route(&self, path: &str) -> Response {
        let path = if path == "/" { HOME_PAGE } else { path };

        match files::read_all(self.resolve(path)).await {
            Ok(body) => Response::ok(self.mime.for_path(path), body),
            Err(err @ FileError::NotFound(_)) => {
                tracing::debug!(error = %err, "Serving 404");
                Response::not_found()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Serving 500");
                Response::internal_error()
            }
        }
    }
}
