//! MIME type resolution by file extension.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

static TABLE: LazyLock<MimeTable> = LazyLock::new(MimeTable::new);

/// Extension to MIME type mapping.
///
/// Frozen after construction, so handlers share it without locking.
#[derive(Debug)]
pub struct MimeTable {
    entries: HashMap<&'static str, &'static str>,
}

impl MimeTable {
    /// Builds the table from the fixed extension list.
    pub fn new() -> Self {
        let entries = [
            ("js", "text/javascript"),
            ("html", "text/html"),
            ("wasm", "application/wasm"),
        ]
        .into_iter()
        .collect();

        Self { entries }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static MimeTable {
        &TABLE
    }

    /// Resolves an extension (no leading dot).
    ///
    /// Unregistered extensions fall back to `text/{ext}`.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::mime::MimeTable;
    /// let table = MimeTable::new();
    /// assert_eq!(table.lookup("wasm"), "application/wasm");
    /// assert_eq!(table.lookup("css"), "text/css");
    /// ```
    pub fn lookup(&self, ext: &str) -> Cow<'static, str> {
        match self.entries.get(ext) {
            Some(mime) => Cow::Borrowed(*mime),
            None => Cow::Owned(format!("text/{ext}")),
        }
    }

    /// Resolves the MIME type for a request path using the text after its last `.`.
    pub fn for_path(&self, path: &str) -> Cow<'static, str> {
        self.lookup(extension(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything after the last `.`, or `""` when there is none.
pub fn extension(path: &str) -> &str {
    path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
