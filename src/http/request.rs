/// A parsed request header block.
///
/// Only `path` drives routing. Method and version are kept as the client
/// sent them; nothing validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token of the request line (e.g. "GET")
    pub method: String,
    /// Second token of the request line (e.g. "/index.html")
    pub path: String,
    /// Third token of the request line, empty if the client omitted it
    pub version: String,
    /// The header block as received, without the trailing blank line
    pub raw: String,
}

impl Request {
    /// Whether this request targets the home page.
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}
