use crate::http::request::Request;

/// Marks the end of the header block.
pub const HEADER_DELIMITER: &[u8] = b"\r\n\r\n";

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The blank-line delimiter has not arrived yet
    Incomplete,
    /// The header block has no second token to use as a path
    MissingPath,
}

/// Parses the header block at the front of `buf`.
///
/// Returns the request and the number of bytes consumed, delimiter included.
/// Anything after the delimiter is ignored by the caller.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let raw = String::from_utf8_lossy(&buf[..headers_end]).into_owned();

    // Request line tokens are taken from the whole block, split on any whitespace.
    let mut parts = raw.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().ok_or(ParseError::MissingPath)?.to_string();
    let version = parts.next().unwrap_or_default().to_string();

    let request = Request {
        method,
        path,
        version,
        raw,
    };

    Ok((request, headers_end + HEADER_DELIMITER.len()))
}

pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_DELIMITER.len())
        .position(|w| w == HEADER_DELIMITER)
}
