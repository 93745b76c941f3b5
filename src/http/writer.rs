use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a raw HTTP/1.1 response.
///
/// `Content-Length` is the byte length of `body`.
///
/// # Example
///
/// ```
/// # use docserve::http::writer::build;
/// let raw = build("200 OK", "text/html", b"hello");
/// assert_eq!(
///     raw,
///     b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 5\r\n\r\nhello"
/// );
/// ```
pub fn build(status_line: &str, mime_type: &str, body: &[u8]) -> Vec<u8> {
    let head = format!(
        "{} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        status_line,
        mime_type,
        body.len()
    );

    let mut buf = Vec::with_capacity(head.len() + body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(body);
    buf
}

pub fn serialize_response(resp: &Response) -> Vec<u8> {
    build(&resp.status.status_line(), &resp.content_type, &resp.body)
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Total bytes of the serialized response.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
