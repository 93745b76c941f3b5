use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::site::FileRouter;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<FileRouter>,
}

/// One request, one response, then close. There is no keep-alive loop
/// back into `Reading`.
pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<FileRouter>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            router,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let req = self.read_request().await?;
                    self.state = ConnectionState::Processing(req);
                }

                ConnectionState::Processing(req) => {
                    tracing::info!(request = %req.raw, "Received request");

                    let response = self.router.route(&req.path).await;
                    let writer = ResponseWriter::new(&response);
                    tracing::info!(
                        status = response.status.as_u16(),
                        bytes = writer.len(),
                        "Sending response"
                    );

                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a full header block is buffered.
    ///
    /// Blocks for as long as the client keeps the connection open without
    /// sending the blank line.
    pub async fn read_request(&mut self) -> anyhow::Result<Request> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(request);
                }

                Err(ParseError::Incomplete) => {}

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            let n = self
                .stream
                .read_buf(&mut self.buffer)
                .await
                .context("failed to read request")?;

            if n == 0 {
                anyhow::bail!("connection closed before end of request headers");
            }
        }
    }
}
