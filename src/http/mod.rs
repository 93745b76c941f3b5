//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve static files: one request per connection,
//! responses carrying only `Content-Type` and `Content-Length`.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection handler driving the state machine below
//! - **`parser`**: Finds the header block and pulls the path out of it
//! - **`request`**: The parsed header block
//! - **`response`**: Status codes and the response value
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the blank line ending the headers
//!        └──────┬──────┘
//!               │ Header block received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route the path to a file
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, then shut the socket
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! A connection that ends before the header block is complete gets no
//! response; the handler returns an error and the socket is dropped.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
