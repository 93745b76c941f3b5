//! docserve - minimal static file server
//!
//! Reads one request per connection, maps its path under a document root
//! and answers with the file's bytes.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
