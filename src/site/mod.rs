//! Static site serving
//!
//! Maps request paths onto files under the document root and turns the
//! outcome of reading them into responses.

pub mod files;
pub mod router;

pub use files::FileError;
pub use router::FileRouter;
