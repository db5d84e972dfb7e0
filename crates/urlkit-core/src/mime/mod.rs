//! MIME content-type resolution for request URLs.
//!
//! The registry maps lowercase extensions (with their leading dot) to content
//! types; the resolver parses a URL, takes its extension and looks it up,
//! degrading to `text/plain` for anything it cannot classify.

mod registry;
mod resolve;

pub use registry::{MimeRegistry, DEFAULT_MIME_TYPES};
pub use resolve::{MimeResolver, DEFAULT_CONTENT_TYPE};
