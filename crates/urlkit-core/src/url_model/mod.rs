//! URL decomposition into scheme, host, port, path, query, tag and extension.
//!
//! A parse percent-decodes the URL once into a single owned buffer that is
//! sized up front for the decoded text plus separate host and port copies.
//! Every field of the result is either a span into that buffer or one of the
//! static defaults below, so the result owns exactly one allocation.

mod buffer;
mod decode;
mod error;
mod extension;
mod parse;
mod port;

pub use buffer::{required_capacity, MAX_PORT_LEN};
pub use decode::decode_url_into;
pub use error::ParseError;
pub use extension::split_extension;
pub use parse::{parse, ParsedUrl, UrlParts};
pub use port::PortSource;

/// Scheme reported when the URL has no `http://` prefix.
pub const DEFAULT_SCHEME: &str = "http";
/// Host reported for relative URLs.
pub const DEFAULT_HOST: &str = "localhost";
/// Path reported when an absolute URL has no path component.
pub const DEFAULT_PATH: &str = "/";
/// Extension reported when the path carries no valid extension.
pub const DEFAULT_EXTENSION: &str = ".htm";
