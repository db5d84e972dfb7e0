//! URL → content type.

use super::registry::MimeRegistry;
use crate::url_model::{self, PortSource};

/// Content type used whenever a URL cannot be classified.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Classifies URLs by extension against a borrowed registry.
///
/// Never fails: empty URLs, parse failures and unknown extensions all
/// resolve to [`DEFAULT_CONTENT_TYPE`].
#[derive(Debug)]
pub struct MimeResolver<'a, P: ?Sized> {
    registry: &'a MimeRegistry,
    ports: &'a P,
}

impl<'a, P: PortSource + ?Sized> MimeResolver<'a, P> {
    pub fn new(registry: &'a MimeRegistry, ports: &'a P) -> Self {
        Self { registry, ports }
    }

    pub fn registry(&self) -> &'a MimeRegistry {
        self.registry
    }

    /// Writes the content type for `url` into `out` and returns it.
    ///
    /// The result is truncated to fit (on a char boundary) and followed by a
    /// NUL byte, so at most `out.len() - 1` bytes of text are written. An
    /// empty `out` yields an empty result.
    pub fn url_type<'b>(&self, url: &str, out: &'b mut [u8]) -> &'b str {
        debug_assert!(!out.is_empty(), "url_type needs a non-empty output buffer");
        self.with_content_type(url, |content_type| write_terminated(out, content_type))
    }

    /// Content type for `url` as an owned string, without truncation.
    pub fn content_type(&self, url: &str) -> String {
        self.with_content_type(url, str::to_string)
    }

    fn with_content_type<R>(&self, url: &str, f: impl FnOnce(&str) -> R) -> R {
        if url.is_empty() {
            return f(DEFAULT_CONTENT_TYPE);
        }
        let parsed = match url_model::parse(url, self.ports) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "url type falls back to {}", DEFAULT_CONTENT_TYPE);
                return f(DEFAULT_CONTENT_TYPE);
            }
        };
        // Registry lookup lowercases the extension.
        match self.registry.lookup(parsed.extension()) {
            Some(content_type) => f(content_type),
            None => {
                tracing::debug!(extension = parsed.extension(), "no mime type registered");
                f(DEFAULT_CONTENT_TYPE)
            }
        }
    }
}

/// Copies as much of `value` as fits before a trailing NUL.
fn write_terminated<'b>(out: &'b mut [u8], value: &str) -> &'b str {
    let Some(room) = out.len().checked_sub(1) else {
        return "";
    };
    let mut take = value.len().min(room);
    while take > 0 && !value.is_char_boundary(take) {
        take -= 1;
    }
    out[..take].copy_from_slice(&value.as_bytes()[..take]);
    out[take] = 0;
    std::str::from_utf8(&out[..take]).unwrap_or_default()
}
