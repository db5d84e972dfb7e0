//! Backing buffer for a single parse.
//!
//! Layout: `[decoded url] NUL [host copy] NUL [port text] NUL`. Capacity is
//! reserved once, before decoding, and the buffer never grows past it.

use super::error::ParseError;
use std::fmt::Write as _;
use std::ops::Range;

/// Maximum number of characters kept for a port.
pub const MAX_PORT_LEN: usize = 10;

/// Capacity needed to parse a URL of `url_len` bytes without reallocating.
///
/// Room for the decoded URL (never longer than the input), a host copy (never
/// longer than the input), the port text and one terminator for each.
pub fn required_capacity(url_len: usize) -> usize {
    url_len.saturating_mul(2).saturating_add(MAX_PORT_LEN + 3)
}

/// A field of a parse result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Field {
    /// Static default; never written through.
    Default(&'static str),
    /// Byte range into the backing buffer.
    Span(Range<usize>),
}

impl Field {
    pub(crate) fn resolve<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Field::Default(s) => s,
            Field::Span(range) => &text[range.clone()],
        }
    }
}

#[derive(Debug)]
pub(crate) struct BackingBuffer {
    text: String,
    reserved: usize,
}

impl BackingBuffer {
    /// Reserves the full buffer for a URL of `url_len` bytes.
    pub(crate) fn for_url_len(url_len: usize) -> Result<Self, ParseError> {
        let requested = required_capacity(url_len);
        let mut text = String::new();
        text.try_reserve_exact(requested)
            .map_err(|source| ParseError::Allocation { requested, source })?;
        Ok(Self {
            reserved: text.capacity(),
            text,
        })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn as_mut_str(&mut self) -> &mut str {
        &mut self.text
    }

    /// Runs `write` against the buffer tail, terminates what it wrote and
    /// returns its span.
    pub(crate) fn append_terminated(&mut self, write: impl FnOnce(&mut String)) -> Range<usize> {
        let start = self.text.len();
        write(&mut self.text);
        let end = self.text.len();
        self.text.push('\0');
        self.check_bounds();
        start..end
    }

    /// Copies an earlier region of the buffer to the tail, at most `max_len`
    /// bytes (cut back to a char boundary), and terminates the copy.
    ///
    /// `src` is a bounded view: the source is never terminated or restored.
    pub(crate) fn copy_terminated(&mut self, src: Range<usize>, max_len: usize) -> Range<usize> {
        let mut take = src.len().min(max_len);
        while take > 0 && !self.text.is_char_boundary(src.start + take) {
            take -= 1;
        }
        let start = self.text.len();
        self.text.extend_from_within(src.start..src.start + take);
        let end = self.text.len();
        self.text.push('\0');
        self.check_bounds();
        start..end
    }

    /// Writes the decimal port number to the tail and terminates it.
    pub(crate) fn push_port(&mut self, port: u16) -> Range<usize> {
        self.append_terminated(|text| {
            // Writing into a String cannot fail.
            let _ = write!(text, "{}", port);
        })
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }

    fn check_bounds(&self) {
        debug_assert!(
            self.text.len() <= self.reserved && self.text.capacity() == self.reserved,
            "URL buffer outgrew its reservation: len={} reserved={}",
            self.text.len(),
            self.reserved
        );
    }
}
