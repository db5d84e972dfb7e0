//! Single-pass URL splitting over one backing buffer.

use super::buffer::{BackingBuffer, Field, MAX_PORT_LEN};
use super::decode::decode_url_into;
use super::error::ParseError;
use super::extension::split_extension;
use super::port::PortSource;
use super::{DEFAULT_EXTENSION, DEFAULT_HOST, DEFAULT_PATH, DEFAULT_SCHEME};
use serde::Serialize;
use std::ops::Range;

const HTTP_PREFIX: &str = "http://";

/// A decomposed URL.
///
/// Owns the backing buffer; every accessor returns a view into it (or a
/// static default), so the views live exactly as long as the `ParsedUrl`.
#[derive(Debug)]
pub struct ParsedUrl {
    text: String,
    scheme: Field,
    host: Field,
    port: Field,
    path: Field,
    query: Field,
    tag: Field,
    extension: Field,
}

/// Borrowed snapshot of every field of a [`ParsedUrl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub port: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub tag: &'a str,
    pub extension: &'a str,
}

impl ParsedUrl {
    pub fn scheme(&self) -> &str {
        self.scheme.resolve(&self.text)
    }

    pub fn host(&self) -> &str {
        self.host.resolve(&self.text)
    }

    /// Explicit port from the URL, or the listen port at parse time.
    pub fn port(&self) -> &str {
        self.port.resolve(&self.text)
    }

    pub fn path(&self) -> &str {
        self.path.resolve(&self.text)
    }

    /// Text after `?`, up to any `#`. Empty if there is no query.
    pub fn query(&self) -> &str {
        self.query.resolve(&self.text)
    }

    /// Reserved for fragment-derived routing data; always empty. Fragment
    /// text only delimits the path or query and is otherwise discarded.
    pub fn tag(&self) -> &str {
        self.tag.resolve(&self.text)
    }

    /// File extension including its dot, or `.htm` when the path has none.
    pub fn extension(&self) -> &str {
        self.extension.resolve(&self.text)
    }

    /// Whether the extension came from the path rather than the default.
    pub fn has_explicit_extension(&self) -> bool {
        matches!(self.extension, Field::Span(_))
    }

    pub fn parts(&self) -> UrlParts<'_> {
        UrlParts {
            scheme: self.scheme(),
            host: self.host(),
            port: self.port(),
            path: self.path(),
            query: self.query(),
            tag: self.tag(),
            extension: self.extension(),
        }
    }

    /// Raw backing buffer, terminators included.
    pub fn buffer(&self) -> &str {
        &self.text
    }

    /// Capacity the backing buffer was allocated with.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }
}

/// Parses `url`, substituting `ports.listen_port()` when it names no port.
///
/// `url` is percent-decoded first and all splitting works on the decoded
/// copy. The only failure is being unable to allocate the backing buffer.
///
/// # Examples
///
/// - `parse("http://host:8080/path?q=1#frag", &80)` → host `host`, port
///   `8080`, path `/path`, query `q=1`
/// - `parse("/just/a/path", &80)` → host `localhost`, port `80`
pub fn parse<P: PortSource + ?Sized>(url: &str, ports: &P) -> Result<ParsedUrl, ParseError> {
    let mut buf = BackingBuffer::for_url_len(url.len())?;
    let mut decoded = buf.append_terminated(|text| decode_url_into(text, url));
    // A decoded NUL ends the URL; nothing after it is split or scanned.
    if let Some(nul) = buf.as_str()[decoded.clone()].find('\0') {
        decoded.end = decoded.start + nul;
    }
    tracing::trace!(url, decoded = &buf.as_str()[decoded.clone()], "parsing url");

    let mut scheme = Field::Default(DEFAULT_SCHEME);
    let mut host = Field::Default(DEFAULT_HOST);
    let mut port = None;
    let mut path = Field::Default(DEFAULT_PATH);
    let mut query = Field::Default("");
    let mut extension = Field::Default(DEFAULT_EXTENSION);

    // Start of the text still to be split, and whether it belongs to the path.
    let mut tail = decoded.start;
    let mut in_path = true;

    if buf.as_str()[decoded.clone()].starts_with(HTTP_PREFIX) {
        scheme = Field::Span(decoded.start..decoded.start + DEFAULT_SCHEME.len());
        let authority_start = decoded.start + HTTP_PREFIX.len();
        let authority = authority_start
            + buf.as_str()[authority_start..decoded.end]
                .find(['/', '?', '#'])
                .unwrap_or(decoded.end - authority_start);
        let (host_span, port_span) = split_authority(buf.as_str(), authority_start..authority);

        host = Field::Span(buf.copy_terminated(host_span, usize::MAX));
        if let Some(port_span) = port_span {
            port = Some(buf.copy_terminated(port_span, MAX_PORT_LEN));
        }

        tail = authority;
        in_path = buf.as_str()[authority..decoded.end].starts_with('/');
        if in_path {
            path = Field::Span(authority..decoded.end);
        }
    } else {
        path = Field::Span(decoded.clone());
    }

    // The first '?' splits path from query; a '#' then ends the query, or
    // the path when there is no query. A '#' before the '?' stays in the path.
    match buf.as_str()[tail..decoded.end].find('?') {
        Some(i) => {
            let mark = tail + i;
            if in_path {
                path = Field::Span(tail..mark);
            }
            let end = buf.as_str()[mark + 1..decoded.end]
                .find('#')
                .map_or(decoded.end, |h| mark + 1 + h);
            query = Field::Span(mark + 1..end);
        }
        None => {
            let end = buf.as_str()[tail..decoded.end]
                .find('#')
                .map_or(decoded.end, |h| tail + h);
            if in_path {
                path = Field::Span(tail..end);
            }
        }
    }

    if let Field::Span(path_span) = path.clone() {
        let start = path_span.start;
        match split_extension(&buf.as_str()[path_span.clone()]) {
            Some(ext) => {
                let ext = start + ext.start..start + ext.end;
                if cfg!(windows) {
                    buf.as_mut_str()[ext.clone()].make_ascii_lowercase();
                }
                path = Field::Span(start..ext.end);
                extension = Field::Span(ext);
            }
            None => {
                tracing::trace!(path = &buf.as_str()[path_span], "no valid extension");
            }
        }
    }

    let port = match port {
        Some(span) => span,
        None => buf.push_port(ports.listen_port()),
    };

    Ok(ParsedUrl {
        text: buf.into_string(),
        scheme,
        host,
        port: Field::Span(port),
        path,
        query,
        tag: Field::Default(""),
        extension,
    })
}

/// Splits `host[:port]`. The host ends at the first `:`; the port is the text
/// after the last one.
fn split_authority(text: &str, authority: Range<usize>) -> (Range<usize>, Option<Range<usize>>) {
    let slice = &text[authority.clone()];
    match (slice.find(':'), slice.rfind(':')) {
        (Some(first), Some(last)) => (
            authority.start..authority.start + first,
            Some(authority.start + last + 1..authority.end),
        ),
        _ => (authority, None),
    }
}
