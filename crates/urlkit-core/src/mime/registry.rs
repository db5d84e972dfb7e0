//! Case-insensitive extension → content-type table.

use std::borrow::Cow;
use std::collections::HashMap;

/// Built-in entries loaded by [`MimeRegistry::with_defaults`].
pub const DEFAULT_MIME_TYPES: &[(&str, &str)] = &[
    (".htm", "text/html"),
    (".html", "text/html"),
    (".asp", "text/html"),
    (".txt", "text/plain"),
    (".css", "text/css"),
    (".xml", "text/xml"),
    (".js", "application/x-javascript"),
    (".json", "application/json"),
    (".gif", "image/gif"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".bmp", "image/bmp"),
    (".ico", "image/x-icon"),
    (".svg", "image/svg+xml"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".class", "application/java"),
    (".jar", "application/java"),
    (".wbmp", "image/vnd.wap.wbmp"),
    (".wml", "text/vnd.wap.wml"),
    (".wmls", "text/vnd.wap.wmlscript"),
    (".wmlc", "application/vnd.wap.wmlc"),
    (".wmlsc", "application/vnd.wap.wmlscriptc"),
    (".pdf", "application/pdf"),
    (".ps", "application/postscript"),
    (".eps", "application/postscript"),
    (".rtf", "application/rtf"),
    (".doc", "application/msword"),
    (".xls", "application/vnd.ms-excel"),
    (".ppt", "application/vnd.ms-powerpoint"),
    (".bin", "application/octet-stream"),
    (".exe", "application/octet-stream"),
    (".zip", "application/zip"),
    (".gz", "application/x-gzip"),
    (".tar", "application/x-tar"),
    (".tgz", "application/x-compressed"),
    (".swf", "application/x-shockwave-flash"),
    (".au", "audio/basic"),
    (".snd", "audio/basic"),
    (".mid", "audio/midi"),
    (".midi", "audio/midi"),
    (".mp3", "audio/mpeg"),
    (".wav", "audio/x-wav"),
    (".avi", "video/x-msvideo"),
    (".mov", "video/quicktime"),
    (".qt", "video/quicktime"),
    (".mpg", "video/mpeg"),
    (".mpeg", "video/mpeg"),
    (".mp4", "video/mp4"),
];

/// Extension → content-type table. Keys are stored lowercase with a leading
/// dot; lookups only lowercase the query key and then match exactly.
#[derive(Debug, Clone, Default)]
pub struct MimeRegistry {
    entries: HashMap<String, String>,
}

impl MimeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with [`DEFAULT_MIME_TYPES`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.extend(DEFAULT_MIME_TYPES.iter().copied());
        registry
    }

    /// Adds or replaces an entry, returning the previous content type.
    pub fn insert(&mut self, extension: &str, content_type: &str) -> Option<String> {
        let key = entry_key(extension);
        self.entries.insert(key, content_type.to_string())
    }

    /// Content type registered for `extension`, compared case-insensitively.
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.entries
            .get(&*lookup_key(extension))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by extension.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        out.sort_unstable();
        out
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for MimeRegistry {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (ext, content_type) in iter {
            self.insert(ext.as_ref(), content_type.as_ref());
        }
    }
}

/// Key for a configured entry: trimmed, dot-prefixed, lowercase.
fn entry_key(extension: &str) -> String {
    let trimmed = extension.trim();
    let mut key = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('.') {
        key.push('.');
    }
    key.push_str(trimmed);
    key.make_ascii_lowercase();
    key
}

/// Key for a lookup: lowercase only; borrows when already lowercase.
fn lookup_key(extension: &str) -> Cow<'_, str> {
    if extension.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(extension.to_ascii_lowercase())
    } else {
        Cow::Borrowed(extension)
    }
}
