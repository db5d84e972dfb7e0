//! Extension-validity scan.
//!
//! A path carries an extension only when the text from its last `.` is a run
//! of non-separator characters followed by nothing but `/` or `\` separators.
//! `file.asp/` therefore still reports `.asp`, while `file.asp/x` reports
//! nothing, so an extension cannot hide behind trailing path segments.

const SEPARATORS: &[char] = &['/', '\\'];

/// Locates the extension of `path`.
///
/// Returns the byte range of the extension (including its leading dot), or
/// `None` if the path has no dot or the text after the dot fails the scan.
pub fn split_extension(path: &str) -> Option<std::ops::Range<usize>> {
    let dot = path.rfind('.')?;
    let candidate = &path[dot..];
    let run = candidate.find(SEPARATORS).unwrap_or(candidate.len());
    let trailing = &candidate[run..];
    if trailing.trim_start_matches(SEPARATORS).is_empty() {
        Some(dot..dot + run)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(path: &str) -> Option<&str> {
        split_extension(path).map(|r| &path[r])
    }

    #[test]
    fn plain_extension() {
        assert_eq!(ext("/index.htm"), Some(".htm"));
        assert_eq!(ext("/a/b/archive.tar.gz"), Some(".gz"));
    }

    #[test]
    fn trailing_separators_are_allowed() {
        assert_eq!(ext("/file.asp/"), Some(".asp"));
        assert_eq!(ext("/file.asp\\"), Some(".asp"));
        assert_eq!(ext("/file.asp//\\/"), Some(".asp"));
    }

    #[test]
    fn garbage_in_the_dot_run_is_part_of_the_extension() {
        assert_eq!(ext("/file.aspXXX/"), Some(".aspXXX"));
        assert_ne!(ext("/file.aspXXX/"), Some(".asp"));
    }

    #[test]
    fn text_after_separators_rejects() {
        assert_eq!(ext("/file.asp/x"), None);
        assert_eq!(ext("/dir.d/file"), None);
        assert_eq!(ext("/a.b\\c"), None);
        assert_eq!(ext("/file.asp/ "), None);
    }

    #[test]
    fn no_dot() {
        assert_eq!(ext("/just/a/path"), None);
        assert_eq!(ext(""), None);
    }

    #[test]
    fn bare_dot() {
        assert_eq!(ext("/x./"), Some("."));
        assert_eq!(ext("/a/.."), Some("."));
    }
}
