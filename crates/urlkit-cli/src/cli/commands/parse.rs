//! Parse command: print every field of a decomposed URL.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use urlkit_core::url_model::{self, UrlParts};

pub fn run_parse(url: &str, port: u16, json: bool) -> Result<()> {
    let parsed = url_model::parse(url, &port).with_context(|| format!("parse {}", url))?;
    let parts = parsed.parts();
    tracing::debug!(?parts, "parsed url");
    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else {
        print!("{}", format_parts(&parts));
    }
    Ok(())
}

/// One `name: value` line per field, names right-aligned.
pub(crate) fn format_parts(parts: &UrlParts<'_>) -> String {
    let fields = [
        ("scheme", parts.scheme),
        ("host", parts.host),
        ("port", parts.port),
        ("path", parts.path),
        ("query", parts.query),
        ("tag", parts.tag),
        ("extension", parts.extension),
    ];
    let mut out = String::new();
    for (name, value) in fields {
        let _ = writeln!(out, "{:>9}: {}", name, value);
    }
    out
}
