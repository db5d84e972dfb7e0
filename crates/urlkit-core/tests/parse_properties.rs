//! Properties that must hold for every input, checked over an exhaustive set
//! of short URLs built from delimiter-heavy pieces.

mod common;

use common::inputs::{all_inputs, ALPHABET};
use urlkit_core::url_model::{self, required_capacity, MAX_PORT_LEN};

const PORT: u16 = 65535;

#[test]
fn every_input_parses_within_its_reservation() {
    for url in all_inputs(ALPHABET, 4) {
        let parsed = url_model::parse(&url, &PORT).unwrap();
        let required = required_capacity(url.len());
        assert!(parsed.capacity() >= required, "{url:?}");
        assert!(parsed.buffer().len() <= required, "{url:?} overran its buffer");
        assert!(parsed.port().len() <= MAX_PORT_LEN, "{url:?}");
    }
}

#[test]
fn fields_never_contain_their_delimiters() {
    for url in all_inputs(ALPHABET, 4) {
        let parsed = url_model::parse(&url, &PORT).unwrap();
        assert!(!parsed.path().contains('?'), "{url:?} path {:?}", parsed.path());
        if !url.contains('?') {
            assert!(!parsed.path().contains('#'), "{url:?} path {:?}", parsed.path());
        }
        assert!(!parsed.query().contains('#'), "{url:?} query {:?}", parsed.query());
        assert!(!parsed.host().contains([':', '/', '?', '#']), "{url:?}");
        assert!(parsed.extension().starts_with('.'), "{url:?}");
        assert!(!parsed.extension().contains(['/', '\\']), "{url:?}");
        assert_eq!(parsed.tag(), "");
    }
}

#[test]
fn reparsing_a_path_is_idempotent() {
    // Decoding is not idempotent, so leave out the escape characters. A '#'
    // ahead of the query stays in the path and would end it on a re-parse.
    let alphabet: Vec<&str> = ALPHABET
        .iter()
        .copied()
        .filter(|p| !matches!(*p, "%" | "+" | "#"))
        .collect();
    for url in all_inputs(&alphabet, 4) {
        let first = url_model::parse(&url, &PORT).unwrap();
        let second = url_model::parse(first.path(), &PORT).unwrap();
        assert_eq!(first.path(), second.path(), "{url:?}");
    }
}

#[test]
fn explicit_extension_is_a_suffix_of_the_path() {
    for url in all_inputs(ALPHABET, 4) {
        let parsed = url_model::parse(&url, &PORT).unwrap();
        if parsed.has_explicit_extension() {
            assert!(parsed.path().ends_with(parsed.extension()), "{url:?}");
        }
    }
}

#[test]
fn nothing_after_a_decoded_nul_is_reported() {
    for url in all_inputs(ALPHABET, 3) {
        let hidden = format!("{url}%00.txt?q#f");
        let parsed = url_model::parse(&hidden, &PORT).unwrap();
        let plain = url_model::parse(&url, &PORT).unwrap();
        assert_eq!(parsed.parts(), plain.parts(), "{hidden:?}");
    }
}
