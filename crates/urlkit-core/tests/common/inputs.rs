//! Exhaustive generators of short adversarial URLs.

/// Characters that drive every branch of the splitter.
pub const ALPHABET: &[&str] = &[
    "http://", "h", ":", "1", "/", "\\", "?", "#", ".", "%", "2", "F", "+", "é",
];

/// Every concatenation of up to `max_len` alphabet pieces, including "".
pub fn all_inputs(alphabet: &[&str], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for piece in alphabet {
                next.push(format!("{prefix}{piece}"));
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}
