use crate::alphabet::{self, Symbol};
use crate::error::ScResult;
use std::fs;
use std::path::Path;

/// Reduces raw text to the 27-symbol alphabet: each line is trimmed,
/// lowercased and filtered, then appended with a single trailing space.
/// Leading and trailing whitespace of the whole result is stripped.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for line in raw.lines() {
        let line = line.trim().to_lowercase();
        out.extend(
            line.chars()
                .filter(|c| c.is_ascii_lowercase() || *c == ' '),
        );
        out.push(' ');
    }
    out.trim().to_string()
}

/// Loads and encodes a reference corpus. An unreadable file surfaces as an
/// IO error before any model estimation happens. A short or even empty
/// corpus is NOT an error; it just yields a weak, smoothing-only model.
pub fn load(path: impl AsRef<Path>) -> ScResult<Vec<Symbol>> {
    let raw = fs::read_to_string(path)?;
    alphabet::encode(&normalize(&raw))
}
