//! Cell and header conventions shared by the CSV and Excel loaders.

use std::collections::HashSet;

use crate::types::Value;

/// Tokens read as a missing value by default (compared after trimming, case-sensitive).
pub const DEFAULT_NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// [`DEFAULT_NULL_TOKENS`] as owned strings.
pub fn default_null_tokens() -> Vec<String> {
    DEFAULT_NULL_TOKENS.iter().map(|s| s.to_string()).collect()
}

/// Convert a raw text cell into a [`Value`].
///
/// The cell is trimmed; null tokens become [`Value::Null`]; otherwise the first of
/// `Int64`, `Float64`, `Bool` (`true`/`false`, any case) that parses wins, falling back to `Utf8`.
pub fn text_cell(raw: &str, null_tokens: &[String]) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() || null_tokens.iter().any(|t| t == trimmed) {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int64(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float64(f);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::Utf8(trimmed.to_owned())
}

/// Normalize raw header cells into unique column names.
///
/// - Names are trimmed.
/// - A blank header at position `i` becomes `Unnamed: i`.
/// - Repeats of a name get `.1`, `.2`, … suffixes in order of appearance.
pub fn header_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.as_ref().trim();
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_owned()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::with_capacity(base.len());
    let mut out = Vec::with_capacity(base.len());
    for name in base {
        let mut candidate = name.clone();
        let mut n = 1;
        while taken.contains(&candidate) {
            candidate = format!("{name}.{n}");
            n += 1;
        }
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
