//! Line-level CSV tokenization
//!
//! Splits a single line on commas while keeping quoted spans intact, and
//! cleans individual tokens.

/// Normalize line endings to `\n`, collapse doubled quotes and trim the text
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\"\"", "\"")
        .trim()
        .to_string()
}

/// Split a line on commas, treating quoted spans as part of one token
///
/// Quotes are kept in the returned tokens; use [`clean_token`] to strip them.
/// A quote with no closing quote later in the line does not open a span, so
/// the commas after it still split. Empty fields produce empty tokens, so
/// `"a,,c"` yields three tokens.
pub fn split_line(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' if in_quotes => in_quotes = false,
            '"' if line[i + 1..].contains('"') => in_quotes = true,
            ',' if !in_quotes => {
                tokens.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&line[start..]);

    tokens
}

/// Strip surrounding whitespace and one leading and one trailing quote
pub fn clean_token(token: &str) -> String {
    let trimmed = token.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Split and clean a line in one step
pub fn tokenize(line: &str) -> Vec<String> {
    split_line(line).into_iter().map(clean_token).collect()
}
