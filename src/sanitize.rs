//! Input sanitization helpers
//!
//! Best-effort cleanup applied to caller-supplied values (redirect URIs,
//! authorization codes, tokens) before they are embedded in URLs or
//! request bodies. Malformed input is silently cleaned, never rejected;
//! these functions are not validators. All of them are pure.

/// Characters removed from URLs before any other processing.
///
/// Covers the ASCII quotes plus the acute and diaeresis accents that
/// smart-quote keyboards substitute for them.
pub const URL_FORBIDDEN: [char; 5] = ['"', '\'', '`', '´', '¨'];

/// Remove `<...>` tag sequences.
///
/// Everything between `<` and the next `>` is dropped, tags never nest,
/// and an unterminated `<` swallows the remainder of the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Clean a free-text value (authorization code, access token, client ID):
/// tag sequences and control characters are removed.
pub fn sanitize_text(input: &str) -> String {
    strip_tags(input).chars().filter(|c| !c.is_control()).collect()
}

/// Clean a URL value: trim whitespace, drop the characters in
/// `URL_FORBIDDEN`, remove tag sequences, then keep only characters
/// permitted in a URL.
pub fn sanitize_url(input: &str) -> String {
    let unquoted: String = input
        .trim()
        .chars()
        .filter(|c| !URL_FORBIDDEN.contains(c))
        .collect();
    strip_tags(&unquoted).chars().filter(|&c| is_url_char(c)).collect()
}

/// Characters a URL may carry: ASCII alphanumerics plus the punctuation
/// URLs use for structure, userinfo, queries, and fragments.
fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '$' | '-'
                | '_'
                | '.'
                | '+'
                | '!'
                | '*'
                | '\''
                | '('
                | ')'
                | ','
                | '{'
                | '}'
                | '|'
                | '\\'
                | '^'
                | '~'
                | '['
                | ']'
                | '`'
                | '<'
                | '>'
                | '#'
                | '%'
                | '"'
                | ';'
                | '/'
                | '?'
                | ':'
                | '@'
                | '&'
                | '='
        )
}
