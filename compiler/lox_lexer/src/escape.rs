//! Escape cooking for string literal bodies.

/// Convert the raw text between the quotes into the string's value.
///
/// Recognized escapes: `\"`, `\\`, `\n`, `\t`, `\r`. Any other backslash
/// sequence is kept verbatim, backslash included.
pub(crate) fn cook_string(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
