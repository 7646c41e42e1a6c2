//! Escaping of untrusted text before it reaches rendered output

/// Escape text for interpolation into HTML markup, attributes included.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make text safe to print into the terminal UI.
///
/// Control characters (ESC in particular) could otherwise drive the terminal;
/// line breaks and tabs collapse to a single space.
pub fn sanitize_terminal(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
