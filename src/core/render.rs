//! Rendering resolved entries into .env lines.

/// Render one resolved entry as a `NAME="value"` line with trailing newline.
pub fn line(name: &str, value: &str) -> String {
    format!("{}={}\n", name, quote(value))
}

/// Wrap a value in double quotes, escaping embedded quotes, backslashes,
/// and control characters so the file can be sourced by a shell or read by
/// a standard dotenv parser.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
