pub mod config_ops;
pub mod numeral_ops;
pub mod translit_ops;

use std::fmt::Write;

/// Render Private Use Area chars as `<U+XXXX>` so ligatures and numeral
/// markers stay readable in a terminal without the Umwero font.
pub fn escape_pua(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if umwero_core::unicode::is_pua(c) {
            let _ = write!(out, "<U+{:04X}>", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}

/// Inverse of [`escape_pua`]. Malformed escapes are kept as typed.
pub fn unescape_pua(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("<U+") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 3..];
        let decoded = tail.find('>').and_then(|end| {
            let c = u32::from_str_radix(&tail[..end], 16)
                .ok()
                .and_then(char::from_u32)?;
            Some((c, end))
        });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str("<U+");
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
