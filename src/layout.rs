//! Time layout rendering.
//!
//! Folder and file name layouts in the configuration use a small token
//! dialect instead of strftime verbs:
//!
//! | Token  | Meaning          | Example |
//! |--------|------------------|---------|
//! | `YYYY` | four-digit year  | 2023    |
//! | `YY`   | two-digit year   | 23      |
//! | `MM`   | month            | 05      |
//! | `DD`   | day of month     | 01      |
//! | `HH`   | hour (24h)       | 14      |
//! | `mm`   | minute           | 30      |
//! | `ss`   | second           | 52      |
//!
//! Any other character is copied through literally, so `"YYYY/MM"` renders
//! as `2023/05` and `"YYYYMMDD_HHmmss"` as `20230501_143052`.

use chrono::{DateTime, Local};

/// Token table, longest tokens first so `YYYY` wins over `YY`.
const TOKENS: [(&str, &str); 7] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translate a layout string from the token dialect into a chrono format
/// string. Literal `%` characters are escaped so they survive formatting.
pub fn to_chrono_format(layout: &str) -> String {
    let mut format = String::with_capacity(layout.len());
    let mut rest = layout;

    'outer: while !rest.is_empty() {
        for (token, verb) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                format.push_str(verb);
                rest = tail;
                continue 'outer;
            }
        }

        let ch = rest.chars().next().unwrap_or_default();
        if ch == '%' {
            format.push_str("%%");
        } else {
            format.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    format
}

/// Render a timestamp with a token-dialect layout.
pub fn render(time: &DateTime<Local>, layout: &str) -> String {
    time.format(&to_chrono_format(layout)).to_string()
}
