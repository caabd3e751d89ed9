// src/store/properties.rs

//! Reader and writer for the flat `key=value` properties format used by
//! Eclipse-style `.prefs` settings files.
//!
//! Parsing is total: malformed escapes are kept literally and reported via
//! `tracing`, never as errors.

use std::collections::BTreeMap;

use tracing::warn;

/// Key written at the top of every settings file. Not part of any namespace.
pub const VERSION_KEY: &str = "eclipse.preferences.version";
pub const VERSION_VALUE: &str = "1";

/// Parse properties text into a sorted key/value map.
///
/// Later duplicates of a key win.
pub fn parse(text: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in logical_lines(text) {
        let (raw_key, raw_value) = split_key_value(&line);
        let key = unescape(raw_key);
        if key.is_empty() && raw_value.is_empty() {
            continue;
        }
        map.insert(key, unescape(raw_value));
    }
    map
}

/// Render `values` as properties text.
///
/// The version entry always comes first, as Eclipse writes it; the other
/// keys follow in sorted order.
pub fn render(values: &BTreeMap<String, String>) -> String {
    let mut out = format!("{VERSION_KEY}={VERSION_VALUE}\n");

    for (key, value) in values.iter().filter(|(k, _)| k.as_str() != VERSION_KEY) {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}

/// Join physical lines into logical ones, dropping blanks and comments.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut physical = text.lines();

    while let Some(line) = physical.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match physical.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        lines.push(logical);
    }

    lines
}

/// A line continues when it ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut sep_is_space = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                sep_is_space = true;
                break;
            }
            _ => {}
        }
    }

    if key_end == line.len() {
        return (line, "");
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if sep_is_space {
        rest = rest.trim_start();
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped;
        }
    } else {
        rest = &rest[1..];
    }
    (key, rest.trim_start())
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut utf16: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_utf16(&mut utf16, &mut out);
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            flush_utf16(&mut utf16, &mut out);
            out.push('\\');
            break;
        };

        if next == 'u' {
            let hex: String = chars.clone().take(4).collect();
            let valid = hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit());
            match valid.then(|| u16::from_str_radix(&hex, 16).ok()).flatten() {
                Some(unit) => {
                    for _ in 0..4 {
                        chars.next();
                    }
                    utf16.push(unit);
                }
                None => {
                    warn!(escape = %format!("\\u{hex}"), "malformed unicode escape in settings file");
                    flush_utf16(&mut utf16, &mut out);
                    out.push_str("\\u");
                }
            }
            continue;
        }

        flush_utf16(&mut utf16, &mut out);
        out.push(match next {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{000C}',
            other => other,
        });
    }

    flush_utf16(&mut utf16, &mut out);
    out
}

fn flush_utf16(units: &mut Vec<u16>, out: &mut String) {
    if !units.is_empty() {
        out.push_str(&String::from_utf16_lossy(units));
        units.clear();
    }
}

fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }

    out
}
