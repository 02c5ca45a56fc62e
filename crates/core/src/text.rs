//! Plain-text projection of catalog copy.
//!
//! Topic and phase descriptions arrive with embedded HTML-ish markup. The
//! original markup is kept on the model for rich rendering; list rows and
//! summaries want a flat string.

/// Strips HTML-like tags, decodes common entities, and collapses
/// whitespace runs.
///
/// Tags act as separators: `<p>a</p><p>b</p>` becomes `"a b"`. An
/// unterminated tag swallows the rest of the input. An unterminated
/// entity is emitted literally; an unknown terminated entity becomes a
/// space, matching how the catalog's own renderer degrades.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut last_was_space = true;

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                }
                push_space(&mut out, &mut last_was_space);
            }
            '&' => {
                let mut name = String::new();
                let mut terminated = false;
                while let Some(&next) = chars.peek() {
                    if next == ';' {
                        chars.next();
                        terminated = true;
                        break;
                    }
                    if name.len() >= 8 || !(next.is_ascii_alphanumeric() || next == '#') {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                if terminated {
                    match decode_entity(&name) {
                        Some(decoded) if decoded.is_whitespace() => {
                            push_space(&mut out, &mut last_was_space);
                        }
                        Some(decoded) => {
                            out.push(decoded);
                            last_was_space = false;
                        }
                        None => push_space(&mut out, &mut last_was_space),
                    }
                } else {
                    out.push('&');
                    out.push_str(&name);
                    last_was_space = false;
                }
            }
            c if c.is_whitespace() => push_space(&mut out, &mut last_was_space),
            c => {
                out.push(c);
                last_was_space = false;
            }
        }
    }

    out.trim_end().to_owned()
}

fn push_space(out: &mut String, last_was_space: &mut bool) {
    if !*last_was_space {
        out.push(' ');
        *last_was_space = true;
    }
}

fn decode_entity(name: &str) -> Option<char> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" | "ldquo" | "rdquo" => Some('"'),
        "apos" | "lsquo" | "rsquo" => Some('\''),
        "nbsp" => Some(' '),
        "ndash" | "mdash" => Some('-'),
        "hellip" => Some('…'),
        _ => decode_numeric_entity(&lower),
    }
}

fn decode_numeric_entity(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x') {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse().ok()?
    };
    char::from_u32(code)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
