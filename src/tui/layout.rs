//! Display-width measurement and alignment
//!
//! Terminal columns are not characters: emoji and East-Asian wide characters
//! take two columns, combining marks take none, and color escape sequences
//! take none at all. Everything that lines up text in a box goes through
//! [`measure_width`].

use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Horizontal alignment inside a padded field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Remove ANSI escape sequences (CSI, OSC and two-byte escapes)
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESC {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters and intermediates up to a final byte in @..~
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ESC \
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == BEL {
                        break;
                    }
                    if c == ESC {
                        if chars.peek() == Some(&'\\') {
                            chars.next();
                        }
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    out
}

/// Number of terminal columns `text` occupies
pub fn measure_width(text: &str) -> usize {
    if text.contains(ESC) {
        UnicodeWidthStr::width(strip_ansi(text).as_str())
    } else {
        UnicodeWidthStr::width(text)
    }
}

/// Pad `text` with spaces up to `width` columns. Never truncates.
pub fn pad_to_width(text: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(measure_width(text));
    if padding == 0 {
        return text.to_string();
    }

    match align {
        Align::Left => format!("{}{}", text, " ".repeat(padding)),
        Align::Right => format!("{}{}", " ".repeat(padding), text),
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
        }
    }
}
