//! Theme-aware JSON highlighting
//!
//! Parsed values are rendered by a recursive walk with one color per value
//! kind. Text that does not parse is handed to syntect instead, so a model
//! that returns almost-JSON still gets readable output.

use serde_json::Value;
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};
use tracing::debug;

use super::theme::{paint, Theme};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const FALLBACK_THEME: &str = "base16-ocean.dark";
const RESET: &str = "\x1b[0m";

/// Render a parsed value, indented two spaces per level
pub fn render_json(value: &Value, theme: &Theme, indent: usize) -> String {
    let pad = "  ".repeat(indent);

    match value {
        Value::Null => paint("null", theme.muted),
        Value::Bool(b) => paint(b, theme.warning),
        Value::Number(n) => paint(n, theme.accent),
        Value::String(s) => paint(quote(s), theme.success),
        Value::Array(items) if items.is_empty() => paint("[]", theme.primary),
        Value::Object(map) if map.is_empty() => paint("{}", theme.primary),
        Value::Array(items) => {
            let body: Vec<String> = items
                .iter()
                .map(|item| format!("{}  {}", pad, render_json(item, theme, indent + 1)))
                .collect();
            enclose('[', ']', &body, &pad, theme)
        }
        Value::Object(map) => {
            let body: Vec<String> = map
                .iter()
                .map(|(key, item)| {
                    format!(
                        "{}  {}: {}",
                        pad,
                        paint(quote(key), theme.secondary),
                        render_json(item, theme, indent + 1)
                    )
                })
                .collect();
            enclose('{', '}', &body, &pad, theme)
        }
    }
}

/// Highlight model output, parsing it as JSON when possible
pub fn render_json_text(text: &str, theme: &Theme) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => render_json(&value, theme, 0),
        Err(e) => {
            debug!("Generated text is not valid JSON ({}), using plain highlighting", e);
            highlight_raw(text)
        }
    }
}

/// Generic syntax highlighting for text that failed to parse
pub fn highlight_raw(text: &str) -> String {
    let Some(syntax_theme) = THEME_SET.themes.get(FALLBACK_THEME) else {
        return text.to_string();
    };
    let syntax = SYNTAX_SET
        .find_syntax_by_extension("json")
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, syntax_theme);
    let mut out = String::with_capacity(text.len() * 2);
    for line in LinesWithEndings::from(text) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
            Err(e) => {
                debug!("Highlighter failed: {}", e);
                out.push_str(line);
            }
        }
    }
    out.push_str(RESET);
    out
}

fn enclose(open: char, close: char, body: &[String], pad: &str, theme: &Theme) -> String {
    format!(
        "{}\n{}\n{}{}",
        paint(open, theme.primary),
        body.join(",\n"),
        pad,
        paint(close, theme.primary)
    )
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::strip_ansi;
    use crate::tui::theme::find_theme;
    use proptest::prelude::*;
    use serde_json::json;

    fn theme() -> &'static Theme {
        find_theme("cyberpunk").unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(strip_ansi(&render_json(&json!(null), theme(), 0)), "null");
        assert_eq!(strip_ansi(&render_json(&json!(true), theme(), 0)), "true");
        assert_eq!(strip_ansi(&render_json(&json!(0.7), theme(), 0)), "0.7");
        assert_eq!(strip_ansi(&render_json(&json!("hi"), theme(), 0)), "\"hi\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(strip_ansi(&render_json(&json!([]), theme(), 3)), "[]");
        assert_eq!(strip_ansi(&render_json(&json!({}), theme(), 3)), "{}");
    }

    #[test]
    fn test_one_key_object() {
        let out = render_json_text(r#"{"task":"x"}"#, theme());
        assert_eq!(strip_ansi(&out), "{\n  \"task\": \"x\"\n}");
    }

    #[test]
    fn test_nested_layout() {
        let value = json!({"a": [1, {"b": null}], "c": {}});
        let expected = "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ],\n  \"c\": {}\n}";
        assert_eq!(strip_ansi(&render_json(&value, theme(), 0)), expected);
    }

    #[test]
    fn test_key_order_is_kept() {
        let out = render_json_text(r#"{"zeta":1,"alpha":2}"#, theme());
        let plain = strip_ansi(&out);
        assert!(plain.find("zeta").unwrap() < plain.find("alpha").unwrap());
    }

    #[test]
    fn test_strings_are_escaped() {
        let out = render_json(&json!("say \"hi\"\n"), theme(), 0);
        assert_eq!(strip_ansi(&out), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let raw = "Sure! {\"task\": \"x\",}\nthanks";
        let out = render_json_text(raw, theme());
        assert_eq!(strip_ansi(&out), raw);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            (-1000i32..1000).prop_map(|n| Value::from(f64::from(n) / 8.0)),
            ".{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z_\"\\\\ ]{0,8}", inner), 0..6)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn stripped_output_reparses(value in arb_json()) {
            let rendered = render_json(&value, theme(), 0);
            let reparsed: Value = serde_json::from_str(&strip_ansi(&rendered)).unwrap();
            prop_assert_eq!(reparsed, value);
        }
    }
}
