//! Box drawing and other framed blocks
//!
//! Every row produced by [`render_box`] has the same display width, whatever
//! mix of ASCII, emoji or wide characters the content holds.

use super::layout::{measure_width, pad_to_width, Align};
use super::theme::{paint, paint_bold, BorderStyle, Rgb, Theme, GLYPHS};

/// Options for a single [`render_box`] call
#[derive(Debug, Clone)]
pub struct BoxOptions {
    pub title: Option<String>,
    pub border_style: BorderStyle,
    /// Blank rows above/below the content and extra columns on each side
    pub padding: usize,
    pub title_align: Align,
    /// Interior width; widened to fit the content when too small
    pub width: Option<usize>,
    /// Defaults to the theme's primary color
    pub border_color: Option<Rgb>,
    /// Defaults to the theme's accent color
    pub title_color: Option<Rgb>,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            title: None,
            border_style: BorderStyle::Rounded,
            padding: 1,
            title_align: Align::Left,
            width: None,
            border_color: None,
            title_color: None,
        }
    }
}

impl BoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Rgb) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn title_color(mut self, color: Rgb) -> Self {
        self.title_color = Some(color);
        self
    }
}

/// Draw a bordered box around `lines`.
///
/// Lines containing `\n` are split before layout.
pub fn render_box<S: AsRef<str>>(lines: &[S], options: &BoxOptions, theme: &Theme) -> String {
    let lines: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.as_ref().split('\n'))
        .collect();
    let title = options.title.as_deref().filter(|t| !t.is_empty());

    let max_width = lines
        .iter()
        .map(|line| measure_width(line))
        .chain(title.map(measure_width))
        .max()
        .unwrap_or(0);
    let inner = match options.width {
        Some(width) => width.max(max_width),
        None => max_width + options.padding * 2,
    };
    // Horizontal run between the corners: content plus one space each side
    let span = inner + 2;

    let border = options.border_style.chars();
    let border_color = options.border_color.unwrap_or(theme.primary);
    let title_color = options.title_color.unwrap_or(theme.accent);
    let rule = |n: usize| paint(border.horizontal.to_string().repeat(n), border_color);
    let vertical = paint(border.vertical, border_color);

    let mut rows = Vec::with_capacity(lines.len() + options.padding * 2 + 2);

    let top = match title {
        None => rule(span),
        Some(title) => {
            let run = format!(" {} ", title);
            let free = span.saturating_sub(measure_width(&run));
            let left = match options.title_align {
                Align::Left => free.min(1),
                Align::Center => free / 2,
                Align::Right => free - free.min(1),
            };
            format!(
                "{}{}{}",
                rule(left),
                paint(run, title_color),
                rule(free - left)
            )
        }
    };
    rows.push(format!(
        "{}{}{}",
        paint(border.top_left, border_color),
        top,
        paint(border.top_right, border_color)
    ));

    let blank = format!("{}{}{}", vertical, " ".repeat(span), vertical);
    for _ in 0..options.padding {
        rows.push(blank.clone());
    }

    for line in &lines {
        rows.push(format!(
            "{} {} {}",
            vertical,
            pad_to_width(line, inner, Align::Left),
            vertical
        ));
    }

    for _ in 0..options.padding {
        rows.push(blank.clone());
    }

    rows.push(format!(
        "{}{}{}",
        paint(border.bottom_left, border_color),
        rule(span),
        paint(border.bottom_right, border_color)
    ));

    rows.join("\n")
}

/// A horizontal rule, optionally with a label in the middle
pub fn render_divider(
    width: usize,
    style: BorderStyle,
    text: Option<&str>,
    theme: &Theme,
) -> String {
    let ch = style.chars().horizontal.to_string();

    match text.filter(|t| !t.is_empty()) {
        None => paint(ch.repeat(width), theme.muted),
        Some(text) => {
            let used = measure_width(text) + 2;
            let side = width.saturating_sub(used) / 2;
            let rest = width.saturating_sub(side + used);
            format!(
                "{}{}{}",
                paint(ch.repeat(side), theme.muted),
                paint(format!(" {} ", text), theme.secondary),
                paint(ch.repeat(rest), theme.muted)
            )
        }
    }
}

/// A bold section title followed by a thin rule
pub fn render_header(text: &str, icon: &str, width: usize, theme: &Theme) -> String {
    let heading = format!("{} {}", icon, text);
    let fill = width.saturating_sub(measure_width(&heading) + 2);
    format!(
        "{}{}",
        paint_bold(&heading, theme.primary),
        paint(format!(" {}", "\u{2500}".repeat(fill)), theme.muted)
    )
}

/// Indented bullet list, one item per line
pub fn render_bullet_list<S: AsRef<str>>(items: &[S], theme: &Theme) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "  {} {}",
                paint(GLYPHS.bullet, theme.accent),
                paint(item.as_ref(), theme.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `key   value` line with the key padded to `key_width` columns
pub fn key_value_line(key: &str, value: &str, key_width: usize, theme: &Theme) -> String {
    format!(
        "{} {}",
        paint(pad_to_width(key, key_width, Align::Left), theme.muted),
        paint(value, theme.secondary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::strip_ansi;
    use crate::tui::theme::find_theme;
    use proptest::prelude::*;

    fn theme() -> &'static Theme {
        find_theme("ocean").unwrap()
    }

    fn plain(s: &str) -> Vec<String> {
        strip_ansi(s).lines().map(str::to_string).collect()
    }

    fn widths(s: &str) -> Vec<usize> {
        s.lines().map(measure_width).collect()
    }

    #[test]
    fn test_minimal_box() {
        let out = render_box(&["hi"], &BoxOptions::new().padding(0), theme());
        assert_eq!(
            plain(&out),
            vec![
                "\u{256d}\u{2500}\u{2500}\u{2500}\u{2500}\u{256e}",
                "\u{2502} hi \u{2502}",
                "\u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{256f}",
            ]
        );
    }

    #[test]
    fn test_padding_rows() {
        let out = render_box(&["a", "bcd"], &BoxOptions::new().padding(2), theme());
        let rows = plain(&out);
        // top + 2 blank + 2 content + 2 blank + bottom
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[1], format!("\u{2502}{}\u{2502}", " ".repeat(9)));
        assert_eq!(rows[3], format!("\u{2502} a{} \u{2502}", " ".repeat(6)));
        assert!(widths(&out).iter().all(|w| *w == 11));
    }

    #[test]
    fn test_left_title() {
        let out = render_box(
            &["hello"],
            &BoxOptions::new().title("T").border(BorderStyle::Single),
            theme(),
        );
        let rows = plain(&out);
        assert_eq!(
            rows[0],
            "\u{250c}\u{2500} T \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}"
        );
        assert!(widths(&out).iter().all(|w| *w == 11));
    }

    #[test]
    fn test_centered_title_split() {
        let out = render_box(
            &["abcdef"],
            &BoxOptions::new()
                .title("ab")
                .padding(0)
                .title_align(Align::Center)
                .border(BorderStyle::Double),
            theme(),
        );
        // span = 8, run " ab " = 4, free 4 -> 2 left, 2 right
        assert_eq!(
            plain(&out)[0],
            "\u{2554}\u{2550}\u{2550} ab \u{2550}\u{2550}\u{2557}"
        );
    }

    #[test]
    fn test_title_as_wide_as_content_without_padding() {
        let out = render_box(&["x"], &BoxOptions::new().title("wide title").padding(0), theme());
        let w = widths(&out);
        assert!(w.iter().all(|x| *x == w[0]), "{:?}", w);
        assert_eq!(w[0], "wide title".len() + 4);
    }

    #[test]
    fn test_explicit_width() {
        let out = render_box(&["ab"], &BoxOptions::new().width(10).padding(0), theme());
        assert!(widths(&out).iter().all(|w| *w == 14));

        // Narrower than the content: widened instead of breaking the edges
        let out = render_box(&["abcdef"], &BoxOptions::new().width(2).padding(0), theme());
        assert!(widths(&out).iter().all(|w| *w == 10));
    }

    #[test]
    fn test_emoji_content_alignment() {
        let lines = ["\u{26a1} JSON Prompt Generator", "\u{1f4c1} Output: /tmp", "plain"];
        let out = render_box(&lines, &BoxOptions::new().title("[ JSONP ]"), theme());
        let w = widths(&out);
        assert!(w.iter().all(|x| *x == w[0]), "{:?}", w);
    }

    #[test]
    fn test_embedded_newlines_are_split() {
        let out = render_box(&["one\ntwo"], &BoxOptions::new().padding(0), theme());
        assert_eq!(plain(&out).len(), 4);
    }

    #[test]
    fn test_empty_content() {
        let lines: [&str; 0] = [];
        let out = render_box(&lines, &BoxOptions::new().padding(0), theme());
        assert_eq!(
            plain(&out),
            vec!["\u{256d}\u{2500}\u{2500}\u{256e}", "\u{2570}\u{2500}\u{2500}\u{256f}"]
        );
    }

    #[test]
    fn test_divider() {
        let d = render_divider(20, BorderStyle::Single, Some("Tips"), theme());
        assert_eq!(measure_width(&d), 20);
        assert!(strip_ansi(&d).contains(" Tips "));
        assert_eq!(measure_width(&render_divider(12, BorderStyle::Heavy, None, theme())), 12);
    }

    #[test]
    fn test_header_width() {
        let h = render_header("Available Commands", "\u{25c6}", 50, theme());
        assert_eq!(measure_width(&h), 49);
    }

    #[test]
    fn test_bullets_and_key_values() {
        let list = render_bullet_list(&["one", "two"], theme());
        assert_eq!(strip_ansi(&list), "  \u{2022} one\n  \u{2022} two");
        let kv = key_value_line("Theme:", "ocean", 10, theme());
        assert_eq!(strip_ansi(&kv), "Theme:     ocean");
    }

    proptest! {
        #[test]
        fn rows_have_equal_width(
            lines in prop::collection::vec("[ -~\u{4e00}-\u{4e10}\u{1f680}-\u{1f690}]{0,12}", 0..6),
            title in proptest::option::of("[a-zA-Z\u{2728} ]{0,10}"),
            padding in 0usize..4,
            center in any::<bool>(),
        ) {
            let mut options = BoxOptions::new().padding(padding);
            if let Some(title) = title {
                options = options.title(title);
            }
            if center {
                options = options.title_align(Align::Center);
            }
            let out = render_box(&lines, &options, theme());
            let w = widths(&out);
            prop_assert!(w.iter().all(|x| *x == w[0]), "{:?}", w);
        }
    }
}
