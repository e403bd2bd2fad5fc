//! Terminal theme, glyph and border definitions

use crossterm::style::{style, Color, Stylize};
use std::fmt;
use thiserror::Error;

/// A 24-bit terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Render `content` in the given foreground color
pub fn paint(content: impl fmt::Display, color: Rgb) -> String {
    style(content).with(color.into()).to_string()
}

/// Render `content` bold in the given foreground color
pub fn paint_bold(content: impl fmt::Display, color: Rgb) -> String {
    style(content).with(color.into()).bold().to_string()
}

/// Named palette used by every rendering call
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    /// Registry key, always lowercase
    pub name: &'static str,
    /// Human readable name
    pub label: &'static str,
    /// Borders, brackets, command names
    pub primary: Rgb,
    /// Values and object keys
    pub secondary: Rgb,
    /// Titles, numbers, the prompt symbol
    pub accent: Rgb,
    pub success: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub info: Rgb,
    /// Dim/secondary info
    pub muted: Rgb,
    /// Body text
    pub text: Rgb,
    /// Stops for gradient text, in order
    pub gradient: &'static [Rgb],
}

/// Theme used when nothing is configured
pub const DEFAULT_THEME: &str = "pastel";

const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Every available theme, in display order
pub static THEMES: [Theme; 6] = [
    Theme {
        name: "cyberpunk",
        label: "Cyberpunk",
        primary: hex(0xFF00FF),
        secondary: hex(0x00FFFF),
        accent: hex(0xFFFF00),
        success: hex(0x00FF00),
        error: hex(0xFF0000),
        warning: hex(0xFFA500),
        info: hex(0x00BFFF),
        muted: hex(0x808080),
        text: hex(0xFFFFFF),
        gradient: &[hex(0xFF00FF), hex(0x00FFFF), hex(0xFF00FF)],
    },
    Theme {
        name: "ocean",
        label: "Ocean",
        primary: hex(0x0077B6),
        secondary: hex(0x00B4D8),
        accent: hex(0x90E0EF),
        success: hex(0x2E8B57),
        error: hex(0xCD5C5C),
        warning: hex(0xF4A460),
        info: hex(0x87CEEB),
        muted: hex(0x708090),
        text: hex(0xE0FFFF),
        gradient: &[hex(0x0077B6), hex(0x00B4D8), hex(0x90E0EF)],
    },
    Theme {
        name: "forest",
        label: "Forest",
        primary: hex(0x228B22),
        secondary: hex(0x32CD32),
        accent: hex(0x9ACD32),
        success: hex(0x00FF7F),
        error: hex(0xDC143C),
        warning: hex(0xDAA520),
        info: hex(0x98FB98),
        muted: hex(0x6B8E23),
        text: hex(0xF0FFF0),
        gradient: &[hex(0x228B22), hex(0x32CD32), hex(0x9ACD32)],
    },
    Theme {
        name: "sunset",
        label: "Sunset",
        primary: hex(0xFF6B6B),
        secondary: hex(0xFFE66D),
        accent: hex(0xFF8E53),
        success: hex(0x4CAF50),
        error: hex(0xF44336),
        warning: hex(0xFF9800),
        info: hex(0xFFC107),
        muted: hex(0x9E9E9E),
        text: hex(0xFFFAF0),
        gradient: &[hex(0xFF6B6B), hex(0xFF8E53), hex(0xFFE66D)],
    },
    Theme {
        name: "pastel",
        label: "Pastel",
        primary: hex(0xA7B2E2),
        secondary: hex(0xD4B2E2),
        accent: hex(0xE2D4B2),
        success: hex(0xB2E2B2),
        error: hex(0xE2B2B2),
        warning: hex(0xE2D4B2),
        info: hex(0xA7D8E2),
        muted: hex(0xC0C0C0),
        text: hex(0xFFFFFF),
        gradient: &[hex(0xA7B2E2), hex(0xD4B2E2), hex(0xE2B2D4)],
    },
    Theme {
        name: "neon",
        label: "Neon",
        primary: hex(0x39FF14),
        secondary: hex(0xFF1493),
        accent: hex(0x00FFFF),
        success: hex(0x39FF14),
        error: hex(0xFF073A),
        warning: hex(0xFFFF00),
        info: hex(0x1B03A3),
        muted: hex(0x4A4A4A),
        text: hex(0xFFFFFF),
        gradient: &[hex(0x39FF14), hex(0x00FFFF), hex(0xFF1493)],
    },
];

/// Look up a theme by name, ignoring case
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    let name = name.trim();
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Names of all registered themes
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.name).collect()
}

impl Theme {
    pub fn default_theme() -> &'static Theme {
        find_theme(DEFAULT_THEME).unwrap_or(&THEMES[0])
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

/// The currently selected theme.
///
/// Always points into [`THEMES`], so the active name resolves by construction.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSelection {
    current: &'static Theme,
}

impl ThemeSelection {
    pub fn new() -> Self {
        Self {
            current: Theme::default_theme(),
        }
    }

    /// Start from a saved name, falling back to the default theme
    pub fn from_name(name: &str) -> Self {
        Self {
            current: find_theme(name).unwrap_or_else(Theme::default_theme),
        }
    }

    pub fn current(&self) -> &'static Theme {
        self.current
    }

    pub fn name(&self) -> &'static str {
        self.current.name
    }

    /// Switch themes. An unknown name leaves the selection unchanged.
    pub fn set(&mut self, name: &str) -> Result<&'static Theme, UnknownTheme> {
        let theme = find_theme(name).ok_or_else(|| UnknownTheme(name.to_string()))?;
        self.current = theme;
        Ok(theme)
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Symbols used across the UI
#[derive(Debug)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub arrow: &'static str,
    pub arrow_right: &'static str,
    pub bullet: &'static str,
    pub star: &'static str,
    pub lightning: &'static str,
    pub gear: &'static str,
    pub folder: &'static str,
    pub file: &'static str,
    pub clock: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub sparkle: &'static str,
    pub rocket: &'static str,
    pub pin: &'static str,
    pub search: &'static str,
    pub prompt: &'static str,
    pub dot: &'static str,
    pub diamond: &'static str,
    pub triangle_right: &'static str,
}

pub const GLYPHS: Glyphs = Glyphs {
    success: "\u{2713}",
    error: "\u{2717}",
    warning: "\u{26a0}",
    info: "\u{2139}",
    arrow: "\u{279c}",
    arrow_right: "\u{2192}",
    bullet: "\u{2022}",
    star: "\u{2605}",
    lightning: "\u{26a1}",
    gear: "\u{2699}",
    folder: "\u{1f4c1}",
    file: "\u{1f4c4}",
    clock: "\u{23f1}",
    check: "\u{2714}",
    cross: "\u{2718}",
    sparkle: "\u{2728}",
    rocket: "\u{1f680}",
    pin: "\u{1f4cc}",
    search: "\u{1f50d}",
    prompt: "\u{276f}",
    dot: "\u{25cf}",
    diamond: "\u{25c6}",
    triangle_right: "\u{25b6}",
};

impl Glyphs {
    /// Look up a glyph by its semantic name
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let glyph = match name {
            "success" => self.success,
            "error" => self.error,
            "warning" => self.warning,
            "info" => self.info,
            "arrow" => self.arrow,
            "arrowRight" | "arrow_right" => self.arrow_right,
            "bullet" => self.bullet,
            "star" => self.star,
            "lightning" => self.lightning,
            "gear" => self.gear,
            "folder" => self.folder,
            "file" => self.file,
            "clock" => self.clock,
            "check" => self.check,
            "cross" => self.cross,
            "sparkle" => self.sparkle,
            "rocket" => self.rocket,
            "pin" => self.pin,
            "search" => self.search,
            "prompt" => self.prompt,
            "dot" => self.dot,
            "diamond" => self.diamond,
            "triangleRight" | "triangle_right" => self.triangle_right,
            _ => return None,
        };
        Some(glyph)
    }
}

/// Line-drawing characters for one border style
#[derive(Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub cross: char,
    pub left_t: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

const DOUBLE: BorderChars = BorderChars {
    top_left: '\u{2554}',
    top_right: '\u{2557}',
    bottom_left: '\u{255a}',
    bottom_right: '\u{255d}',
    horizontal: '\u{2550}',
    vertical: '\u{2551}',
    cross: '\u{256c}',
    left_t: '\u{2560}',
    right_t: '\u{2563}',
    top_t: '\u{2566}',
    bottom_t: '\u{2569}',
};

const SINGLE: BorderChars = BorderChars {
    top_left: '\u{250c}',
    top_right: '\u{2510}',
    bottom_left: '\u{2514}',
    bottom_right: '\u{2518}',
    horizontal: '\u{2500}',
    vertical: '\u{2502}',
    cross: '\u{253c}',
    left_t: '\u{251c}',
    right_t: '\u{2524}',
    top_t: '\u{252c}',
    bottom_t: '\u{2534}',
};

const ROUNDED: BorderChars = BorderChars {
    top_left: '\u{256d}',
    top_right: '\u{256e}',
    bottom_left: '\u{2570}',
    bottom_right: '\u{256f}',
    ..SINGLE
};

const HEAVY: BorderChars = BorderChars {
    top_left: '\u{250f}',
    top_right: '\u{2513}',
    bottom_left: '\u{2517}',
    bottom_right: '\u{251b}',
    horizontal: '\u{2501}',
    vertical: '\u{2503}',
    cross: '\u{254b}',
    left_t: '\u{2523}',
    right_t: '\u{252b}',
    top_t: '\u{2533}',
    bottom_t: '\u{253b}',
};

/// Named border style, chosen per render call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    Double,
    Single,
    #[default]
    Rounded,
    Heavy,
}

impl BorderStyle {
    pub fn chars(self) -> &'static BorderChars {
        match self {
            BorderStyle::Double => &DOUBLE,
            BorderStyle::Single => &SINGLE,
            BorderStyle::Rounded => &ROUNDED,
            BorderStyle::Heavy => &HEAVY,
        }
    }

    /// Resolve a style name; unknown names fall back to rounded
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "double" => BorderStyle::Double,
            "single" => BorderStyle::Single,
            "heavy" => BorderStyle::Heavy,
            _ => BorderStyle::Rounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        assert_eq!(
            theme_names(),
            vec!["cyberpunk", "ocean", "forest", "sunset", "pastel", "neon"]
        );
        assert_eq!(Theme::default_theme().name, "pastel");
    }

    #[test]
    fn test_find_theme_ignores_case() {
        assert_eq!(find_theme("Ocean").map(|t| t.name), Some("ocean"));
        assert!(find_theme("bogus").is_none());
    }

    #[test]
    fn test_selection_rejects_unknown() {
        let mut selection = ThemeSelection::new();
        selection.set("neon").unwrap();
        assert_eq!(selection.name(), "neon");

        let err = selection.set("bogus").unwrap_err();
        assert_eq!(err, UnknownTheme("bogus".to_string()));
        assert_eq!(selection.name(), "neon");
    }

    #[test]
    fn test_selection_from_saved_name() {
        assert_eq!(ThemeSelection::from_name("forest").name(), "forest");
        assert_eq!(ThemeSelection::from_name("missing").name(), "pastel");
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::new(0xFF, 0x8E, 0x53).to_string(), "#ff8e53");
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(GLYPHS.get("success"), Some("\u{2713}"));
        assert_eq!(GLYPHS.get("folder"), Some("\u{1f4c1}"));
        assert_eq!(GLYPHS.get("nope"), None);
    }

    #[test]
    fn test_border_fallback() {
        assert_eq!(BorderStyle::from_name("DOUBLE"), BorderStyle::Double);
        assert_eq!(BorderStyle::from_name("zigzag"), BorderStyle::Rounded);
        assert_eq!(BorderStyle::Rounded.chars().horizontal, '\u{2500}');
        assert_eq!(BorderStyle::Heavy.chars().vertical, '\u{2503}');
    }
}
