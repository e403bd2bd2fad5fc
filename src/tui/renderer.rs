//! Screens and message lines for the interactive shell
//!
//! Every method returns the rendered text; the shell decides where it goes.

use std::path::Path;

use crate::storage::HistoryEntry;

use super::commands::{HELP_ROWS, HELP_TIPS};
use super::frame::{
    key_value_line, render_box, render_bullet_list, render_divider, render_header, BoxOptions,
};
use super::gradient::gradient_text;
use super::json::render_json_text;
use super::layout::{pad_to_width, Align};
use super::theme::{paint, paint_bold, theme_names, BorderStyle, Theme, GLYPHS};

pub const APP_NAME: &str = "JSONP-CLI";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
     ╦╔═╗╔═╗╔╗╔╔═╗   ╔═╗╦  ╦
     ║╚═╗║ ║║║║╠═╝───║  ║  ║
    ╚╝╚═╝╚═╝╝╚╝╩     ╚═╝╩═╝╩
";

const HEADER_WIDTH: usize = 50;

/// Values shown on the welcome and settings screens
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub model: &'a str,
    pub output_dir: &'a Path,
}

/// Values shown by `/info`
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub endpoint: String,
    pub output_dir: String,
    pub config_location: String,
    pub uptime_secs: u64,
}

/// Terminal renderer bound to the active theme
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    theme: &'static Theme,
}

impl TerminalRenderer {
    pub fn new(theme: &'static Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Bold secondary, for values inside a message line
    pub fn emphasis(&self, value: &str) -> String {
        paint_bold(value, self.theme.secondary)
    }

    /// Render the welcome banner
    pub fn welcome(&self, view: SessionView<'_>) -> String {
        let t = self.theme;
        let lines = [
            format!(
                "{} {} {}",
                paint(GLYPHS.lightning, t.accent),
                paint_bold("JSON Prompt Generator", t.text),
                paint(format!("v{}", VERSION), t.muted)
            ),
            String::new(),
            format!("{} Model: {}", paint(GLYPHS.gear, t.muted), paint(view.model, t.secondary)),
            format!(
                "{} Output: {}",
                paint(GLYPHS.folder, t.muted),
                paint(view.output_dir.display(), t.secondary)
            ),
            format!("{} Theme: {}", paint(GLYPHS.star, t.muted), paint(t.name, t.secondary)),
        ];
        let info = render_box(
            &lines,
            &BoxOptions::new()
                .border(BorderStyle::Double)
                .title(format!("[ {} ]", APP_NAME))
                .title_align(Align::Center),
            t,
        );

        format!(
            "\n{}\n{}\n\n{}\n",
            gradient_text(LOGO, t.gradient),
            info,
            paint(
                format!(
                    "  Type {} for commands or start typing your prompt",
                    paint("/help", t.accent)
                ),
                t.muted
            )
        )
    }

    /// Render help text for all slash commands
    pub fn help(&self) -> String {
        let t = self.theme;
        let mut out = vec![
            String::new(),
            render_header("Available Commands", GLYPHS.pin, HEADER_WIDTH, t),
            String::new(),
        ];
        for (name, description) in HELP_ROWS {
            out.push(format!(
                "  {} {} {}",
                paint(pad_to_width(name, 16, Align::Left), t.primary),
                paint(GLYPHS.arrow, t.muted),
                paint(description, t.text)
            ));
        }
        out.push(String::new());
        out.push(render_divider(HEADER_WIDTH, BorderStyle::Single, Some("Tips"), t));
        out.push(String::new());
        out.push(render_bullet_list(&HELP_TIPS, t));
        out.push(String::new());
        out.join("\n")
    }

    pub fn settings(&self, view: SessionView<'_>) -> String {
        let t = self.theme;
        let output = view.output_dir.display().to_string();
        let lines = [
            format!("{}  {}", paint("Prompt Model:", t.muted), paint_bold(view.model, t.secondary)),
            key_value_line("Output Dir:", &output, 15, t),
            key_value_line("Theme:", t.name, 15, t),
            key_value_line("Version:", VERSION, 15, t),
        ];
        let panel = render_box(&lines, &BoxOptions::new().title(":: Settings"), t);
        format!("\n{}\n", panel)
    }

    pub fn history(&self, entries: &[HistoryEntry], dir: &Path) -> String {
        let t = self.theme;
        if entries.is_empty() {
            let empty = format!("  {} No prompt history found", GLYPHS.warning);
            return format!("\n{}\n", paint(empty, t.warning));
        }

        let mut out = vec![
            String::new(),
            render_header("Recent Prompts", GLYPHS.clock, HEADER_WIDTH, t),
            String::new(),
        ];
        for entry in entries {
            out.push(format!(
                "  {} {}",
                paint(GLYPHS.file, t.muted),
                paint(&entry.file_name, t.secondary)
            ));
            out.push(format!(
                "     {}",
                paint(entry.modified.format("%Y-%m-%d %H:%M:%S"), t.muted)
            ));
        }
        out.push(String::new());
        out.push(paint(format!("  {} Location: {}", GLYPHS.folder, dir.display()), t.muted));
        out.push(String::new());
        out.join("\n")
    }

    pub fn info(&self, info: &SystemInfo) -> String {
        let t = self.theme;
        let rows = [
            ("Application", format!("{} v{}", APP_NAME, VERSION)),
            (
                "Platform",
                format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH),
            ),
            ("Uptime", format!("{} seconds", info.uptime_secs)),
            ("Ollama", info.endpoint.clone()),
            ("Output Dir", info.output_dir.clone()),
            ("Config", info.config_location.clone()),
        ];
        let lines: Vec<String> = rows
            .iter()
            .map(|(key, value)| key_value_line(key, value, 12, t))
            .collect();
        let panel = render_box(&lines, &BoxOptions::new().title(":: System Information"), t);
        format!("\n{}\n", panel)
    }

    /// Theme list with a check mark next to the active one
    pub fn themes(&self) -> String {
        let t = self.theme;
        let mut out = vec![
            String::new(),
            render_header("Available Themes", GLYPHS.star, HEADER_WIDTH, t),
            String::new(),
        ];
        for name in theme_names() {
            if name == t.name {
                out.push(format!(
                    "  {}{}",
                    paint(format!("{} ", GLYPHS.check), t.success),
                    paint_bold(name, t.accent)
                ));
            } else {
                out.push(format!("    {}", paint(name, t.text)));
            }
        }
        out.push(String::new());
        out.push(paint("  Usage: /theme <name>", t.muted));
        out.push(String::new());
        out.join("\n")
    }

    pub fn success(&self, msg: &str) -> String {
        paint(format!("  {} {}", GLYPHS.success, msg), self.theme.success)
    }

    pub fn error(&self, msg: &str) -> String {
        paint(format!("  {} {}", GLYPHS.error, msg), self.theme.error)
    }

    pub fn info_line(&self, msg: &str) -> String {
        paint(format!("  {} {}", GLYPHS.info, msg), self.theme.info)
    }

    pub fn warning(&self, msg: &str) -> String {
        paint(format!("  {} {}", GLYPHS.warning, msg), self.theme.warning)
    }

    pub fn muted(&self, msg: &str) -> String {
        paint(format!("  {}", msg), self.theme.muted)
    }

    /// Error panel shown when generation fails
    pub fn failure_panel(&self, title: &str, message: &str, details: Option<&str>) -> String {
        let t = self.theme;
        let mut lines = vec![paint(format!("{} {}", GLYPHS.error, message), t.error)];
        if let Some(details) = details {
            lines.push(String::new());
            lines.push(paint(format!("Details: {}", details), t.muted));
        }
        let panel = render_box(
            &lines,
            &BoxOptions::new()
                .title(format!("{} {}", GLYPHS.warning, title))
                .border(BorderStyle::Double)
                .border_color(t.error)
                .title_color(t.error),
            t,
        );
        format!("\n{}\n", panel)
    }

    /// Confirmation after a prompt was written to disk
    pub fn saved_panel(&self, file_name: &str, path: &Path) -> String {
        let t = self.theme;
        let lines = [
            format!("{} Saved successfully!", paint(GLYPHS.success, t.success)),
            String::new(),
            format!("{} {}", paint("File:", t.muted), paint(file_name, t.secondary)),
            format!("{} {}", paint("Path:", t.muted), paint(path.display(), t.secondary)),
        ];
        format!("\n{}\n", render_box(&lines, &BoxOptions::new(), t))
    }

    /// Header plus the highlighted model output
    pub fn json_block(&self, text: &str) -> String {
        format!(
            "\n{}\n\n{}\n",
            render_header("Generated JSON Prompt", GLYPHS.file, HEADER_WIDTH, self.theme),
            render_json_text(text, self.theme)
        )
    }

    pub fn goodbye(&self) -> String {
        format!(
            "\n{}\n",
            self.muted(&format!("{} Goodbye! Thanks for using {}", GLYPHS.sparkle, APP_NAME))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::{measure_width, strip_ansi};
    use crate::tui::theme::find_theme;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn renderer(name: &str) -> TerminalRenderer {
        TerminalRenderer::new(find_theme(name).unwrap())
    }

    fn view(dir: &Path) -> SessionView<'_> {
        SessionView {
            model: "llama3:latest",
            output_dir: dir,
        }
    }

    #[test]
    fn test_welcome_box_is_aligned() {
        let dir = PathBuf::from("/home/me/jsonp-output");
        let out = renderer("pastel").welcome(view(&dir));
        let plain = strip_ansi(&out);
        assert!(plain.contains("[ JSONP-CLI ]"));
        assert!(plain.contains("Model: llama3:latest"));
        assert!(plain.contains("Theme: pastel"));

        let box_rows: Vec<usize> = out
            .lines()
            .filter(|l| {
                let p = strip_ansi(l);
                p.starts_with('\u{2554}') || p.starts_with('\u{2551}') || p.starts_with('\u{255a}')
            })
            .map(measure_width)
            .collect();
        assert_eq!(box_rows.len(), 9);
        assert!(box_rows.iter().all(|w| *w == box_rows[0]));
    }

    #[test]
    fn test_help_lists_every_command() {
        let plain = strip_ansi(&renderer("ocean").help());
        for (name, _) in HELP_ROWS {
            assert!(plain.contains(name), "missing {}", name);
        }
        assert!(plain.contains(" Tips "));
    }

    #[test]
    fn test_themes_marks_current() {
        let plain = strip_ansi(&renderer("forest").themes());
        assert!(plain.contains("\u{2714} forest"));
        for name in theme_names() {
            assert!(plain.contains(name));
        }
    }

    #[test]
    fn test_empty_history() {
        let plain = strip_ansi(&renderer("neon").history(&[], Path::new("/tmp")));
        assert!(plain.contains("No prompt history found"));
    }

    #[test]
    fn test_history_entries() {
        let entries = vec![HistoryEntry {
            file_name: "prompt-1700000000000.json".to_string(),
            path: PathBuf::from("/tmp/prompt-1700000000000.json"),
            modified: Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap(),
        }];
        let plain = strip_ansi(&renderer("sunset").history(&entries, Path::new("/tmp")));
        assert!(plain.contains("prompt-1700000000000.json"));
        assert!(plain.contains("2024-03-01 09:05:00"));
        assert!(plain.contains("Location: /tmp"));
    }

    #[test]
    fn test_failure_panel_details() {
        let out =
            renderer("cyberpunk").failure_panel("Connection Error", "Failed", Some("refused"));
        let plain = strip_ansi(&out);
        assert!(plain.contains("\u{26a0} Connection Error"));
        assert!(plain.contains("Details: refused"));
        assert!(plain.contains('\u{2554}'));
    }

    #[test]
    fn test_info_and_settings_render() {
        let r = renderer("pastel");
        let info = SystemInfo {
            endpoint: "http://localhost:11434".into(),
            output_dir: "/out".into(),
            config_location: "(memory)".into(),
            uptime_secs: 3,
        };
        let plain = strip_ansi(&r.info(&info));
        assert!(plain.contains("Application  JSONP-CLI v"));
        assert!(plain.contains("3 seconds"));
        assert!(plain.contains("Ollama       http://localhost:11434"));

        let dir = PathBuf::from("/out");
        let plain = strip_ansi(&r.settings(view(&dir)));
        assert!(plain.contains("Prompt Model:  llama3:latest"));
        assert!(plain.contains("Output Dir:     /out"));
    }

    #[test]
    fn test_json_block() {
        let plain = strip_ansi(&renderer("ocean").json_block(r#"{"task":"x"}"#));
        assert!(plain.contains("Generated JSON Prompt"));
        assert!(plain.contains("\"task\": \"x\""));
    }
}
