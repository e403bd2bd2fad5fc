//! Input prompt with history support

use std::io::{self, BufRead, Write};
use tokio::sync::oneshot;
use tracing::debug;

use super::theme::{paint, Theme, GLYPHS};

/// Result of waiting for one line of input
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// EOF (Ctrl+D) or a closed stdin
    Eof,
    /// Ctrl+C while waiting
    Interrupted,
}

/// Handles user input with styled prompt and input history
#[derive(Debug, Default)]
pub struct PromptHandler {
    history: Vec<String>,
}

impl PromptHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `❯` prompt in the theme's accent color
    pub fn prompt_text(theme: &Theme) -> String {
        format!("{} ", paint(GLYPHS.prompt, theme.accent))
    }

    /// Display the prompt and wait for a line, racing Ctrl+C.
    ///
    /// Stdin is read on a detached thread so an interrupt can return
    /// immediately; the pending read is abandoned when the process exits.
    pub async fn read_line(&mut self, theme: &Theme) -> ReadOutcome {
        print!("{}", Self::prompt_text(theme));
        if io::stdout().flush().is_err() {
            return ReadOutcome::Eof;
        }

        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let _ = tx.send(read_stdin_line());
        });

        let outcome = tokio::select! {
            line = rx => match line {
                Ok(Some(line)) => ReadOutcome::Line(line),
                Ok(None) | Err(_) => ReadOutcome::Eof,
            },
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted while waiting for input");
                println!();
                ReadOutcome::Interrupted
            }
        };

        if let ReadOutcome::Line(line) = &outcome {
            self.record(line);
        }
        outcome
    }

    /// Remember a non-empty line
    pub fn record(&mut self, line: &str) {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.history.push(trimmed.to_string());
        }
    }

    /// Get input history
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Get the number of inputs in history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Blocking read of one line. `None` on EOF (Ctrl+D) or a read error.
fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            debug!("Failed to read stdin: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::strip_ansi;
    use crate::tui::theme::find_theme;

    #[test]
    fn test_prompt_symbol() {
        let theme = find_theme("neon").unwrap();
        assert_eq!(strip_ansi(&PromptHandler::prompt_text(theme)), "\u{276f} ");
    }

    #[test]
    fn test_history_skips_blank_lines() {
        let mut handler = PromptHandler::new();
        handler.record("first");
        handler.record("   ");
        handler.record("  /help ");
        assert_eq!(handler.history(), ["first", "/help"]);
        assert_eq!(handler.history_len(), 2);
    }
}
