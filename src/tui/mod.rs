//! Interactive terminal UI for jsonp
//!
//! Reads requests line by line, turns plain text into JSON prompt templates
//! through the configured [`Generator`], and handles the slash commands that
//! change the model, theme and output directory.

pub mod commands;
pub mod frame;
pub mod gradient;
pub mod json;
pub mod layout;
pub mod prompt;
pub mod renderer;
pub mod spinner;
pub mod theme;

use crate::api::{ApiError, Generator};
use crate::config::{ConfigKey, ConfigStore, DEFAULT_MODEL};
use crate::storage::OutputStore;

use commands::{classify, Input, SlashCommand};
use prompt::{PromptHandler, ReadOutcome};
use renderer::{SessionView, SystemInfo, TerminalRenderer};
use spinner::ThinkingSpinner;
use theme::{paint, ThemeSelection, DEFAULT_THEME, GLYPHS};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

const HISTORY_LIMIT: usize = 10;

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Continue,
    Exit,
}

/// Interactive shell around one generator, config store and output store
pub struct InteractiveShell {
    generator: Arc<dyn Generator>,
    config: Box<dyn ConfigStore>,
    output: Box<dyn OutputStore>,
    out: Box<dyn Write + Send>,
    model: String,
    themes: ThemeSelection,
    prompt_handler: PromptHandler,
    started: Instant,
}

impl InteractiveShell {
    /// Create a shell writing to stdout, restoring model and theme from `config`
    pub fn new(
        generator: Arc<dyn Generator>,
        config: Box<dyn ConfigStore>,
        output: Box<dyn OutputStore>,
    ) -> Self {
        let model = config.get_or(ConfigKey::PromptModel, DEFAULT_MODEL);
        let themes = ThemeSelection::from_name(&config.get_or(ConfigKey::Theme, DEFAULT_THEME));

        Self {
            generator,
            config,
            output,
            out: Box::new(std::io::stdout()),
            model,
            themes,
            prompt_handler: PromptHandler::new(),
            started: Instant::now(),
        }
    }

    /// Send everything the shell prints to `out` instead of stdout
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn theme_name(&self) -> &'static str {
        self.themes.name()
    }

    pub fn config(&self) -> &dyn ConfigStore {
        self.config.as_ref()
    }

    pub fn output_store(&self) -> &dyn OutputStore {
        self.output.as_ref()
    }

    fn renderer(&self) -> TerminalRenderer {
        TerminalRenderer::new(self.themes.current())
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            debug!("Failed to write to terminal: {}", e);
        }
    }

    /// Run the interactive shell main loop
    pub async fn run(&mut self) -> Result<()> {
        self.show_welcome();

        loop {
            match self.prompt_handler.read_line(self.themes.current()).await {
                ReadOutcome::Line(line) => {
                    if self.handle_line(&line).await == LoopState::Exit {
                        break;
                    }
                }
                ReadOutcome::Eof | ReadOutcome::Interrupted => {
                    let bye = self.renderer().goodbye();
                    self.emit(&bye);
                    break;
                }
            }
        }

        info!("Session ended after {} inputs", self.prompt_handler.history_len());
        Ok(())
    }

    /// Process one input line
    pub async fn handle_line(&mut self, line: &str) -> LoopState {
        match classify(line) {
            Input::Empty => LoopState::Continue,
            Input::Exit => {
                let bye = self.renderer().goodbye();
                self.emit(&bye);
                LoopState::Exit
            }
            Input::Command(cmd) => self.handle_command(cmd).await,
            Input::Prompt(text) => {
                self.process_prompt(&text).await;
                LoopState::Continue
            }
        }
    }

    /// Handle a slash command
    async fn handle_command(&mut self, cmd: SlashCommand) -> LoopState {
        let r = self.renderer();

        match cmd {
            SlashCommand::Model(Some(name)) => {
                self.model = name.clone();
                info!("Model updated to: {}", name);
                self.persist(ConfigKey::PromptModel, &name);
                let line = r.success(&format!("Model set to: {}", r.emphasis(&name)));
                self.emit(&format!("\n{}\n", line));
            }
            SlashCommand::Model(None) => {
                let line = r.info_line(&format!("Current model: {}", r.emphasis(&self.model)));
                self.emit(&format!("\n{}\n{}\n", line, r.muted("Usage: /model <model_name>")));
            }
            SlashCommand::Theme(Some(name)) => match self.themes.set(&name) {
                Ok(theme) => {
                    info!("Theme changed to: {}", theme.name);
                    self.persist(ConfigKey::Theme, theme.name);
                    let r = self.renderer();
                    let line = r.success(&format!("Theme changed to: {}", r.emphasis(theme.name)));
                    self.emit(&format!("\n{}\n", line));
                }
                Err(e) => {
                    debug!("{}", e);
                    let text = format!("\n{}\n{}", r.error(&e.to_string()), r.themes());
                    self.emit(&text);
                }
            },
            SlashCommand::Theme(None) => self.emit(&r.themes()),
            SlashCommand::Output(Some(dir)) => {
                self.output.set_dir(PathBuf::from(&dir));
                info!("Output directory set to: {}", dir);
                self.persist(ConfigKey::OutputDir, &dir);
                let line = r.success(&format!("Output directory set to: {}", r.emphasis(&dir)));
                self.emit(&format!("\n{}\n", line));
            }
            SlashCommand::Output(None) => {
                let dir = self.output.dir().display().to_string();
                let line = r.info_line(&format!("Current output: {}", r.emphasis(&dir)));
                self.emit(&format!("\n{}\n{}\n", line, r.muted("Usage: /output <directory_path>")));
            }
            SlashCommand::History => {
                let text = match self.output.recent(HISTORY_LIMIT) {
                    Ok(entries) => r.history(&entries, self.output.dir()),
                    Err(e) => {
                        error!("Failed to read history: {}", e);
                        r.error(&e.to_string())
                    }
                };
                self.emit(&text);
            }
            SlashCommand::Info => {
                let info = SystemInfo {
                    endpoint: self.generator.endpoint(),
                    output_dir: self.output.dir().display().to_string(),
                    config_location: self.config.location(),
                    uptime_secs: self.started.elapsed().as_secs(),
                };
                self.emit(&r.info(&info));
            }
            SlashCommand::Settings => {
                let text = r.settings(self.session_view());
                self.emit(&text);
            }
            SlashCommand::Help => self.emit(&r.help()),
            SlashCommand::Clear => {
                if let Err(e) = crossterm::execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
                    debug!("Failed to clear screen: {}", e);
                }
                self.show_welcome();
            }
            SlashCommand::Quit => {
                self.emit(&r.goodbye());
                return LoopState::Exit;
            }
            SlashCommand::Unknown(name) => {
                let hint = r.muted(&format!(
                    "Type {} for available commands",
                    paint("/help", r.theme().accent)
                ));
                let unknown = r.error(&format!("Unknown command: {}", name));
                let text = format!("\n{}\n{}\n", unknown, hint);
                self.emit(&text);
            }
        }
        LoopState::Continue
    }

    /// Generate, display and save a prompt template for `text`
    async fn process_prompt(&mut self, text: &str) {
        info!("Processing user prompt");
        let r = self.renderer();
        let model = self.model.clone();

        let spinner = ThinkingSpinner::start(
            &format!("{} Generating creative JSON prompt...", GLYPHS.lightning),
            r.theme().info,
        );
        let outcome = tokio::select! {
            result = self.generator.generate(text, &model) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        spinner.stop().await;

        let generated = match outcome {
            Some(Ok(generated)) => generated,
            Some(Err(e)) => {
                error!("Generation failed: {}", e);
                let panel = failure_panel(&r, &e);
                self.emit(&panel);
                return;
            }
            None => {
                info!("Generation cancelled");
                self.emit(&format!("\n{}\n", r.warning("Generation cancelled")));
                return;
            }
        };

        self.emit(&r.success("JSON prompt generated successfully!"));
        self.emit(&r.json_block(&generated));

        match self.output.save(&generated) {
            Ok(saved) => self.emit(&r.saved_panel(&saved.file_name, &saved.path)),
            Err(e) => {
                error!("Error saving the JSON file: {}", e);
                self.emit(&r.error(&e.to_string()));
            }
        }
    }

    /// Write a setting through, reporting but not propagating failures
    fn persist(&mut self, key: ConfigKey, value: &str) {
        if let Err(e) = self.config.set(key, value) {
            error!("Failed to save {}: {}", key, e);
            let line = self.renderer().warning(&format!("Could not save {}: {}", key, e));
            self.emit(&line);
        }
    }

    fn session_view(&self) -> SessionView<'_> {
        SessionView {
            model: &self.model,
            output_dir: self.output.dir(),
        }
    }

    fn show_welcome(&mut self) {
        let text = self.renderer().welcome(self.session_view());
        self.emit(&text);
    }
}

fn failure_panel(r: &TerminalRenderer, err: &ApiError) -> String {
    match err {
        e if e.is_connection() => r.failure_panel(
            "Connection Error",
            "Failed to connect to Ollama. Make sure Ollama is running.",
            Some(&e.to_string()),
        ),
        ApiError::Status { status } => r.failure_panel(
            "Request Failed",
            &format!("API request failed ({})", status),
            None,
        ),
        other => r.failure_panel(
            "Generation Failed",
            "The model did not return a usable reply.",
            Some(&other.to_string()),
        ),
    }
}
