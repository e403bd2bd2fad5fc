//! Slash command parsing and definitions

/// Available slash commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Model(Option<String>),
    Theme(Option<String>),
    /// Directory arguments rejoined with single spaces
    Output(Option<String>),
    History,
    Info,
    Settings,
    Help,
    Clear,
    Quit,
    Unknown(String),
}

/// What a raw input line asks the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Exit,
    Command(SlashCommand),
    Prompt(String),
}

/// Classify one line read from the prompt
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return Input::Exit;
    }
    match parse_command(trimmed) {
        Some(cmd) => Input::Command(cmd),
        None => Input::Prompt(trimmed.to_string()),
    }
}

/// Parse a slash command from user input.
/// Returns None if the input is not a slash command.
pub fn parse_command(input: &str) -> Option<SlashCommand> {
    let rest = input.trim().strip_prefix('/')?;

    let mut parts = rest.split_whitespace();
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();
    let first = args.first().map(|s| s.to_string());

    let command = match cmd.as_str() {
        "promptmodel" | "model" => SlashCommand::Model(first),
        "theme" => SlashCommand::Theme(first),
        "output" => {
            SlashCommand::Output((!args.is_empty()).then(|| args.join(" ")))
        }
        "history" => SlashCommand::History,
        "info" => SlashCommand::Info,
        "setting" | "settings" => SlashCommand::Settings,
        "help" => SlashCommand::Help,
        "clear" => SlashCommand::Clear,
        "exit" | "quit" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd),
    };
    Some(command)
}

/// Rows shown by `/help`
pub const HELP_ROWS: [(&str, &str); 9] = [
    ("/model", "Set AI model (short for /promptmodel)"),
    ("/theme", "Change color theme"),
    ("/output", "Set output directory"),
    ("/setting", "View current settings"),
    ("/history", "View prompt history"),
    ("/info", "System information"),
    ("/clear", "Clear screen"),
    ("/help", "Show this menu"),
    ("/exit", "Exit application"),
];

pub const HELP_TIPS: [&str; 3] = [
    "Type any text to generate a JSON prompt template",
    "Use /model <name> to change AI model",
    "Use /theme <name> to change colors",
];
