//! Thinking spinner for the interactive shell

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::theme::{paint, Rgb};

const TICK: Duration = Duration::from_millis(80);

// Braille dots; the final entry is the "finished" frame indicatif requires
const FRAMES: [&str; 11] = [
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}",
    "\u{2827}", "\u{2807}", "\u{280f}", " ",
];

/// A spinner shown while waiting for the model.
///
/// Frames are advanced by a separate task until [`ThinkingSpinner::stop`]
/// cancels it; `stop` waits for that task so the line is cleared before the
/// caller prints anything else.
pub struct ThinkingSpinner {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ThinkingSpinner {
    /// Start the spinner with a message
    pub fn start(msg: &str, color: Rgb) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&FRAMES);
        bar.set_style(style);
        bar.set_message(paint(msg, color));

        let token = CancellationToken::new();
        let child = token.child_token();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            loop {
                tokio::select! {
                    _ = child.cancelled() => break,
                    _ = interval.tick() => bar.tick(),
                }
            }
            bar.finish_and_clear();
        });

        Self { token, handle }
    }

    /// Stop and clear the spinner
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            debug!("Spinner task ended abnormally: {}", e);
        }
    }
}
