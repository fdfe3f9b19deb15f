//! Terminal waiting indicator shown while a consultation is in flight.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressState, ProgressStyle};

const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Default message while the model is answering.
pub const WAITING_MESSAGE: &str = "専門家が回答を考えています…";

const TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Formats a duration as "01s", "1:01m", "1:01h".
fn format_duration_string(total_seconds: u64) -> String {
    if total_seconds < 60 {
        format!("{:02}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{}:{:02}m", minutes, seconds)
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        format!("{}:{:02}h", hours, minutes)
    }
}

fn format_elapsed(state: &ProgressState, w: &mut dyn std::fmt::Write) {
    let _ = w.write_str(&format_duration_string(state.elapsed().as_secs()));
}

/// Spinner with elapsed time, drawn on stderr so stdout only carries the
/// reply.
#[derive(Default)]
pub struct Spinner {
    progress_bar: Option<ProgressBar>,
    current_message: Option<String>,
}

impl Spinner {
    /// Starts the spinner, replacing any running one. Without a message
    /// [`WAITING_MESSAGE`] is shown.
    pub fn start(&mut self, message: Option<&str>) -> Result<()> {
        self.stop(None)?;

        let message = message.unwrap_or(WAITING_MESSAGE).to_string();
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::create_style()?);
        pb.set_message(message.green().bold().to_string());
        pb.enable_steady_tick(TICK_INTERVAL);

        self.current_message = Some(message);
        self.progress_bar = Some(pb);
        Ok(())
    }

    /// Clears the spinner and optionally prints a final line to stderr.
    pub fn stop(&mut self, message: Option<String>) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        if let Some(msg) = message {
            eprintln!("{msg}");
        }
        self.current_message = None;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    fn create_style() -> Result<ProgressStyle> {
        Ok(ProgressStyle::default_spinner()
            .tick_strings(SPINNER_CHARS)
            .with_key("my_elapsed", format_elapsed)
            .template("{spinner:.green} {msg} {my_elapsed:.white}")?)
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        let _ = io::stderr().flush();
    }
}
