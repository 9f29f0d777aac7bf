//! Loading indicator shown while the contact CSV is fetched

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::messages;

/// Spinner on stderr for the duration of the load
///
/// Hidden when stderr is not a terminal or quiet mode is on.
#[derive(Debug)]
pub struct LoadingSpinner {
    bar: ProgressBar,
}

impl LoadingSpinner {
    /// Start spinning, unless `enabled` is false or stderr is not a terminal
    pub fn start(enabled: bool) -> Self {
        let is_terminal = atty::is(atty::Stream::Stderr);
        let bar = if enabled && is_terminal {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐", "◓", "◑", "◒"]);
        bar.set_style(style);
        bar.set_message(messages::LOADING);
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
