//! Display adapter that writes the trend label to the log.
//!
//! Every label is logged at `debug`; `info` only sees a label when it
//! differs from the previous one, so an unchanged trend does not repeat at
//! the default level.

use crate::ports::display_port::LabelDisplay;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct TracingDisplay {
    last_label: Option<String>,
}

impl TracingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_label(&self) -> Option<&str> {
        self.last_label.as_deref()
    }
}

impl LabelDisplay for TracingDisplay {
    fn show_label(&mut self, text: &str) {
        debug!(label = text, "show label");
        if self.last_label.as_deref() != Some(text) {
            info!(label = text, "trend label");
            self.last_label = Some(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_label() {
        let mut display = TracingDisplay::new();
        assert_eq!(display.last_label(), None);
        display.show_label("Current trend: Bullish");
        display.show_label("Current trend: Bearish");
        assert_eq!(display.last_label(), Some("Current trend: Bearish"));
    }

    #[test]
    fn repeated_label_is_kept_once() {
        let mut display = TracingDisplay::new();
        display.show_label("Current trend: Bullish");
        display.show_label("Current trend: Bullish");
        assert_eq!(display.last_label(), Some("Current trend: Bullish"));
    }
}
