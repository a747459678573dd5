//! Mock printer prompt for testing

use lpwalk_core::{Error, PrinterPrompt, Result};
use std::sync::{Arc, Mutex};

/// Prompt that answers with a fixed choice and records what it was shown
#[derive(Clone, Default)]
pub struct MockPrompt {
    choice: Option<usize>,
    shown: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockPrompt {
    /// Always choose the printer at this zero-based index
    pub fn choosing(index: usize) -> Self {
        Self {
            choice: Some(index),
            ..Self::default()
        }
    }

    /// Fail as a non-interactive terminal would
    pub fn refusing() -> Self {
        Self::default()
    }

    /// Printer lists the prompt was asked to choose from
    pub fn shown(&self) -> Vec<Vec<String>> {
        self.shown.lock().unwrap().clone()
    }

    /// Whether the prompt was consulted at all
    pub fn was_asked(&self) -> bool {
        !self.shown.lock().unwrap().is_empty()
    }
}

impl PrinterPrompt for MockPrompt {
    fn choose(&self, printers: &[String]) -> Result<usize> {
        self.shown.lock().unwrap().push(printers.to_vec());
        self.choice
            .ok_or_else(|| Error::printer_selection_failed("no interactive terminal"))
    }
}
