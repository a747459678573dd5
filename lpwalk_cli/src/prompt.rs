//! Interactive printer selection

use dialoguer::Input;
use lpwalk_core::{Error, PrinterPrompt, Result};

use crate::terminal;

/// Prompt that lists the printers on stderr and reads a 1-based index
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PrinterPrompt for TerminalPrompt {
    fn choose(&self, printers: &[String]) -> Result<usize> {
        if !terminal::is_interactive() {
            return Err(Error::printer_selection_failed(
                "no printer given and standard input is not a terminal",
            ));
        }

        eprintln!("Available printers:");
        eprint!("{}", numbered_list(printers));

        let count = printers.len();
        let choice: usize = Input::new()
            .with_prompt("Select printer (enter number)")
            .validate_with(|choice: &usize| validate_choice(*choice, count))
            .interact()
            .map_err(Error::printer_selection_failed)?;

        Ok(choice - 1)
    }
}

fn numbered_list(printers: &[String]) -> String {
    printers
        .iter()
        .enumerate()
        .map(|(i, printer)| format!("{}. {printer}\n", i + 1))
        .collect()
}

fn validate_choice(choice: usize, count: usize) -> std::result::Result<(), String> {
    if (1..=count).contains(&choice) {
        Ok(())
    } else {
        Err(format!("Enter a number between 1 and {count}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_is_one_based() {
        let printers = vec!["Office".to_string(), "Lab".to_string()];
        assert_eq!(numbered_list(&printers), "1. Office\n2. Lab\n");
    }

    #[test]
    fn test_validate_choice_bounds() {
        assert!(validate_choice(1, 3).is_ok());
        assert!(validate_choice(3, 3).is_ok());
        assert!(validate_choice(0, 3).is_err());
        assert!(validate_choice(4, 3).is_err());
    }
}
