//! Printer resolution against the live spooler printer list

use log::debug;

use crate::spooler::Spooler;
use crate::{Error, Result};

/// Interactive fallback used when no printer was named
pub trait PrinterPrompt {
    /// Choose one of `printers`, returning its zero-based index
    fn choose(&self, printers: &[String]) -> Result<usize>;
}

/// Resolve the printer to use for this run
///
/// The printer list is queried every time; a name is only accepted if the
/// spooler currently reports it.
pub fn resolve_printer(
    spooler: &dyn Spooler,
    requested: Option<&str>,
    prompt: &dyn PrinterPrompt,
) -> Result<String> {
    let printers = spooler.list_printers()?;

    if printers.is_empty() {
        return Err(Error::NoPrintersAvailable);
    }

    if let Some(name) = requested {
        if printers.iter().any(|printer| printer == name) {
            debug!("Using requested printer '{name}'");
            return Ok(name.to_string());
        }
        return Err(Error::unknown_printer(name, &printers));
    }

    let index = prompt.choose(&printers)?;
    let printer = printers.get(index).cloned().ok_or_else(|| {
        Error::printer_selection_failed(format!(
            "choice {} is out of range (1-{})",
            index + 1,
            printers.len()
        ))
    })?;

    debug!("Using selected printer '{printer}'");
    Ok(printer)
}
