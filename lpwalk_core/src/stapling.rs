//! Stapling capability negotiation
//!
//! CUPS reports printer options one per line in the form
//! `Name/Description: value *default value ...`. Stapling has no standard
//! option name, so the first line mentioning "staple" is taken as the
//! stapling option and its values are inspected.

use std::fmt;

use crate::spooler::Spooler;
use crate::{Error, Result};

/// Value that turns stapling off
pub const STAPLE_DISABLED_VALUE: &str = "None";

/// One allowed value of a printer option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionChoice {
    pub value: String,
    /// Marked with `*` by the spooler: the printer's current setting
    pub is_default: bool,
}

/// Parsed option line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: String,
    pub description: String,
    pub choices: Vec<OptionChoice>,
}

impl OptionDescriptor {
    /// Parse a `Name/Description: values` line, `None` if it lacks `/` or `:`
    pub fn parse(line: &str) -> Option<Self> {
        let (name, rest) = line.split_once('/')?;
        let (description, values) = rest.split_once(':')?;
        let values = values.split(':').next().unwrap_or_default();

        let choices = values
            .split_whitespace()
            .map(|token| match token.strip_prefix('*') {
                Some(value) => OptionChoice {
                    value: value.to_string(),
                    is_default: true,
                },
                None => OptionChoice {
                    value: token.to_string(),
                    is_default: false,
                },
            })
            .collect();

        Some(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            choices,
        })
    }

    /// The choice currently in effect, if the spooler marked one
    pub fn current(&self) -> Option<&OptionChoice> {
        self.choices.iter().find(|choice| choice.is_default)
    }
}

/// Resolved `name=value` stapling option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StapleOption {
    pub name: String,
    pub value: String,
}

impl StapleOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Option that explicitly switches stapling off
    pub fn disabled(name: impl Into<String>) -> Self {
        Self::new(name, STAPLE_DISABLED_VALUE)
    }

    pub fn is_disabled(&self) -> bool {
        self.value == STAPLE_DISABLED_VALUE
    }
}

impl fmt::Display for StapleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Strategy choosing which staple value to request
pub trait StaplePolicy {
    /// Short name of the position this policy asks for, used in messages
    fn position(&self) -> &str;

    /// Pick a value from the printer's stapling option
    fn select<'a>(&self, descriptor: &'a OptionDescriptor) -> Option<&'a OptionChoice>;
}

/// Picks the first value containing a keyword that is not the current default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonDefaultKeyword {
    keyword: String,
}

impl NonDefaultKeyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
        }
    }

    /// Top-left stapling for long-edge feed
    pub fn top_left() -> Self {
        Self::new("left")
    }
}

impl Default for NonDefaultKeyword {
    fn default() -> Self {
        Self::top_left()
    }
}

impl StaplePolicy for NonDefaultKeyword {
    fn position(&self) -> &str {
        &self.keyword
    }

    fn select<'a>(&self, descriptor: &'a OptionDescriptor) -> Option<&'a OptionChoice> {
        descriptor
            .choices
            .iter()
            .find(|choice| !choice.is_default && choice.value.to_lowercase().contains(&self.keyword))
    }
}

/// Find the first option line that mentions stapling
pub fn find_staple_descriptor<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .find(|line| line.to_lowercase().contains("staple"))
}

/// Map a stapling intent onto the option lines a printer reported
///
/// | descriptor | want  | result                      |
/// |------------|-------|-----------------------------|
/// | absent     | false | `None`                      |
/// | absent     | true  | `StaplingUnsupported`       |
/// | present    | true  | `name=<policy choice>`      |
/// | present    | false | `name=None`                 |
pub fn resolve_staple_option<S: AsRef<str>>(
    printer: &str,
    lines: &[S],
    want_staple: bool,
    policy: &dyn StaplePolicy,
) -> Result<Option<StapleOption>> {
    let Some(line) = find_staple_descriptor(lines) else {
        if want_staple {
            return Err(Error::stapling_unsupported(printer));
        }
        return Ok(None);
    };

    let Some(descriptor) = OptionDescriptor::parse(line) else {
        if want_staple {
            return Err(Error::malformed_capability(printer, line));
        }
        log::warn!("Ignoring unparsable stapling option of '{printer}': '{line}'");
        return Ok(None);
    };

    if !want_staple {
        return Ok(Some(StapleOption::disabled(descriptor.name)));
    }

    let choice = policy
        .select(&descriptor)
        .ok_or_else(|| Error::staple_position_unavailable(printer, policy.position()))?;

    Ok(Some(StapleOption::new(
        descriptor.name.clone(),
        choice.value.clone(),
    )))
}

/// Query a printer's options and resolve the stapling intent against them
pub fn negotiate_staple(
    spooler: &dyn Spooler,
    printer: &str,
    want_staple: bool,
    policy: &dyn StaplePolicy,
) -> Result<Option<StapleOption>> {
    let lines = spooler.list_options(printer)?;
    let option = resolve_staple_option(printer, &lines, want_staple, policy)?;

    match &option {
        Some(option) => log::debug!("Stapling option for '{printer}': {option}"),
        None => log::debug!("Printer '{printer}' has no stapling option"),
    }

    Ok(option)
}
