//! lpwalk Core Library
//!
//! File discovery, printer resolution, stapling negotiation and print
//! command construction for submitting whole directory trees to CUPS.
//!
//! Nothing in this crate talks to the spooler directly except
//! [`CupsSpooler`]; everything else works against the [`Spooler`] trait so
//! it can be exercised without a print server.

pub mod command;
pub mod discovery;
pub mod error;
pub mod printer;
pub mod spooler;
pub mod stapling;

// Re-export main types
pub use command::{END_OF_OPTIONS, LAYOUT_OPTIONS, PrintCommand, build_command};
pub use discovery::{PathPattern, Traversal, TraversalOptions, discover, enumerate, filter_by_pattern};
pub use error::{Error, Result};
pub use printer::{PrinterPrompt, resolve_printer};
pub use spooler::{CupsSpooler, Spooler, SpoolerCommands, parse_printer_list};
pub use stapling::{
    NonDefaultKeyword, OptionChoice, OptionDescriptor, STAPLE_DISABLED_VALUE, StapleOption,
    StaplePolicy, negotiate_staple, resolve_staple_option,
};
