//! The conversational glue around the contact book.
//!
//! This module owns everything between the terminal and the data model:
//! command parsing, per-command handlers, the error-translation boundary,
//! and the prompt loop. Records are only ever touched through their own
//! methods; nothing here reaches into model internals.

pub mod command;
pub mod handlers;
pub mod repl;
pub mod style;

pub use command::{parse_input, Command};
pub use repl::{respond, run};
