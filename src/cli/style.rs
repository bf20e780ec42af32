//! Color helpers for the bot's replies.
//!
//! Replies carry three kinds of emphasis: a red tag on errors, magenta for
//! usage examples, and the bot's brown for values echoed back to the user.
//! `colored` resolves terminal support and the `NO_COLOR` override at print
//! time, so these helpers stay plain functions over text.

use colored::{ColoredString, Colorize};

/// The tag prepended to error replies.
pub fn error_tag() -> ColoredString {
    "Error".red()
}

/// A usage example shown inside an error reply.
pub fn example(text: &str) -> ColoredString {
    text.magenta()
}

/// A value echoed back to the user inside a reply.
pub fn value(text: &str) -> ColoredString {
    text.truecolor(135, 95, 0)
}
