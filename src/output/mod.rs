//! Terminal output formatting
//!
//! Display utilities for the CLI game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_intro, print_outcome, print_remaining, print_turn};
