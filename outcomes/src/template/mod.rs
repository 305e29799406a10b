//! Message template rendering.
//!
//! Templates use brace-delimited placeholders such as `{name}`. Placeholder
//! names are documentation only: the Nth placeholder, in scan order, takes the
//! Nth argument.

mod args;
mod render;

pub use args::{display_arg, to_args, MessageArg};
pub use render::{placeholders, render};
