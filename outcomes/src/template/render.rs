//! Positional placeholder substitution.

use super::args::{display_arg, MessageArg};
use crate::errors::{OutcomeError, Result, TemplateArgumentMismatch};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::warn;

/// A brace-delimited run of one or more non-brace characters.
const PLACEHOLDER_PATTERN: &str = r"\{[^{}]+\}";

/// Upper bound on the compiled placeholder automaton.
const PLACEHOLDER_SIZE_LIMIT: usize = 1 << 20;

// The regex crate matches in time linear in the input, so no per-call
// timeout is needed to guard against adversarial templates.
static PLACEHOLDER: LazyLock<std::result::Result<Regex, regex::Error>> = LazyLock::new(|| {
    RegexBuilder::new(PLACEHOLDER_PATTERN)
        .size_limit(PLACEHOLDER_SIZE_LIMIT)
        .build()
});

fn placeholder_regex() -> Result<&'static Regex> {
    PLACEHOLDER
        .as_ref()
        .map_err(|e| OutcomeError::Internal(format!("placeholder pattern failed to compile: {e}")))
}

/// Lists the placeholder tokens of a template, braces included, in scan order.
pub fn placeholders(template: &str) -> Result<Vec<&str>> {
    let regex = placeholder_regex()?;
    Ok(regex.find_iter(template).map(|found| found.as_str()).collect())
}

/// Renders a message template against positional arguments.
///
/// With no arguments the template comes back unchanged and is not scanned.
/// Otherwise each placeholder, in the order it appears, is replaced by the
/// next argument regardless of the name between the braces, so
/// `"{b} {a}"` with `["1", "2"]` renders as `"1 2"`. Unused trailing
/// arguments are ignored.
///
/// Braces that do not enclose a name pass through literally and are not
/// treated as format escapes: `"{{inner}}"` renders as `"{v}"`, and `"{}"`
/// is left as is rather than rejected.
///
/// # Errors
///
/// Returns [`OutcomeError::TemplateArgumentMismatch`] when the template has
/// more placeholders than there are arguments.
pub fn render(template: &str, args: &[MessageArg]) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let regex = placeholder_regex()?;
    let found = regex.find_iter(template).count();
    if found > args.len() {
        warn!(
            template = %template,
            placeholders = found,
            arguments = args.len(),
            "Message template has more placeholders than arguments"
        );
        return Err(TemplateArgumentMismatch::new(template, found, args.len()).into());
    }

    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;
    for (placeholder, arg) in regex.find_iter(template).zip(args) {
        rendered.push_str(&template[last..placeholder.start()]);
        rendered.push_str(&display_arg(arg));
        last = placeholder.end();
    }
    rendered.push_str(&template[last..]);

    Ok(rendered)
}
