//! Message argument values.

use serde_json::Value;
use std::borrow::Cow;

/// An opaque value substituted into a message template.
///
/// Anything convertible into a JSON value can be used: string slices, owned
/// strings, numbers, booleans or whole JSON documents.
pub type MessageArg = Value;

/// Returns the text a single argument renders as.
///
/// Strings render without quotes and `null` renders as nothing. Every other
/// value renders as compact JSON.
#[must_use]
pub fn display_arg(arg: &MessageArg) -> Cow<'_, str> {
    match arg {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Collects anything convertible into message arguments.
pub fn to_args<I, A>(args: I) -> Vec<MessageArg>
where
    I: IntoIterator<Item = A>,
    A: Into<MessageArg>,
{
    args.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_string_without_quotes() {
        assert_eq!(display_arg(&json!("cold vodka")), "cold vodka");
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(display_arg(&Value::Null), "");
    }

    #[test]
    fn test_display_other_values_as_json() {
        assert_eq!(display_arg(&json!(42)), "42");
        assert_eq!(display_arg(&json!(true)), "true");
        assert_eq!(display_arg(&json!(1.5)), "1.5");
        assert_eq!(display_arg(&json!({"id": 7})), r#"{"id":7}"#);
    }

    #[test]
    fn test_to_args_mixed_sources() {
        let args = to_args(["a", "b"]);
        assert_eq!(args, vec![json!("a"), json!("b")]);

        let numbers = to_args(vec![1_i64, 2, 3]);
        assert_eq!(numbers.len(), 3);
        assert_eq!(numbers[2], json!(3));

        let empty = to_args(Vec::<String>::new());
        assert!(empty.is_empty());
    }
}
