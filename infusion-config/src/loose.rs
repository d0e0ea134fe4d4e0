//! Parse-or-default readers for hand written config values.
//!
//! None of these fail. A value that can't be understood becomes the default
//! for that field, so one typo never takes the rest of the file down with it.

use infusion_core::INFINITE_DURATION;
use toml::Value;

/// Largest tick count or amplifier the client accepts
const MAX_INT: i64 = i32::MAX as i64;

fn clamp_to_int(value: i64) -> u32 {
    value.clamp(0, MAX_INT) as u32
}

/// Floats are truncated toward zero
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(value) => Some(*value),
        Value::Float(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    }
}

/// Text form of a scalar. Tables and arrays have none.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Integer(value) => Some(value.to_string()),
        Value::Float(value) => Some(value.to_string()),
        Value::Boolean(value) => Some(value.to_string()),
        Value::Datetime(value) => Some(value.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

pub fn string_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(scalar_string)
        .unwrap_or_else(|| default.to_string())
}

/// Every scalar entry of a list, in order. Anything that isn't a list is empty.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values.iter().filter_map(scalar_string).collect(),
        _ => Vec::new(),
    }
}

pub fn is_infinite_token(token: &str) -> bool {
    token.eq_ignore_ascii_case("infinite") || token.eq_ignore_ascii_case("forever")
}

/// Missing, `infinite`, `forever` and unparseable values all mean [`INFINITE_DURATION`].
/// Negative durations become 0. Numeric strings must fit an `i32`, native numbers
/// saturate at `i32::MAX`.
pub fn duration_or_infinite(value: Option<&Value>) -> u32 {
    let Some(value) = value else {
        return INFINITE_DURATION;
    };
    if let Some(ticks) = integer(value) {
        return clamp_to_int(ticks);
    }
    match value {
        Value::String(token) if is_infinite_token(token) => INFINITE_DURATION,
        Value::String(token) => token
            .parse::<i32>()
            .map_or(INFINITE_DURATION, |ticks| clamp_to_int(ticks.into())),
        _ => INFINITE_DURATION,
    }
}

/// Floored at 0, missing or unparseable is 0. A numeric string outside `i32` is
/// unparseable.
pub fn amplifier_or_zero(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::String(token)) => token
            .parse::<i32>()
            .map_or(0, |amplifier| clamp_to_int(amplifier.into())),
        Some(value) => integer(value).map_or(0, clamp_to_int),
        None => 0,
    }
}

/// Native booleans and `true`/`false` in any case. Everything else is `default`.
pub fn bool_or(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Boolean(value)) => *value,
        Some(Value::String(token)) if token.eq_ignore_ascii_case("true") => true,
        Some(Value::String(token)) if token.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use infusion_core::INFINITE_DURATION;
    use toml::Value;

    use super::{amplifier_or_zero, bool_or, duration_or_infinite, string_list, string_or};

    fn string(value: &str) -> Value {
        Value::String(value.to_string())
    }

    #[test]
    fn durations() {
        let values = [
            (None, INFINITE_DURATION),
            (Some(Value::Integer(100)), 100),
            (Some(Value::Integer(0)), 0),
            (Some(Value::Integer(-20)), 0),
            (Some(Value::Integer(i64::MAX)), i32::MAX as u32),
            (Some(Value::Float(99.9)), 99),
            (Some(Value::Float(f64::NAN)), INFINITE_DURATION),
            (Some(string("forever")), INFINITE_DURATION),
            (Some(string("INFINITE")), INFINITE_DURATION),
            (Some(string("250")), 250),
            (Some(string("+250")), 250),
            (Some(string("-5")), 0),
            (Some(string("2147483647")), i32::MAX as u32),
            (Some(string("9999999999")), INFINITE_DURATION),
            (Some(string("-9999999999")), INFINITE_DURATION),
            (Some(string(" 250")), INFINITE_DURATION),
            (Some(string("1.5")), INFINITE_DURATION),
            (Some(string("soon")), INFINITE_DURATION),
            (Some(Value::Boolean(true)), INFINITE_DURATION),
            (Some(Value::Array(vec![])), INFINITE_DURATION),
        ];

        for (value, expected) in values {
            assert_eq!(duration_or_infinite(value.as_ref()), expected, "{value:?}");
        }
    }

    #[test]
    fn amplifiers() {
        let values = [
            (None, 0),
            (Some(Value::Integer(3)), 3),
            (Some(Value::Integer(-3)), 0),
            (Some(Value::Float(2.7)), 2),
            (Some(string("4")), 4),
            (Some(string("-4")), 0),
            (Some(string("9999999999")), 0),
            (Some(Value::Integer(9_999_999_999)), i32::MAX as u32),
            (Some(string("four")), 0),
            (Some(Value::Boolean(true)), 0),
        ];

        for (value, expected) in values {
            assert_eq!(amplifier_or_zero(value.as_ref()), expected, "{value:?}");
        }
    }

    #[test]
    fn booleans() {
        let values = [
            (None, true, true),
            (None, false, false),
            (Some(Value::Boolean(false)), true, false),
            (Some(Value::Boolean(true)), false, true),
            (Some(string("TRUE")), false, true),
            (Some(string("False")), true, false),
            // typos keep the default instead of turning into false
            (Some(string("nope")), true, true),
            (Some(string("yes")), false, false),
            (Some(Value::Integer(1)), false, false),
        ];

        for (value, default, expected) in values {
            assert_eq!(bool_or(value.as_ref(), default), expected, "{value:?}");
        }
    }

    #[test]
    fn strings() {
        assert_eq!(string_or(None, "id"), "id");
        assert_eq!(string_or(Some(&string("Name")), "id"), "Name");
        assert_eq!(string_or(Some(&Value::Integer(7)), "id"), "7");
        assert_eq!(string_or(Some(&Value::Array(vec![])), "id"), "id");

        let list = Value::Array(vec![string("a"), Value::Integer(2), Value::Array(vec![])]);
        assert_eq!(string_list(Some(&list)), ["a", "2"]);
        assert!(string_list(Some(&string("a"))).is_empty());
        assert!(string_list(None).is_empty());
    }
}
