use serde_json::Value;

/// Reads a loosely typed JSON value as a number.
///
/// Recipe documents are hand-edited and often store numbers as strings.
/// Returns `None` for anything that is not a number or a numeric string.
pub(crate) fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Returns the value if it is finite and strictly positive.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn reads_numbers_and_numeric_strings() {
        assert_eq!(loose_number(&json!(2.5)), Some(2.5));
        assert_eq!(loose_number(&json!(" 40 ")), Some(40.0));
        assert_eq!(loose_number(&json!("n/a")), None);
        assert_eq!(loose_number(&json!(null)), None);
        assert_eq!(loose_number(&json!([1])), None);
    }

    #[test]
    fn positive_rejects_zero_and_non_finite() {
        assert_eq!(positive(Some(3.0)), Some(3.0));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-1.0)), None);
        assert_eq!(positive(Some(f64::NAN)), None);
        assert_eq!(positive(None), None);
    }
}
