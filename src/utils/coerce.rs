use serde::{Deserialize, Deserializer};

/// Clamp a raw count into the range the calculator works with.
///
/// `NaN`, infinities and negative values all collapse to 0, so a bad field
/// contributes nothing instead of poisoning the total.
pub fn coerce_non_negative_number(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse the longest leading decimal number in `input`.
///
/// Leading whitespace is skipped and trailing garbage is ignored
/// (`"12.5 TB"` → 12.5). Returns `NaN` when no digits are found.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading integer in `input`, truncating anything after it.
///
/// `"2.5"` → 2, `"12abc"` → 12, `"abc"` → `NaN`.
pub fn parse_int_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return f64::NAN;
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Serde helper for form-style numeric fields.
///
/// Accepts numbers, numeric strings, empty strings, booleans and `null`.
/// Anything that does not read as a number becomes `NaN` and is zeroed by the
/// calculator later.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Number(f64),
        Text(String),
        Flag(bool),
        Other(serde_json::Value),
    }

    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawValue::Number(n)) => n,
        Some(RawValue::Text(text)) => parse_float_prefix(&text),
        Some(RawValue::Flag(_)) | Some(RawValue::Other(_)) | None => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_non_negative_number() {
        assert_eq!(coerce_non_negative_number(3.5), 3.5);
        assert_eq!(coerce_non_negative_number(0.0), 0.0);
        assert_eq!(coerce_non_negative_number(-4.0), 0.0);
        assert_eq!(coerce_non_negative_number(f64::NAN), 0.0);
        assert_eq!(coerce_non_negative_number(f64::INFINITY), 0.0);
        assert_eq!(coerce_non_negative_number(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("  1.25"), 1.25);
        assert_eq!(parse_float_prefix("12.5 TB"), 12.5);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("3."), 3.0);
        assert_eq!(parse_float_prefix("-7"), -7.0);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("30"), 30.0);
        assert_eq!(parse_int_prefix("2.5"), 2.0);
        assert_eq!(parse_int_prefix("12abc"), 12.0);
        assert_eq!(parse_int_prefix(" 8"), 8.0);
        assert_eq!(parse_int_prefix("-3"), -3.0);
        assert!(parse_int_prefix("").is_nan());
        assert!(parse_int_prefix("x1").is_nan());
    }

    #[test]
    fn test_lenient_number() {
        #[derive(Deserialize)]
        struct Field {
            #[serde(default, deserialize_with = "lenient_number")]
            value: f64,
        }

        let parse = |json: &str| serde_json::from_str::<Field>(json).unwrap().value;

        assert_eq!(parse(r#"{"value": 5}"#), 5.0);
        assert_eq!(parse(r#"{"value": "0.75"}"#), 0.75);
        assert!(parse(r#"{"value": ""}"#).is_nan());
        assert!(parse(r#"{"value": null}"#).is_nan());
        assert!(parse(r#"{"value": "n/a"}"#).is_nan());
        assert!(parse(r#"{"value": [1, 2]}"#).is_nan());
        assert_eq!(parse(r#"{}"#), 0.0);
    }
}
