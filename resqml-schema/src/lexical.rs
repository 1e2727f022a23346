//! XML Schema lexical forms for the simple types used on the wire.

/// Parses `xs:long`.
pub(crate) fn parse_long(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parses `xs:double`, including `INF`, `-INF` and `NaN`.
pub(crate) fn parse_double(text: &str) -> Option<f64> {
    match text {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if !text.is_empty()
            && text
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
        {
            text.parse().ok()
        }
        _ => None,
    }
}

/// Parses `xs:boolean`.
pub(crate) fn parse_boolean(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Formats `xs:double` so that parsing it back is bit-exact.
pub(crate) fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        format!("{value:?}")
    }
}

/// Formats `xs:boolean`.
pub(crate) fn format_boolean(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_special_values() {
        assert_eq!(parse_double("INF"), Some(f64::INFINITY));
        assert_eq!(parse_double("-INF"), Some(f64::NEG_INFINITY));
        assert!(parse_double("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_double("inf"), None);
        assert_eq!(parse_double("infinity"), None);
        assert_eq!(parse_double(""), None);
    }

    #[test]
    fn test_double_format_round_trip() {
        for value in [0.1, -0.0, 1e300, 5e-324, 1.0, f64::MAX, -2.5] {
            let text = format_double(value);
            let back = parse_double(&text).expect("valid lexical form");
            assert_eq!(back.to_bits(), value.to_bits(), "{text}");
        }
        assert_eq!(format_double(f64::NEG_INFINITY), "-INF");
        assert_eq!(format_double(f64::NAN), "NaN");
    }

    #[test]
    fn test_boolean_forms() {
        assert_eq!(parse_boolean("1"), Some(true));
        assert_eq!(parse_boolean("false"), Some(false));
        assert_eq!(parse_boolean("True"), None);
        assert_eq!(format_boolean(true), "true");
    }

    #[test]
    fn test_long_forms() {
        assert_eq!(parse_long("+42"), Some(42));
        assert_eq!(parse_long("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_long("9223372036854775808"), None);
        assert_eq!(parse_long("1.0"), None);
    }
}
