use thiserror::Error;

/// Raised when a field of a probe line is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a number: {text:?}")]
pub struct NotNumeric {
    pub text: String,
}

/// Parse a raw field into a float. The text is taken as-is, whitespace included.
pub fn to_float(text: &str) -> Result<f64, NotNumeric> {
    text.parse::<f64>().map_err(|_| NotNumeric { text: text.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(to_float("0"), Ok(0.0));
        assert_eq!(to_float("12.5"), Ok(12.5));
        assert_eq!(to_float("-3"), Ok(-3.0));
        assert_eq!(to_float("1e3"), Ok(1000.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(to_float("xx").unwrap_err().text, "xx");
        assert!(to_float("").is_err());
        assert!(to_float("12%").is_err());
        assert!(to_float(" 1").is_err());
    }

    #[test]
    fn display_round_trip_is_exact() {
        for value in [0.0, 0.1, 1.234_567_890_123, 250.75, f64::MAX, f64::MIN_POSITIVE, -42.0] {
            assert_eq!(to_float(&value.to_string()), Ok(value));
        }
    }
}
