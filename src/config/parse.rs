//! Field coercion: one pure function per semantic type.

use crate::error::{Error, Result};
use std::num::IntErrorKind;

const TRUTHY: [&str; 3] = ["true", "1", "yes"];

/// Case-insensitive membership in `{"true", "1", "yes"}`.
///
/// Everything else, including surrounding whitespace, is `false`.
pub fn truthy(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    TRUTHY.contains(&lowered.as_str())
}

/// Base-10 integer. Surrounding ASCII whitespace is ignored.
///
/// Values beyond the 64-bit range are rejected with their own wording.
pub fn integer(var: &'static str, raw: &str) -> Result<i64> {
    raw.trim_ascii().parse().map_err(|e: std::num::ParseIntError| {
        let expected = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                "64-bit integer (out of range)"
            }
            _ => "integer",
        };
        Error::Coercion {
            var,
            value: raw.to_string(),
            expected,
        }
    })
}

/// Decimal number. Surrounding ASCII whitespace is ignored.
pub fn float(var: &'static str, raw: &str) -> Result<f64> {
    raw.trim_ascii().parse().map_err(|_| Error::Coercion {
        var,
        value: raw.to_string(),
        expected: "float",
    })
}

/// Split on `,`, keeping every piece verbatim (no trimming, no filtering).
pub fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_any_case() {
        for raw in ["true", "True", "TRUE", "1", "yes", "Yes", "YES"] {
            assert!(truthy(raw), "{raw} should be true");
        }
    }

    #[test]
    fn truthy_rejects_everything_else() {
        for raw in ["false", "False", "0", "no", "maybe", "", " true", "on", "y"] {
            assert!(!truthy(raw), "{raw:?} should be false");
        }
    }

    #[test]
    fn integer_parses_signed_values() {
        assert_eq!(integer("X", "1800").unwrap(), 1800);
        assert_eq!(integer("X", "-5").unwrap(), -5);
        assert_eq!(integer("X", "+7").unwrap(), 7);
        assert_eq!(integer("X", " 42\n").unwrap(), 42);
    }

    #[test]
    fn integer_failure_names_var_and_value() {
        let err = integer("CACHE_TTL", "abc").unwrap_err();
        match err {
            Error::Coercion {
                var,
                value,
                expected,
            } => {
                assert_eq!(var, "CACHE_TTL");
                assert_eq!(value, "abc");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integer_rejects_decimals_and_empty() {
        assert!(integer("X", "1.5").is_err());
        assert!(integer("X", "").is_err());
        assert!(integer("X", "1_800").is_err());
    }

    #[test]
    fn integer_overflow_is_reported_as_out_of_range() {
        for raw in ["10000000000000000000", "-10000000000000000000"] {
            let err = integer("MAX_LOG_SIZE", raw).unwrap_err();
            let out_of_range = matches!(
                err,
                Error::Coercion { expected, .. } if expected.contains("out of range")
            );
            assert!(out_of_range, "{raw}: {err}");
        }
        let err = integer("X", "abc").unwrap_err();
        assert!(!err.to_string().contains("out of range"));
    }

    #[test]
    fn float_parses_decimal_and_exponent() {
        assert_eq!(float("X", "0.7").unwrap(), 0.7);
        assert_eq!(float("X", "1e-2").unwrap(), 0.01);
        assert_eq!(float("X", "3").unwrap(), 3.0);
        assert!(float("X", "high").is_err());
    }

    #[test]
    fn comma_list_keeps_pieces_verbatim() {
        assert_eq!(comma_list("*"), vec!["*"]);
        assert_eq!(comma_list("a, b"), vec!["a", " b"]);
        assert_eq!(comma_list("a,,a"), vec!["a", "", "a"]);
        assert_eq!(comma_list(""), vec![""]);
    }
}
