//! Prefix anchor: AI 01 and its fixed-length GTIN value.

/// AI prefix for the product identifier.
const GTIN_AI: &str = "01";

/// Fixed value length for AI 01.
const GTIN_LEN: usize = 14;

/// Extract the GTIN from the start of a raw pack code.
///
/// The code must begin with the literal "01" followed by at least 14
/// characters. Returns the 14-character GTIN and the remainder after the
/// fixed window, or `None` when the anchor is missing or the code is too
/// short — in which case the whole parse stops.
pub fn take_gtin(code: &str) -> Option<(String, &str)> {
    let rest = code.strip_prefix(GTIN_AI)?;
    let gtin = rest.get(..GTIN_LEN)?;
    let remainder = rest.get(GTIN_LEN..)?;
    Some((gtin.to_string(), remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_gtin_splits_fixed_window() {
        let (gtin, rest) = take_gtin("0106281086010112172704").unwrap();
        assert_eq!(gtin, "06281086010112");
        assert_eq!(rest, "172704");
    }

    #[test]
    fn test_take_gtin_exact_length_leaves_empty_remainder() {
        let (gtin, rest) = take_gtin("0106281086010112").unwrap();
        assert_eq!(gtin, "06281086010112");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_take_gtin_rejects_wrong_prefix() {
        assert!(take_gtin("2106281086010112").is_none());
        assert!(take_gtin("").is_none());
    }

    #[test]
    fn test_take_gtin_rejects_short_code() {
        assert!(take_gtin("01062810").is_none());
    }

    #[test]
    fn test_take_gtin_handles_multibyte_input() {
        // Slicing goes through `get`, so a char boundary inside the window
        // must fail cleanly rather than panic.
        assert!(take_gtin("01éé").is_none());
    }
}
