//! The elimination parser: ordered, unambiguous field extraction.

use tracing::debug;

use crate::models::pack::PackRecord;

use super::rules::{normalize_expiry, scan_expiry, split_batch_serial, take_gtin};

/// Default century base for two-digit years. GS1 expiry dates are
/// near-future, so a fixed 2000 offset beats a sliding window.
const DEFAULT_CENTURY_BASE: i32 = 2000;

/// Parser for unseparated GS1 element strings carrying AIs 01, 17, 10, 21.
///
/// The AI tokens are not unique substrings — "10", "17" and "21" can occur
/// inside another field's free-form value — so the parser removes fields by
/// process of elimination, in an order where each extraction is unambiguous
/// given what has already been peeled off: the fixed-position 01 anchor
/// first, then the first structurally valid 17 date block, then an
/// order-sensitive 10/21 split of whatever is left.
///
/// Parsing is a pure function of the input; the parser holds only
/// configuration and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct EliminationParser {
    /// Century base added to the two-digit expiry year.
    century_base: i32,
}

impl EliminationParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            century_base: DEFAULT_CENTURY_BASE,
        }
    }

    /// Set the century base for two-digit expiry years.
    pub fn with_century_base(mut self, base: i32) -> Self {
        self.century_base = base;
        self
    }

    /// Parse one pack code into a record.
    ///
    /// Never returns an error: each stage that fails leaves its fields
    /// absent and stops the pipeline, and the record reports
    /// `is_valid = false`. Which fields survived tells the caller which
    /// stage failed.
    pub fn parse(&self, code: &str) -> PackRecord {
        let mut record = PackRecord::default();

        let Some((gtin, after_gtin)) = take_gtin(code) else {
            debug!("no AI 01 anchor at start of code");
            return record;
        };
        record.gtin = Some(gtin);

        let Some(scan) = scan_expiry(after_gtin) else {
            debug!("no structurally valid AI 17 block in remainder");
            return record;
        };
        let Some(expiry) = normalize_expiry(&scan.raw, self.century_base) else {
            debug!(raw = %scan.raw, "AI 17 block does not denote a real date");
            return record;
        };
        record.expiry_date = Some(expiry);

        let Some((batch, serial)) = split_batch_serial(&scan.remainder) else {
            debug!("AI 10 or AI 21 marker missing after date removal");
            return record;
        };
        record.batch_number = Some(batch);
        record.serial_number = Some(serial);

        record.is_valid = record.has_all_fields();
        debug!(valid = record.is_valid, "pack code parsed");
        record
    }
}

impl Default for EliminationParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a pack code with default parser settings.
pub fn parse_pack(code: &str) -> PackRecord {
    EliminationParser::new().parse(code)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_round_trip_sample_code() {
        let record = parse_pack("01062810860101121727040110114487921215645645465456");

        assert_eq!(record.gtin.as_deref(), Some("06281086010112"));
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2027, 4, 1));
        assert_eq!(record.batch_number.as_deref(), Some("1144879"));
        assert_eq!(record.serial_number.as_deref(), Some("215645645465456"));
        assert!(record.is_valid);
    }

    #[test]
    fn test_validity_rederivable_from_presence() {
        let codes = [
            "01062810860101121727040110114487921215645645465456",
            "99062810860101121727040110AB21CD",
            "0106281086010112",
            "010628108601011210ABC21DEF",
            "01062810860101121727040110ONLYBATCH",
        ];
        for code in codes {
            let record = parse_pack(code);
            assert_eq!(record.is_valid, record.has_all_fields(), "code {code}");
        }
    }

    #[test]
    fn test_malformed_prefix_populates_nothing() {
        let record = parse_pack("21062810860101121727040110AB");
        assert_eq!(record, PackRecord::default());
        assert!(!record.is_valid);
    }

    #[test]
    fn test_no_valid_date_keeps_only_gtin() {
        // The remainder's only "17" is followed by month 88.
        let record = parse_pack("01062810860101121799889910ABC");
        assert_eq!(record.gtin.as_deref(), Some("06281086010112"));
        assert!(record.expiry_date.is_none());
        assert!(record.batch_number.is_none());
        assert!(record.serial_number.is_none());
        assert!(!record.is_valid);
    }

    #[test]
    fn test_scanner_prefers_later_valid_block() {
        // "17998899" fails the month check; the genuine block follows and
        // its removal leaves both markers intact.
        let record = parse_pack("0106281086010112179988991725031510B21S");
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(record.batch_number.as_deref(), Some("B"));
        assert_eq!(record.serial_number.as_deref(), Some("S"));
        assert!(record.is_valid);
    }

    #[test]
    fn test_missing_serial_marker_invalidates() {
        let record = parse_pack("01062810860101121727040110ONLYBATCH");
        assert_eq!(record.gtin.as_deref(), Some("06281086010112"));
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2027, 4, 1));
        assert!(record.batch_number.is_none());
        assert!(record.serial_number.is_none());
        assert!(!record.is_valid);
        assert_eq!(
            record.missing_fields(),
            vec!["batch_number", "serial_number"]
        );
    }

    #[test]
    fn test_splitter_order_independence() {
        let a = parse_pack("01062810860101121727040110LOT4521SER9");
        let b = parse_pack("01062810860101121727040121SER910LOT45");
        assert_eq!(a.batch_number, b.batch_number);
        assert_eq!(a.serial_number, b.serial_number);
        assert_eq!(a.batch_number.as_deref(), Some("LOT45"));
        assert_eq!(a.serial_number.as_deref(), Some("SER9"));
    }

    #[test]
    fn test_day_zero_expiry_normalizes_to_month_end() {
        let record = parse_pack("01062810860101121724020010L21S");
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(record.is_valid);
    }

    #[test]
    fn test_unreal_date_stops_after_gtin() {
        // Day 31 passes the range check but June has 30 days.
        let record = parse_pack("01062810860101121725063110B21S");
        assert_eq!(record.gtin.as_deref(), Some("06281086010112"));
        assert!(record.expiry_date.is_none());
        assert!(record.batch_number.is_none());
        assert!(!record.is_valid);
    }

    #[test]
    fn test_empty_batch_and_serial_are_valid() {
        let record = parse_pack("0106281086010112172704011021");
        assert_eq!(record.batch_number.as_deref(), Some(""));
        assert_eq!(record.serial_number.as_deref(), Some(""));
        assert!(record.is_valid);
    }

    #[test]
    fn test_century_base_is_configurable() {
        let parser = EliminationParser::new().with_century_base(1900);
        let record = parser.parse("01062810860101121727040110L21S");
        assert_eq!(record.expiry_date, NaiveDate::from_ymd_opt(1927, 4, 1));
    }

    #[test]
    fn test_non_ascii_input_fails_structurally() {
        let record = parse_pack("01日本語のテキスト123456");
        assert_eq!(record, PackRecord::default());
        assert!(!record.is_valid);
    }
}
