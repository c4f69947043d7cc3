//! Date scanner: AI 17 disambiguation and GS1 expiry normalization.
//!
//! "17" is not a unique token — the digits can sit inside a batch or serial
//! value. The scanner therefore accepts the first occurrence whose following
//! six characters form a structurally plausible YYMMDD value, and skips the
//! rest.

use chrono::NaiveDate;

/// AI prefix for the expiration date.
const EXPIRY_AI: &str = "17";

/// Fixed value length for AI 17 (YYMMDD).
const DATE_LEN: usize = 6;

/// Result of a successful expiry scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryScan {
    /// The six-digit YYMMDD value of the accepted block.
    pub raw: String,
    /// The input with the eight-character "17" block spliced out.
    pub remainder: String,
}

/// Scan left-to-right for the first structurally valid "17" date block.
///
/// A candidate is accepted iff the six characters after the token are all
/// digits with month 01-12 and day 00-31 (day "00" is the GS1 marker for
/// the last day of the month). A failed candidate never advances the scan
/// past its value: the next "17" occurrence may start inside it. On
/// acceptance the block is removed in place — everything after it shifts
/// left — and the shortened remainder is returned alongside the raw value.
pub fn scan_expiry(text: &str) -> Option<ExpiryScan> {
    for (pos, _) in text.match_indices(EXPIRY_AI) {
        let value_start = pos + EXPIRY_AI.len();
        let Some(raw) = text.get(value_start..value_start + DATE_LEN) else {
            continue;
        };
        if !passes_range_check(raw) {
            continue;
        }

        let mut remainder = String::with_capacity(text.len() - EXPIRY_AI.len() - DATE_LEN);
        remainder.push_str(&text[..pos]);
        remainder.push_str(&text[value_start + DATE_LEN..]);
        return Some(ExpiryScan {
            raw: raw.to_string(),
            remainder,
        });
    }

    None
}

/// Structural acceptance test for a candidate YYMMDD value.
///
/// The year is unconstrained; month must be 1-12 and day 0-31. Whether the
/// day exists in that month is settled later by [`normalize_expiry`].
fn passes_range_check(raw: &str) -> bool {
    if raw.len() != DATE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let month: u32 = raw[2..4].parse().unwrap_or(0);
    let day: u32 = raw[4..6].parse().unwrap_or(99);
    (1..=12).contains(&month) && day <= 31
}

/// Normalize an accepted YYMMDD value to a calendar date.
///
/// Day "00" means the last day of that year/month (leap-year aware);
/// otherwise the components are taken as-is. Returns `None` when the day
/// does not exist in the month — the range check allows day 31 in any
/// month, so this is where e.g. June 31st is rejected.
pub fn normalize_expiry(raw: &str, century_base: i32) -> Option<NaiveDate> {
    let year = century_base + raw.get(0..2)?.parse::<i32>().ok()?;
    let month: u32 = raw.get(2..4)?.parse().ok()?;
    let day: u32 = raw.get(4..6)?.parse().ok()?;

    if day == 0 {
        last_day_of_month(year, month)
    } else {
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Last day of the given month via the first of the following month.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
