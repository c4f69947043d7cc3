//! Parsed pack-code record and its fixed-key projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A parsed pharmaceutical pack code.
///
/// Built once per input by [`EliminationParser`](crate::gs1::EliminationParser)
/// and immutable afterwards; a new input produces a new record. Callers must
/// check [`is_valid`](Self::is_valid) before trusting any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRecord {
    /// Product identifier (GTIN, AI 01), 14 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,

    /// Batch/lot number (AI 10). May be present but empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,

    /// Serial number (AI 21). May be present but empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Expiration date (AI 17), normalized to a real calendar date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// True iff all four fields above are present.
    #[serde(default)]
    pub is_valid: bool,
}

impl PackRecord {
    /// Whether every field the validity gate requires is present.
    pub fn has_all_fields(&self) -> bool {
        self.gtin.is_some()
            && self.batch_number.is_some()
            && self.serial_number.is_some()
            && self.expiry_date.is_some()
    }

    /// Names of the fields that are absent, in extraction order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gtin.is_none() {
            missing.push("gtin");
        }
        if self.expiry_date.is_none() {
            missing.push("expiry_date");
        }
        if self.batch_number.is_none() {
            missing.push("batch_number");
        }
        if self.serial_number.is_none() {
            missing.push("serial_number");
        }
        missing
    }

    /// Project the record onto the fixed reporting keys.
    ///
    /// The date renders as `YYYY-MM-DD`; absent fields render as null.
    pub fn fields(&self) -> PackFields {
        PackFields {
            gtin: self.gtin.clone(),
            serial_number: self.serial_number.clone(),
            batch_number: self.batch_number.clone(),
            expiry_date: self.expiry_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    /// Pretty-printed JSON of the fixed-key projection.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields())?)
    }
}

/// Fixed-key projection of a [`PackRecord`].
///
/// Serializes with the declared key order: GTIN, SN, BN, XD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackFields {
    /// Product identifier.
    #[serde(rename = "GTIN")]
    pub gtin: Option<String>,

    /// Serial number.
    #[serde(rename = "SN")]
    pub serial_number: Option<String>,

    /// Batch/lot number.
    #[serde(rename = "BN")]
    pub batch_number: Option<String>,

    /// Expiration date, ISO `YYYY-MM-DD`.
    #[serde(rename = "XD")]
    pub expiry_date: Option<String>,
}
