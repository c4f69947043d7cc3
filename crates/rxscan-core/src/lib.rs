//! Core library for pharmaceutical pack-code parsing.
//!
//! This crate provides:
//! - Elimination parsing of unseparated GS1 element strings carrying
//!   AIs 01 (GTIN), 17 (expiry date), 10 (batch) and 21 (serial)
//! - GS1 expiry-date normalization (YYMMDD, day "00" = last day of month)
//! - A fixed-key projection of the parsed record for JSON output

pub mod error;
pub mod gs1;
pub mod models;

pub use error::{Error, Result};
pub use gs1::{EliminationParser, parse_pack};
pub use models::pack::{PackFields, PackRecord};
