//! Per-step extraction rules for the elimination pipeline.
//!
//! Each module implements one pipeline stage on the text the earlier stages
//! left behind: the fixed 01 prefix, the structurally validated 17 date
//! block, and the order-sensitive 10/21 split.

pub mod date;
pub mod prefix;
pub mod split;

pub use date::{ExpiryScan, normalize_expiry, scan_expiry};
pub use prefix::take_gtin;
pub use split::split_batch_serial;
