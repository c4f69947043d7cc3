//! Data models for parsed pack codes.

pub mod pack;

pub use pack::{PackFields, PackRecord};
