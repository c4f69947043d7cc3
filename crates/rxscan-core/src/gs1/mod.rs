//! Elimination parsing of unseparated GS1 element strings.

pub mod parser;
pub mod rules;

pub use parser::{EliminationParser, parse_pack};
