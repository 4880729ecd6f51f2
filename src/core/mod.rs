//! The validation and diagnostics engine.
//!
//! Pure, synchronous, no I/O. Everything here is a function of its inputs
//! plus immutable process-wide initialization state.

pub mod deprecation;
pub mod dictionary;
pub mod formatter;
pub mod help;
pub mod main_validator;
pub mod message;
pub mod parser;
pub mod similarity;
pub mod sub_validator;
pub mod types;

pub use deprecation::{detect as detect_deprecation, migration_message};
pub use formatter::{Formatter, FormatterConfig};
pub use main_validator::{validate_main, validate_main_line};
pub use message::{generate_message, MessageKind, MessageParams};
pub use parser::Parser;
pub use similarity::{suggest_main, suggest_sub, SimilarityConfig};
pub use sub_validator::{validate_sub, validate_sub_line};
pub use types::*;
