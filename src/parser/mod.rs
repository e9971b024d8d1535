pub mod intent_parser;

pub use intent_parser::{QueryIntentParser, DEFAULT_BUDGET};
