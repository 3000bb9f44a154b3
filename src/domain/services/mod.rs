pub mod classifier;
pub mod schedule_parser;

pub use classifier::classify;
pub use schedule_parser::{parse, ParseError};
