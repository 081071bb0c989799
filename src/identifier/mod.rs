mod parser;

pub use parser::{ParseError, parse_identifier};
