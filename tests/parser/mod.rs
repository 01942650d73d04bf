//! Parser tests

pub mod tests_parser;
