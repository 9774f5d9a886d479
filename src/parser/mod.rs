//! # Parser
//!
//! Lexical and syntactic analysis of one macro-expanded source line at a
//! time: numeral parsing, operand classification, and the line classifier
//! that ties them together into a [`crate::model::line::LineDescriptor`].

pub mod line_parser;
pub mod numeral;
pub mod operand_parser;

pub use line_parser::parse_line;
