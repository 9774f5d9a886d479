//! One classified source line, represented as an explicit `LineKind` sum type
//! rather than a flat struct with a "which field is live" discriminant.

use crate::model::opcode::Opcode;
use crate::model::operand::Operand;

/// A parsed command line, ready for sizing in the first pass and encoding in
/// the second.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub opcode: Opcode,
    pub source: Option<Operand>,
    pub target: Option<Operand>,
}

impl ParsedCommand {
    /// Size in words per the command-size rule: base 1 word; if both operands
    /// are registers they share one extra word; otherwise each operand
    /// contributes its own `word_count`.
    pub fn size_in_words(&self) -> u16 {
        let both_registers = matches!(
            (&self.source, &self.target),
            (Some(Operand::Register(_)), Some(Operand::Register(_)))
        );
        if both_registers {
            return 2;
        }
        let mut words = 1;
        if let Some(op) = &self.source {
            words += op.word_count();
        }
        if let Some(op) = &self.target {
            words += op.word_count();
        }
        words
    }
}

/// One value in a `.data` directive's comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    Literal(i16),
    Constant(String),
}

/// The directive-specific payload of a `Directive` line.
#[derive(Debug, Clone)]
pub enum DirectiveKind {
    Data(Vec<DataValue>),
    Str(String),
    Entry(String),
    Extern(String),
}

/// What kind of statement a source line contains, after classification.
#[derive(Debug, Clone)]
pub enum LineKind {
    Empty,
    Comment,
    ConstantDef { name: String, value: i16 },
    Directive(DirectiveKind),
    Command(ParsedCommand),
}

/// One fully classified source line.
#[derive(Debug, Clone)]
pub struct LineDescriptor {
    pub raw_line: String,
    pub line_number: usize,
    pub label: Option<String>,
    pub kind: LineKind,
}
