//! One `thiserror` enum per pipeline phase.
//!
//! Every error here is attributable to a file and, where available, a source
//! line; [`crate::diagnostics`] is responsible for rendering that context for
//! a human. A phase continues collecting these into a `Vec` rather than
//! aborting on the first one, per the error-collection policy: a file with
//! any entry in that vector produces no output artifacts.

use thiserror::Error;

/// Errors raised while expanding `mcr`/`endmcr` macro blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacroError {
    #[error("'{0}' is a reserved word and cannot be used as a macro name")]
    InvalidMacroName(String),
}

/// Errors raised while lexing and parsing a single line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error: {0}")]
    SyntaxError(String),
    #[error("'{0}' is a reserved word and cannot be used as a symbol")]
    ReservedWordAsSymbol(String),
    #[error("symbol '{0}' exceeds the maximum length of {1} characters")]
    SymbolTooLong(String, usize),
    #[error("illegal constant value: {0}")]
    IllegalConstantValue(String),
    #[error("missing '=' in constant definition")]
    MissingAssignment,
    #[error("missing operand")]
    MissingOperand,
    #[error("missing comma between operands")]
    MissingComma,
    #[error("redundant characters after end of statement: '{0}'")]
    RedundantCharacters(String),
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Errors raised while building the symbol table and sizing commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("symbol '{0}' is already defined")]
    SymbolRedefinition(String),
    #[error("illegal addressing mode for '{opcode}': {detail}")]
    IllegalAddressing { opcode: String, detail: String },
    #[error("entry '{0}' was declared but never defined")]
    UndefinedEntry(String),
    /// Not named directly in the original error taxonomy: a `.data` value or
    /// constant reference naming a `.define` that has not been seen yet. The
    /// first pass needs the constant's numeric value immediately to size the
    /// data image, so this can't wait for the second pass the way a label
    /// reference can.
    #[error("constant '{0}' is not defined")]
    UndefinedConstant(String),
}

/// Errors raised while resolving symbolic references into machine words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),
    #[error("symbol '{0}' is declared both .entry and .extern")]
    EntryIsExternConflict(String),
}

/// Errors raised while reading input or writing output artifacts.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not access '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
