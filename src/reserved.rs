//! Read-only static tables consulted by the preprocessor, the line parser, and
//! the first pass whenever a new name (macro, constant, label) needs to be
//! checked against the names the language itself already claims.

use crate::model::opcode::Opcode;

/// Directive and preprocessor keywords that a symbol name must never collide
/// with, independent of their leading dot.
const DIRECTIVE_KEYWORDS: &[&str] = &["define", "data", "string", "entry", "extern"];

const PREPROCESSOR_KEYWORDS: &[&str] = &["mcr", "endmcr"];

/// True if `name` is an opcode mnemonic, case-sensitively (mnemonics are
/// always lowercase in source).
pub fn is_opcode(name: &str) -> bool {
    Opcode::from_mnemonic(name).is_some()
}

/// True if `name` matches `r0`..`r7`.
pub fn is_register_name(name: &str) -> bool {
    matches!(name, "r0" | "r1" | "r2" | "r3" | "r4" | "r5" | "r6" | "r7")
}

/// True if `name` is a directive or preprocessor keyword.
pub fn is_directive_or_preprocessor_keyword(name: &str) -> bool {
    DIRECTIVE_KEYWORDS.contains(&name) || PREPROCESSOR_KEYWORDS.contains(&name)
}

/// True if `name` is reserved by the language in any way a user-chosen symbol,
/// constant, or macro name is forbidden from using.
pub fn is_reserved_word(name: &str) -> bool {
    is_opcode(name) || is_register_name(name) || is_directive_or_preprocessor_keyword(name)
}

/// Maximum length, in characters, of a symbol, constant, or macro name.
pub const MAX_SYMBOL_LENGTH: usize = 31;

/// Maximum length, in characters, of a source line (excluding the newline).
pub const MAX_LINE_LENGTH: usize = 80;

/// Validates the syntactic shape of a symbol name against an explicit length
/// ceiling: starts with an alphabetic character, the rest alphanumeric.
/// Does not check reservation or prior use. Callers combine this with
/// [`is_reserved_word`] and a symbol-table lookup.
pub fn is_valid_name_shape(name: &str, max_len: usize) -> bool {
    if name.is_empty() || name.len() > max_len {
        return false;
    }
    let mut chars = name.chars();
    let first_ok = chars.next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false);
    first_ok && chars.all(|c| c.is_ascii_alphanumeric())
}

/// [`is_valid_name_shape`] against the default ceiling of 31
/// characters.
pub fn is_syntactically_valid_name(name: &str) -> bool {
    is_valid_name_shape(name, MAX_SYMBOL_LENGTH)
}
