//! Parses a single already comma-split operand token into one of the four
//! addressing-mode shapes: `#value` immediate, `r0..r7` register,
//! `name[index]` fixed-index, or a bare label for direct addressing.

use crate::error::ParseError;
use crate::model::operand::{ImmediateValue, Operand};
use crate::parser::numeral::parse_integer;
use crate::reserved::is_syntactically_valid_name;

fn parse_literal_or_constant(token: &str) -> Result<ImmediateValue, ParseError> {
    if let Ok(value) = parse_integer(token) {
        return Ok(ImmediateValue::Literal(value));
    }
    if is_syntactically_valid_name(token) {
        return Ok(ImmediateValue::Constant(token.to_string()));
    }
    Err(ParseError::IllegalConstantValue(token.to_string()))
}

fn parse_register(token: &str) -> Option<u8> {
    let bytes = token.as_bytes();
    if bytes.len() == 2 && bytes[0] == b'r' && bytes[1].is_ascii_digit() {
        let n = bytes[1] - b'0';
        if n <= 7 {
            return Some(n);
        }
    }
    None
}

/// Parses one operand token (already comma-split and trimmed).
pub fn parse_operand(token: &str) -> Result<Operand, ParseError> {
    if token.is_empty() {
        return Err(ParseError::MissingOperand);
    }

    if let Some(rest) = token.strip_prefix('#') {
        if rest.is_empty() {
            return Err(ParseError::IllegalConstantValue(token.to_string()));
        }
        return Ok(Operand::Immediate(parse_literal_or_constant(rest)?));
    }

    if let Some(reg) = parse_register(token) {
        return Ok(Operand::Register(reg));
    }

    if let Some(bracket_start) = token.find('[') {
        if !token.ends_with(']') {
            return Err(ParseError::SyntaxError(format!("unterminated index in operand '{token}'")));
        }
        let label = &token[..bracket_start];
        let index_str = &token[bracket_start + 1..token.len() - 1];
        if !is_syntactically_valid_name(label) {
            return Err(ParseError::SyntaxError(format!("invalid label in fixed-index operand '{token}'")));
        }
        let index = parse_literal_or_constant(index_str)?;
        return Ok(Operand::FixedIndex { label: label.to_string(), index });
    }

    if is_syntactically_valid_name(token) {
        return Ok(Operand::Direct(token.to_string()));
    }

    Err(ParseError::SyntaxError(format!("invalid operand '{token}'")))
}
