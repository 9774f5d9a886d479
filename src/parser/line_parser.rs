//! Classifies one source line into a [`LineDescriptor`]: `.define`, `.data`,
//! `.string`, `.entry`, `.extern`, or one of the 16 command mnemonics, each
//! with its own operand-count and punctuation rules.

use crate::error::ParseError;
use crate::model::line::{DataValue, DirectiveKind, LineDescriptor, LineKind, ParsedCommand};
use crate::model::opcode::Opcode;
use crate::parser::numeral::parse_integer;
use crate::parser::operand_parser::parse_operand;
use crate::reserved::{is_reserved_word, is_syntactically_valid_name, is_valid_name_shape};

fn first_token(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

fn after_first_token(s: &str) -> &str {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => s[i..].trim_start(),
        None => "",
    }
}

fn validate_symbol_name(name: &str, max_len: usize) -> Result<(), ParseError> {
    if name.len() > max_len {
        return Err(ParseError::SymbolTooLong(name.to_string(), max_len));
    }
    if !is_valid_name_shape(name, max_len) {
        return Err(ParseError::SyntaxError(format!("invalid symbol name '{name}'")));
    }
    if is_reserved_word(name) {
        return Err(ParseError::ReservedWordAsSymbol(name.to_string()));
    }
    Ok(())
}

fn parse_constant_def(rest: &str, max_symbol_length: usize) -> Result<(String, i16), ParseError> {
    let eq_idx = rest.find('=').ok_or(ParseError::MissingAssignment)?;
    let name = rest[..eq_idx].trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(ParseError::SyntaxError(format!("invalid constant name '{name}'")));
    }
    validate_symbol_name(name, max_symbol_length)?;

    let value_part = rest[eq_idx + 1..].trim();
    let mut tokens = value_part.split_whitespace();
    let value_token = tokens.next().ok_or(ParseError::MissingOperand)?;
    if let Some(extra) = tokens.next() {
        return Err(ParseError::RedundantCharacters(extra.to_string()));
    }
    let value = parse_integer(value_token)?;
    Ok((name.to_string(), value))
}

fn parse_data_list(rest: &str) -> Result<Vec<DataValue>, ParseError> {
    let trimmed = rest.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingOperand);
    }
    if trimmed.starts_with(',') || trimmed.ends_with(',') {
        return Err(ParseError::SyntaxError("leading or trailing comma in .data list".to_string()));
    }
    let mut values = Vec::new();
    for part in trimmed.split(',') {
        let token = part.trim();
        if token.is_empty() {
            return Err(ParseError::SyntaxError("empty value between commas in .data list".to_string()));
        }
        if let Ok(v) = parse_integer(token) {
            values.push(DataValue::Literal(v));
        } else if is_syntactically_valid_name(token) {
            values.push(DataValue::Constant(token.to_string()));
        } else {
            return Err(ParseError::SyntaxError(format!("invalid value '{token}' in .data list")));
        }
    }
    Ok(values)
}

fn parse_string_literal(rest: &str) -> Result<String, ParseError> {
    let trimmed = rest.trim_start();
    if !trimmed.starts_with('"') {
        return Err(ParseError::SyntaxError("expected a quoted string".to_string()));
    }
    let body = &trimmed[1..];
    match body.find('"') {
        None => Err(ParseError::UnterminatedString),
        Some(close_idx) => {
            let content = &body[..close_idx];
            let after = body[close_idx + 1..].trim();
            if !after.is_empty() {
                return Err(ParseError::RedundantCharacters(after.to_string()));
            }
            Ok(content.to_string())
        }
    }
}

fn parse_single_label(rest: &str) -> Result<String, ParseError> {
    let trimmed = rest.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingOperand);
    }
    let mut tokens = trimmed.split_whitespace();
    let name = tokens.next().unwrap();
    if let Some(extra) = tokens.next() {
        return Err(ParseError::RedundantCharacters(extra.to_string()));
    }
    Ok(name.to_string())
}

fn parse_command_operands(opcode: Opcode, rest: &str) -> Result<ParsedCommand, ParseError> {
    let rest = rest.trim();
    match opcode.operand_count() {
        0 => {
            if !rest.is_empty() {
                return Err(ParseError::RedundantCharacters(rest.to_string()));
            }
            Ok(ParsedCommand { opcode, source: None, target: None })
        }
        1 => {
            if rest.is_empty() {
                return Err(ParseError::MissingOperand);
            }
            if rest.contains(',') {
                return Err(ParseError::RedundantCharacters(rest.to_string()));
            }
            let operand = parse_operand(rest)?;
            Ok(ParsedCommand { opcode, source: None, target: Some(operand) })
        }
        2 => {
            if !rest.contains(',') {
                if rest.split_whitespace().count() >= 2 {
                    return Err(ParseError::MissingComma);
                }
                return Err(ParseError::MissingOperand);
            }
            let (first, second) = rest.split_once(',').unwrap();
            let first = first.trim();
            let second = second.trim();
            if first.is_empty() || second.is_empty() {
                return Err(ParseError::MissingOperand);
            }
            if second.contains(',') {
                return Err(ParseError::RedundantCharacters(second.to_string()));
            }
            let source = parse_operand(first)?;
            let target = parse_operand(second)?;
            Ok(ParsedCommand { opcode, source: Some(source), target: Some(target) })
        }
        _ => unreachable!("no opcode takes more than two operands"),
    }
}

/// Classifies one macro-expanded source line into a [`LineDescriptor`].
pub fn parse_line(raw_line: &str, line_number: usize, max_line_length: usize, max_symbol_length: usize) -> Result<LineDescriptor, ParseError> {
    if raw_line.len() > max_line_length {
        return Err(ParseError::SyntaxError(format!("line exceeds the maximum length of {max_line_length} characters")));
    }

    let trimmed = raw_line.trim_start();
    let raw_line = raw_line.to_string();

    if trimmed.is_empty() {
        return Ok(LineDescriptor { raw_line, line_number, label: None, kind: LineKind::Empty });
    }
    if trimmed.starts_with(';') {
        return Ok(LineDescriptor { raw_line, line_number, label: None, kind: LineKind::Comment });
    }

    if first_token(trimmed) == ".define" {
        let (name, value) = parse_constant_def(after_first_token(trimmed), max_symbol_length)?;
        return Ok(LineDescriptor { raw_line, line_number, label: None, kind: LineKind::ConstantDef { name, value } });
    }

    let mut rest = trimmed;
    let mut label = None;
    let head = first_token(rest);
    if let Some(candidate) = head.strip_suffix(':') {
        validate_symbol_name(candidate, max_symbol_length)?;
        label = Some(candidate.to_string());
        rest = after_first_token(rest);
    }

    if rest.is_empty() {
        return Err(ParseError::SyntaxError("expected a directive or command after label".to_string()));
    }

    let word = first_token(rest);
    let body = after_first_token(rest);

    let kind = match word {
        ".data" => LineKind::Directive(DirectiveKind::Data(parse_data_list(body)?)),
        ".string" => LineKind::Directive(DirectiveKind::Str(parse_string_literal(body)?)),
        ".entry" => LineKind::Directive(DirectiveKind::Entry(parse_single_label(body)?)),
        ".extern" => LineKind::Directive(DirectiveKind::Extern(parse_single_label(body)?)),
        _ => {
            let opcode = Opcode::from_mnemonic(word).ok_or_else(|| ParseError::SyntaxError(format!("unknown instruction or directive '{word}'")))?;
            LineKind::Command(parse_command_operands(opcode, body)?)
        }
    };

    Ok(LineDescriptor { raw_line, line_number, label, kind })
}
