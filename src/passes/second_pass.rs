//! Walks the sized commands from the first pass a second time, now that
//! every label's final address is known, and encodes each into its machine
//! words.

use crate::error::EncodeError;
use crate::model::line::ParsedCommand;
use crate::model::operand::{ImmediateValue, Operand};
use crate::model::symbol::SymbolKind;
use crate::model::unit::TranslationUnit;
use crate::model::word::{Are, Word};

fn resolve_immediate(unit: &TranslationUnit, value: &ImmediateValue) -> Result<i16, EncodeError> {
    match value {
        ImmediateValue::Literal(n) => Ok(*n),
        ImmediateValue::Constant(name) => unit
            .constants
            .get(name)
            .copied()
            .ok_or_else(|| EncodeError::UndefinedSymbol(name.clone())),
    }
}

/// Looks up a label's address and ARE tag, recording an external use if the
/// symbol is `.extern`.
fn resolve_label(unit: &mut TranslationUnit, name: &str, use_address: u16) -> Result<(u16, Are), EncodeError> {
    let symbol = unit.symbols.get(name).ok_or_else(|| EncodeError::UndefinedSymbol(name.to_string()))?;
    match symbol.kind {
        SymbolKind::External => {
            unit.externals.push(crate::model::symbol::NamedAddress { name: name.to_string(), address: use_address });
            Ok((0, Are::External))
        }
        SymbolKind::CodeLabel
        | SymbolKind::DataLabel
        | SymbolKind::EntryCodeLabel
        | SymbolKind::EntryDataLabel => Ok((symbol.address as u16, Are::Relocatable)),
        SymbolKind::TempEntry => Err(EncodeError::UndefinedSymbol(name.to_string())),
        SymbolKind::DefinedConstant => Err(EncodeError::UndefinedSymbol(name.to_string())),
    }
}

fn encode_operand_word(unit: &mut TranslationUnit, operand: &Operand, use_address: u16) -> Result<Vec<Word>, EncodeError> {
    match operand {
        Operand::Immediate(value) => {
            let n = resolve_immediate(unit, value)?;
            Ok(vec![Word::payload_word(n as u16, Are::Absolute)])
        }
        Operand::Direct(name) => {
            let (addr, are) = resolve_label(unit, name, use_address)?;
            Ok(vec![Word::payload_word(addr, are)])
        }
        Operand::FixedIndex { label, index } => {
            let (addr, are) = resolve_label(unit, label, use_address)?;
            let idx = resolve_immediate(unit, index)?;
            Ok(vec![Word::payload_word(addr, are), Word::payload_word(idx as u16, Are::Absolute)])
        }
        Operand::Register(_) => unreachable!("register operands are encoded alongside their sibling, never alone here"),
    }
}

/// Runs the second pass, encoding `commands` into `unit.code_image` and
/// populating `unit.externals`.
pub fn run(unit: &mut TranslationUnit, commands: &[(usize, ParsedCommand)], code_origin: u16) -> Vec<(Option<usize>, EncodeError)> {
    let mut errors = Vec::new();
    let mut ic = code_origin;

    for (line_number, cmd) in commands {
        let source_mode = cmd.source.as_ref().map(|o| o.mode());
        let target_mode = cmd.target.as_ref().map(|o| o.mode());
        let opcode_word = Word::opcode_word(cmd.opcode.number(), source_mode, target_mode);
        unit.code_image.push(opcode_word);
        ic += 1;

        let both_registers = matches!((&cmd.source, &cmd.target), (Some(Operand::Register(_)), Some(Operand::Register(_))));
        if both_registers {
            let (Some(Operand::Register(src)), Some(Operand::Register(tgt))) = (&cmd.source, &cmd.target) else {
                unreachable!()
            };
            unit.code_image.push(Word::register_pair_word(*src, *tgt));
            ic += 1;
            continue;
        }

        if let Some(source) = &cmd.source {
            match source {
                Operand::Register(r) => {
                    unit.code_image.push(Word::register_word(*r, true));
                    ic += 1;
                }
                other => match encode_operand_word(unit, other, ic) {
                    Ok(words) => {
                        ic += words.len() as u16;
                        unit.code_image.extend(words);
                    }
                    Err(e) => errors.push((Some(*line_number), e)),
                },
            }
        }

        if let Some(target) = &cmd.target {
            match target {
                Operand::Register(r) => {
                    unit.code_image.push(Word::register_word(*r, false));
                    ic += 1;
                }
                other => match encode_operand_word(unit, other, ic) {
                    Ok(words) => {
                        ic += words.len() as u16;
                        unit.code_image.extend(words);
                    }
                    Err(e) => errors.push((Some(*line_number), e)),
                },
            }
        }
    }

    errors
}
