//! Walks the classified line stream once: builds the symbol table, sizes and
//! collects every command for the second pass, and accumulates the `.data`/
//! `.string` image, whose values must already be known by the time a line is
//! seen.

use std::collections::HashSet;

use crate::error::{EncodeError, SemanticError};
use crate::model::line::{DataValue, DirectiveKind, LineDescriptor, LineKind, ParsedCommand};
use crate::model::symbol::SymbolKind;
use crate::model::unit::TranslationUnit;
use crate::model::word::Word;
use crate::passes::addressing;

/// Everything the second pass and the emitter need from the first.
pub struct FirstPassOutput {
    pub unit: TranslationUnit,
    pub commands: Vec<(usize, ParsedCommand)>,
    pub semantic_errors: Vec<(Option<usize>, SemanticError)>,
    pub encode_errors: Vec<(Option<usize>, EncodeError)>,
    pub warnings: Vec<(Option<usize>, String)>,
}

fn resolve_constant(unit: &TranslationUnit, name: &str) -> Option<i16> {
    unit.constants.get(name).copied()
}

/// Runs the first pass over every already-classified line of one file.
pub fn run(lines: &[LineDescriptor], code_origin: u16) -> FirstPassOutput {
    let mut unit = TranslationUnit::new(code_origin);
    let mut commands = Vec::new();
    let mut semantic_errors = Vec::new();
    let mut encode_errors = Vec::new();
    let mut warnings = Vec::new();
    let mut entry_names: HashSet<String> = HashSet::new();
    let mut extern_names: HashSet<String> = HashSet::new();

    for line in lines {
        match &line.kind {
            LineKind::Empty | LineKind::Comment => {}

            LineKind::ConstantDef { name, value } => {
                if let Err(e) = unit.symbols.insert(name.clone(), SymbolKind::DefinedConstant, *value as i32) {
                    semantic_errors.push((Some(line.line_number), e));
                    continue;
                }
                unit.constants.insert(name.clone(), *value);
            }

            LineKind::Directive(DirectiveKind::Data(values)) => {
                if let Some(label) = &line.label {
                    if let Err(e) = unit.symbols.define_label(label, true, unit.dc as i32) {
                        semantic_errors.push((Some(line.line_number), e));
                    }
                }
                for value in values {
                    match value {
                        DataValue::Literal(n) => {
                            unit.data_image.push(Word::new(*n as u16));
                            unit.dc += 1;
                        }
                        DataValue::Constant(name) => match resolve_constant(&unit, name) {
                            Some(n) => {
                                unit.data_image.push(Word::new(n as u16));
                                unit.dc += 1;
                            }
                            None => semantic_errors.push((Some(line.line_number), SemanticError::UndefinedConstant(name.clone()))),
                        },
                    }
                }
            }

            LineKind::Directive(DirectiveKind::Str(text)) => {
                if let Some(label) = &line.label {
                    if let Err(e) = unit.symbols.define_label(label, true, unit.dc as i32) {
                        semantic_errors.push((Some(line.line_number), e));
                    }
                }
                for byte in text.bytes() {
                    unit.data_image.push(Word::new(byte as u16));
                    unit.dc += 1;
                }
                unit.data_image.push(Word::new(0));
                unit.dc += 1;
            }

            LineKind::Directive(DirectiveKind::Entry(name)) => {
                if let Some(label) = &line.label {
                    warnings.push((Some(line.line_number), format!("label '{label}' on a .entry line is discarded")));
                }
                entry_names.insert(name.clone());
                if extern_names.contains(name) {
                    encode_errors.push((Some(line.line_number), EncodeError::EntryIsExternConflict(name.clone())));
                }
                match unit.symbols.get(name) {
                    None => {
                        if let Err(e) = unit.symbols.insert(name.clone(), SymbolKind::TempEntry, 0) {
                            semantic_errors.push((Some(line.line_number), e));
                        }
                    }
                    Some(existing) => {
                        let promoted = match existing.kind {
                            SymbolKind::CodeLabel => Some(SymbolKind::EntryCodeLabel),
                            SymbolKind::DataLabel => Some(SymbolKind::EntryDataLabel),
                            SymbolKind::TempEntry | SymbolKind::EntryCodeLabel | SymbolKind::EntryDataLabel => None,
                            SymbolKind::External | SymbolKind::DefinedConstant => {
                                semantic_errors.push((Some(line.line_number), SemanticError::SymbolRedefinition(name.clone())));
                                None
                            }
                        };
                        if let Some(kind) = promoted {
                            unit.symbols.promote_existing_to_entry(name, kind).expect("symbol presence checked above");
                        }
                    }
                }
            }

            LineKind::Directive(DirectiveKind::Extern(name)) => {
                if let Some(label) = &line.label {
                    warnings.push((Some(line.line_number), format!("label '{label}' on a .extern line is discarded")));
                }
                extern_names.insert(name.clone());
                if entry_names.contains(name) {
                    encode_errors.push((Some(line.line_number), EncodeError::EntryIsExternConflict(name.clone())));
                }
                match unit.symbols.get(name) {
                    None => {
                        if let Err(e) = unit.symbols.insert(name.clone(), SymbolKind::External, 0) {
                            semantic_errors.push((Some(line.line_number), e));
                        }
                    }
                    Some(existing) if existing.kind == SymbolKind::External => {}
                    Some(_) => semantic_errors.push((Some(line.line_number), SemanticError::SymbolRedefinition(name.clone()))),
                }
            }

            LineKind::Command(cmd) => {
                if let Err(e) = addressing::validate(cmd) {
                    semantic_errors.push((Some(line.line_number), e));
                }
                if let Some(label) = &line.label {
                    if let Err(e) = unit.symbols.define_label(label, false, unit.ic as i32) {
                        semantic_errors.push((Some(line.line_number), e));
                    }
                }
                commands.push((line.line_number, cmd.clone()));
                unit.ic += cmd.size_in_words();
            }
        }
    }

    let final_ic = unit.ic;
    match unit.symbols.finalize(final_ic) {
        Ok(entries) => unit.entries = entries,
        Err(errs) => semantic_errors.extend(errs.into_iter().map(|e| (None, e))),
    }

    FirstPassOutput { unit, commands, semantic_errors, encode_errors, warnings }
}
