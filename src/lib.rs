//! A two-pass assembler for a 16-opcode, 8-register imaginary CPU: macro
//! preprocessing, line parsing, symbol resolution across two passes, and
//! emission of `.ob`/`.ent`/`.ext` object artifacts.

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod model;
pub mod parser;
pub mod passes;
pub mod preprocessor;
pub mod reserved;

use config::AssemblerConfig;
use diagnostics::{Diagnostic, Phase};
use model::unit::TranslationUnit;

/// Runs every phase over one file's source text: macro expansion, parsing,
/// the first pass, and the second pass. Returns the finished
/// [`TranslationUnit`] on success, or every diagnostic collected along the
/// way on failure. A file with any diagnostic produces no output artifacts.
pub fn assemble(file_name: &str, source: &str, config: &AssemblerConfig) -> Result<TranslationUnit, Vec<Diagnostic>> {
    let raw_lines: Vec<&str> = source.lines().collect();

    let expanded = preprocessor::expand(&raw_lines).map_err(|errors| {
        errors
            .iter()
            .map(|e| Diagnostic::new(Phase::Preprocessor, file_name, None, e.to_string()))
            .collect::<Vec<_>>()
    })?;

    let mut diagnostics = Vec::new();
    let mut parsed_lines = Vec::new();
    for (i, line) in expanded.iter().enumerate() {
        match parser::parse_line(line, i + 1, config.max_line_length, config.max_symbol_length) {
            Ok(descriptor) => parsed_lines.push(descriptor),
            Err(e) => diagnostics.push(Diagnostic::new(Phase::Parse, file_name, Some(i + 1), e.to_string())),
        }
    }

    let first_pass_out = passes::first_pass::run(&parsed_lines, config.code_origin);
    if !first_pass_out.warnings.is_empty() {
        let warning_diagnostics: Vec<Diagnostic> = first_pass_out
            .warnings
            .iter()
            .map(|(line, message)| Diagnostic::warning(Phase::FirstPass, file_name, *line, message.clone()))
            .collect();
        diagnostics::report(&warning_diagnostics);
    }
    for (line, e) in &first_pass_out.semantic_errors {
        diagnostics.push(Diagnostic::new(Phase::FirstPass, file_name, *line, e.to_string()));
    }
    for (line, e) in &first_pass_out.encode_errors {
        diagnostics.push(Diagnostic::new(Phase::SecondPass, file_name, *line, e.to_string()));
    }
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    let mut unit = first_pass_out.unit;
    let second_pass_errors = passes::second_pass::run(&mut unit, &first_pass_out.commands, config.code_origin);
    for (line, e) in &second_pass_errors {
        diagnostics.push(Diagnostic::new(Phase::SecondPass, file_name, *line, e.to_string()));
    }
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    Ok(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_a_minimal_program() {
        let source = "MAIN: mov #1, r1\nhlt\n";
        let unit = assemble("prog", source, &AssemblerConfig::default()).unwrap();
        assert_eq!(unit.code_image.len(), 3);
    }

    #[test]
    fn reports_diagnostics_instead_of_producing_a_unit() {
        let source = "mov r1 r2\n";
        let diagnostics = assemble("prog", source, &AssemblerConfig::default()).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].phase, Phase::Parse);
    }

    #[test]
    fn duplicate_symbol_definition_blocks_output() {
        let source = "X: hlt\nX: rts\n";
        let diagnostics = assemble("prog", source, &AssemblerConfig::default()).unwrap_err();
        assert_eq!(diagnostics[0].phase, Phase::FirstPass);
    }
}
