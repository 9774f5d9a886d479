//! Checks a command's operands against the addressing modes its opcode
//! permits, independent of whether the operands themselves resolve to real
//! symbols.

use crate::error::SemanticError;
use crate::model::line::ParsedCommand;
use crate::model::word::AddressingMode;

fn mode_name(mode: AddressingMode) -> &'static str {
    match mode {
        AddressingMode::Immediate => "immediate",
        AddressingMode::Direct => "direct",
        AddressingMode::FixedIndex => "fixed-index",
        AddressingMode::Register => "register",
    }
}

/// Validates that `cmd`'s source and target operands use addressing modes
/// legal for its opcode.
pub fn validate(cmd: &ParsedCommand) -> Result<(), SemanticError> {
    if let Some(source) = &cmd.source {
        let mode = source.mode();
        if !cmd.opcode.legal_source_modes().contains(&mode) {
            return Err(SemanticError::IllegalAddressing {
                opcode: cmd.opcode.mnemonic().to_string(),
                detail: format!("{} addressing is not legal as a source operand", mode_name(mode)),
            });
        }
    }
    if let Some(target) = &cmd.target {
        let mode = target.mode();
        if !cmd.opcode.legal_target_modes().contains(&mode) {
            return Err(SemanticError::IllegalAddressing {
                opcode: cmd.opcode.mnemonic().to_string(),
                detail: format!("{} addressing is not legal as a target operand", mode_name(mode)),
            });
        }
    }
    Ok(())
}
