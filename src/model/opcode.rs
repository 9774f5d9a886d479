//! The 16 fixed opcodes of the target machine, their mnemonics, numbers, and
//! their (source-mode, target-mode) addressing legality table.

use crate::model::word::AddressingMode;

/// One of the 16 opcodes of the target machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Mov,
    Cmp,
    Add,
    Sub,
    Not,
    Clr,
    Lea,
    Inc,
    Dec,
    Jmp,
    Bne,
    Red,
    Prn,
    Jsr,
    Rts,
    Hlt,
}

use AddressingMode::{Direct, FixedIndex, Immediate, Register};

const ALL_MODES: &[AddressingMode] = &[Immediate, Direct, FixedIndex, Register];
const MEM_MODES: &[AddressingMode] = &[Direct, FixedIndex];
const DEST_MODES: &[AddressingMode] = &[Direct, FixedIndex, Register];
const JUMP_TARGET_MODES: &[AddressingMode] = &[Direct, Register];
const NONE: &[AddressingMode] = &[];

impl Opcode {
    /// Parses a lowercase mnemonic into its `Opcode`. Mnemonics are
    /// case-sensitive in source, matching the reserved-word tables.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Some(match mnemonic {
            "mov" => Opcode::Mov,
            "cmp" => Opcode::Cmp,
            "add" => Opcode::Add,
            "sub" => Opcode::Sub,
            "not" => Opcode::Not,
            "clr" => Opcode::Clr,
            "lea" => Opcode::Lea,
            "inc" => Opcode::Inc,
            "dec" => Opcode::Dec,
            "jmp" => Opcode::Jmp,
            "bne" => Opcode::Bne,
            "red" => Opcode::Red,
            "prn" => Opcode::Prn,
            "jsr" => Opcode::Jsr,
            "rts" => Opcode::Rts,
            "hlt" => Opcode::Hlt,
            _ => return None,
        })
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Mov => "mov",
            Opcode::Cmp => "cmp",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Not => "not",
            Opcode::Clr => "clr",
            Opcode::Lea => "lea",
            Opcode::Inc => "inc",
            Opcode::Dec => "dec",
            Opcode::Jmp => "jmp",
            Opcode::Bne => "bne",
            Opcode::Red => "red",
            Opcode::Prn => "prn",
            Opcode::Jsr => "jsr",
            Opcode::Rts => "rts",
            Opcode::Hlt => "hlt",
        }
    }

    /// The 4-bit opcode number packed into bits 12..=9 of the opcode word.
    pub fn number(self) -> u8 {
        match self {
            Opcode::Mov => 0,
            Opcode::Cmp => 1,
            Opcode::Add => 2,
            Opcode::Sub => 3,
            Opcode::Not => 4,
            Opcode::Clr => 5,
            Opcode::Lea => 6,
            Opcode::Inc => 7,
            Opcode::Dec => 8,
            Opcode::Jmp => 9,
            Opcode::Bne => 10,
            Opcode::Red => 11,
            Opcode::Prn => 12,
            Opcode::Jsr => 13,
            Opcode::Rts => 14,
            Opcode::Hlt => 15,
        }
    }

    /// How many operands a command with this opcode takes: 0, 1, or 2.
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Mov | Opcode::Cmp | Opcode::Add | Opcode::Sub | Opcode::Lea => 2,
            Opcode::Not | Opcode::Clr | Opcode::Inc | Opcode::Dec | Opcode::Red | Opcode::Jmp | Opcode::Bne | Opcode::Jsr | Opcode::Prn => 1,
            Opcode::Rts | Opcode::Hlt => 0,
        }
    }

    /// Legal addressing modes for the source operand. Empty for
    /// single/zero-operand opcodes.
    pub fn legal_source_modes(self) -> &'static [AddressingMode] {
        match self {
            Opcode::Mov | Opcode::Add | Opcode::Sub | Opcode::Cmp => ALL_MODES,
            Opcode::Lea => MEM_MODES,
            _ => NONE,
        }
    }

    /// Legal addressing modes for the target operand (the sole operand for
    /// single-operand opcodes).
    pub fn legal_target_modes(self) -> &'static [AddressingMode] {
        match self {
            Opcode::Mov | Opcode::Add | Opcode::Sub | Opcode::Lea => DEST_MODES,
            Opcode::Cmp | Opcode::Prn => ALL_MODES,
            Opcode::Not | Opcode::Clr | Opcode::Inc | Opcode::Dec | Opcode::Red => DEST_MODES,
            Opcode::Jmp | Opcode::Bne | Opcode::Jsr => JUMP_TARGET_MODES,
            Opcode::Rts | Opcode::Hlt => NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_mnemonic() {
        for m in ["mov", "cmp", "add", "sub", "not", "clr", "lea", "inc", "dec", "jmp", "bne", "red", "prn", "jsr", "rts", "hlt"] {
            let op = Opcode::from_mnemonic(m).unwrap();
            assert_eq!(op.mnemonic(), m);
        }
    }

    #[test]
    fn opcode_numbers_are_distinct_0_to_15() {
        let ops = [
            Opcode::Mov, Opcode::Cmp, Opcode::Add, Opcode::Sub, Opcode::Not, Opcode::Clr, Opcode::Lea, Opcode::Inc,
            Opcode::Dec, Opcode::Jmp, Opcode::Bne, Opcode::Red, Opcode::Prn, Opcode::Jsr, Opcode::Rts, Opcode::Hlt,
        ];
        let mut numbers: Vec<u8> = ops.iter().map(|o| o.number()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn lea_rejects_immediate_source() {
        assert!(!Opcode::Lea.legal_source_modes().contains(&Immediate));
        assert!(Opcode::Lea.legal_source_modes().contains(&Direct));
    }

    #[test]
    fn rts_and_hlt_take_no_operands() {
        assert_eq!(Opcode::Rts.operand_count(), 0);
        assert_eq!(Opcode::Hlt.operand_count(), 0);
        assert!(Opcode::Rts.legal_target_modes().is_empty());
    }

    #[test]
    fn jump_targets_exclude_immediate_and_fixed_index() {
        assert_eq!(Opcode::Jmp.legal_target_modes(), &[Direct, Register]);
    }
}
