//! The per-file aggregate produced by the first pass: code/data word images,
//! the symbol table, and the entry/external-use tables the second pass and
//! the emitter consume.

use std::collections::HashMap;

use crate::model::symbol::{NamedAddress, SymbolTable};
use crate::model::word::Word;

/// The per-file aggregate produced by the first pass, finalized at the pass
/// boundary, and consumed read-only by the second pass and the emitter.
#[derive(Debug, Default)]
pub struct TranslationUnit {
    pub code_image: Vec<Word>,
    pub data_image: Vec<Word>,
    pub symbols: SymbolTable,
    pub constants: HashMap<String, i16>,
    pub externals: Vec<NamedAddress>,
    pub entries: Vec<NamedAddress>,
    pub ic: u16,
    pub dc: u16,
}

impl TranslationUnit {
    pub fn new(code_origin: u16) -> Self {
        TranslationUnit {
            ic: code_origin,
            ..TranslationUnit::default()
        }
    }
}
