//! An insertion-ordered symbol table with kind-tagged entries, `TempEntry`
//! promotion for forward-declared `.entry` targets, and an end-of-pass
//! finalize step that shifts data addresses and reports unresolved entries.
//! Entries are not mutated in place as each line is seen; finalize() does it
//! once, at the end.

use std::collections::HashMap;

use crate::error::SemanticError;

/// What a symbol table entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    CodeLabel,
    DataLabel,
    EntryCodeLabel,
    EntryDataLabel,
    TempEntry,
    External,
    DefinedConstant,
}

impl SymbolKind {
    fn is_data_kind(self) -> bool {
        matches!(self, SymbolKind::DataLabel | SymbolKind::EntryDataLabel)
    }

    fn is_entry_kind(self) -> bool {
        matches!(self, SymbolKind::EntryCodeLabel | SymbolKind::EntryDataLabel)
    }
}

/// One symbol table entry. `address` is interpreted according to `kind`: a
/// code offset, a pre-merge data offset, a resolved address post-merge, or,
/// for `DefinedConstant`, the constant's numeric value.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub address: i32,
}

/// A resolved `{name, address}` pair, the shape shared by the entries list
/// and the external-use list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAddress {
    pub name: String,
    pub address: u16,
}

/// The per-file, insertion-indexed symbol table.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Inserts a brand-new symbol. Fails with [`SemanticError::SymbolRedefinition`]
    /// if the name is already present under any kind.
    pub fn insert(&mut self, name: impl Into<String>, kind: SymbolKind, address: i32) -> Result<(), SemanticError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(SemanticError::SymbolRedefinition(name));
        }
        let idx = self.entries.len();
        self.entries.push(Symbol { name: name.clone(), kind, address });
        self.index.insert(name, idx);
        Ok(())
    }

    /// Promotes an existing `TempEntry` to `EntryCodeLabel` or
    /// `EntryDataLabel`, setting its resolved address. Returns an error if the
    /// name exists but is not currently a `TempEntry`.
    pub fn promote_temp_entry(&mut self, name: &str, promoted_kind: SymbolKind, address: i32) -> Result<(), SemanticError> {
        let idx = *self.index.get(name).ok_or_else(|| SemanticError::SymbolRedefinition(name.to_string()))?;
        if self.entries[idx].kind != SymbolKind::TempEntry {
            return Err(SemanticError::SymbolRedefinition(name.to_string()));
        }
        self.entries[idx].kind = promoted_kind;
        self.entries[idx].address = address;
        Ok(())
    }

    /// Promotes an already-defined `CodeLabel`/`DataLabel` to its matching
    /// entry kind in place, keeping its existing address. Used when `.entry`
    /// names a symbol that was already defined earlier in the file.
    pub fn promote_existing_to_entry(&mut self, name: &str, promoted_kind: SymbolKind) -> Result<(), SemanticError> {
        let idx = *self.index.get(name).expect("caller checked the symbol exists");
        self.entries[idx].kind = promoted_kind;
        Ok(())
    }

    /// Defines a label at the current counter, promoting a matching
    /// `TempEntry` in place if one exists, or inserting fresh otherwise.
    ///
    /// `data_kind`/`code_kind` select which concrete kind to use depending on
    /// whether the label belongs to a command line or a `.data`/`.string`
    /// line; `entry_kind` selects the matching promoted-entry kind.
    pub fn define_label(&mut self, name: &str, is_data: bool, address: i32) -> Result<(), SemanticError> {
        if let Some(existing) = self.get(name) {
            if existing.kind == SymbolKind::TempEntry {
                let promoted = if is_data { SymbolKind::EntryDataLabel } else { SymbolKind::EntryCodeLabel };
                return self.promote_temp_entry(name, promoted, address);
            }
            return Err(SemanticError::SymbolRedefinition(name.to_string()));
        }
        let kind = if is_data { SymbolKind::DataLabel } else { SymbolKind::CodeLabel };
        self.insert(name, kind, address)
    }

    /// End-of-first-pass finalization:
    /// - every remaining `TempEntry` is an `UndefinedEntry` error;
    /// - every `DataLabel`/`EntryDataLabel` address is shifted by `final_ic`
    ///   so code and data share one address space;
    /// - the entry list (`EntryCodeLabel`/`EntryDataLabel`) is returned,
    ///   sorted ascending by address.
    pub fn finalize(&mut self, final_ic: u16) -> Result<Vec<NamedAddress>, Vec<SemanticError>> {
        let mut errors = Vec::new();
        for symbol in &self.entries {
            if symbol.kind == SymbolKind::TempEntry {
                errors.push(SemanticError::UndefinedEntry(symbol.name.clone()));
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        for symbol in &mut self.entries {
            if symbol.kind.is_data_kind() {
                symbol.address += final_ic as i32;
            }
        }

        let mut entries: Vec<NamedAddress> = self
            .entries
            .iter()
            .filter(|s| s.kind.is_entry_kind())
            .map(|s| NamedAddress {
                name: s.name.clone(),
                address: s.address as u16,
            })
            .collect();
        entries.sort_by_key(|e| e.address);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut table = SymbolTable::new();
        table.insert("X", SymbolKind::CodeLabel, 100).unwrap();
        let err = table.insert("X", SymbolKind::DataLabel, 0).unwrap_err();
        assert_eq!(err, SemanticError::SymbolRedefinition("X".to_string()));
    }

    #[test]
    fn temp_entry_promotes_to_entry_code_label() {
        let mut table = SymbolTable::new();
        table.insert("HELLO", SymbolKind::TempEntry, 0).unwrap();
        table.define_label("HELLO", false, 100).unwrap();
        assert_eq!(table.get("HELLO").unwrap().kind, SymbolKind::EntryCodeLabel);
        assert_eq!(table.get("HELLO").unwrap().address, 100);
    }

    #[test]
    fn unresolved_temp_entry_fails_finalize() {
        let mut table = SymbolTable::new();
        table.insert("MISSING", SymbolKind::TempEntry, 0).unwrap();
        let err = table.finalize(103).unwrap_err();
        assert_eq!(err, vec![SemanticError::UndefinedEntry("MISSING".to_string())]);
    }

    #[test]
    fn finalize_shifts_data_labels_by_final_ic() {
        let mut table = SymbolTable::new();
        table.insert("STR", SymbolKind::DataLabel, 0).unwrap();
        let entries = table.finalize(103).unwrap();
        assert!(entries.is_empty());
        assert_eq!(table.get("STR").unwrap().address, 103);
    }

    #[test]
    fn entries_list_sorted_by_address() {
        let mut table = SymbolTable::new();
        table.insert("B", SymbolKind::EntryDataLabel, 5).unwrap();
        table.insert("A", SymbolKind::EntryCodeLabel, 2).unwrap();
        let entries = table.finalize(0).unwrap();
        assert_eq!(entries, vec![
            NamedAddress { name: "A".to_string(), address: 2 },
            NamedAddress { name: "B".to_string(), address: 5 },
        ]);
    }
}
