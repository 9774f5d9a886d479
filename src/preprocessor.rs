//! Expands `mcr NAME … endmcr` verbatim-text blocks: a single-pass textual
//! expander with no nesting and no forward reference. A macro must be fully
//! defined before its first use.

use std::collections::HashMap;

use crate::error::MacroError;
use crate::reserved::is_reserved_word;

const MACRO_START: &str = "mcr";
const MACRO_END: &str = "endmcr";

/// A named block of verbatim source text, substituted at every use site.
#[derive(Debug, Clone)]
struct Macro {
    body: Vec<String>,
}

/// Expands every `mcr`/`endmcr` block and macro invocation in `source_lines`
/// into its body text, returning the macro-expanded (`.am`) line stream.
///
/// Errors are collected rather than short-circuited, matching the
/// error-collection policy: a file with any macro error produces no output.
pub fn expand(source_lines: &[&str]) -> Result<Vec<String>, Vec<MacroError>> {
    let mut table: HashMap<String, Macro> = HashMap::new();
    let mut output: Vec<String> = Vec::new();
    let mut errors: Vec<MacroError> = Vec::new();

    let mut collecting_body = false;
    let mut current_macro_name: Option<String> = None;

    for line in source_lines {
        let first_token = line.split_whitespace().next().unwrap_or("");

        if first_token == MACRO_START {
            let name = line.split_whitespace().nth(1).unwrap_or("").to_string();
            if is_reserved_word(&name) || table.contains_key(&name) {
                errors.push(MacroError::InvalidMacroName(name));
                collecting_body = true;
                current_macro_name = None;
                continue;
            }
            table.insert(name.clone(), Macro { body: Vec::new() });
            current_macro_name = Some(name);
            collecting_body = true;
            continue;
        }

        if first_token == MACRO_END {
            collecting_body = false;
            current_macro_name = None;
            continue;
        }

        if collecting_body {
            if let Some(name) = &current_macro_name {
                table.get_mut(name).expect("macro inserted at mcr").body.push((*line).to_string());
            }
            continue;
        }

        if let Some(m) = table.get(first_token) {
            output.extend(m.body.iter().cloned());
            continue;
        }

        output.push((*line).to_string());
    }

    if errors.is_empty() {
        Ok(output)
    } else {
        Err(errors)
    }
}
