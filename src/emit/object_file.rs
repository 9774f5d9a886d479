//! Renders a finished [`TranslationUnit`] into the three output artifacts:
//! the `.ob` object image, and the optional `.ent`/`.ext` tables.

use crate::model::symbol::NamedAddress;
use crate::model::unit::TranslationUnit;
use crate::model::word::Word;

const ENCODE_DIGITS: [char; 4] = ['*', '#', '%', '!'];

/// Encodes a 14-bit word as 7 base-4 characters, most significant digit
/// first, using the digit glyphs `*`, `#`, `%`, `!` for 0..3.
fn encode_word(word: Word) -> String {
    let value = word.value();
    let mut chars = ['*'; 7];
    for (i, slot) in chars.iter_mut().enumerate() {
        let shift = 2 * (6 - i);
        let digit = (value >> shift) & 0b11;
        *slot = ENCODE_DIGITS[digit as usize];
    }
    chars.iter().collect()
}

/// Builds the `.ob` file body: a header line of the final `IC`/`DC`, then one
/// `"NNNN XXXXXXX"` line per code word followed by one per data word,
/// addresses starting at `code_origin` and running contiguously.
pub fn render_object_file(unit: &TranslationUnit, code_origin: u16) -> String {
    let mut out = String::new();
    let ic_count = unit.code_image.len() as u16;
    let dc_count = unit.data_image.len() as u16;
    out.push_str(&format!("  {ic_count} {dc_count}\n"));

    let mut address = code_origin;
    for word in &unit.code_image {
        out.push_str(&format!("{:04} {}\n", address, encode_word(*word)));
        address += 1;
    }
    for word in &unit.data_image {
        out.push_str(&format!("{:04} {}\n", address, encode_word(*word)));
        address += 1;
    }
    out
}

fn render_named_addresses(entries: &[NamedAddress]) -> String {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.address);
    let mut out = String::new();
    for entry in &sorted {
        out.push_str(&format!("{}\t{:04}\n", entry.name, entry.address));
    }
    out
}

/// Builds the `.ent` file body, or `None` if there are no entries to list.
pub fn render_entries_file(unit: &TranslationUnit) -> Option<String> {
    if unit.entries.is_empty() {
        return None;
    }
    Some(render_named_addresses(&unit.entries))
}

/// Builds the `.ext` file body, or `None` if no external symbol was used.
pub fn render_externals_file(unit: &TranslationUnit) -> Option<String> {
    if unit.externals.is_empty() {
        return None;
    }
    Some(render_named_addresses(&unit.externals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_zero_word_as_all_stars() {
        assert_eq!(encode_word(Word::new(0)), "*******");
    }

    #[test]
    fn encodes_max_word_as_all_bangs() {
        assert_eq!(encode_word(Word::new(0x3FFF)), "!!!!!!!");
    }

    #[test]
    fn object_file_header_reports_ic_and_dc_counts() {
        let mut unit = TranslationUnit::new(100);
        unit.code_image.push(Word::opcode_word(0, None, None));
        unit.data_image.push(Word::new(5));
        let body = render_object_file(&unit, 100);
        let mut lines = body.lines();
        assert_eq!(lines.next().unwrap(), "  1 1");
        assert_eq!(lines.next().unwrap(), "0100 *******");
        assert!(lines.next().unwrap().starts_with("0101 "));
    }

    #[test]
    fn entries_file_is_none_when_empty() {
        let unit = TranslationUnit::new(100);
        assert!(render_entries_file(&unit).is_none());
    }

    #[test]
    fn entries_file_lists_sorted_by_address() {
        let mut unit = TranslationUnit::new(100);
        unit.entries.push(NamedAddress { name: "B".to_string(), address: 105 });
        unit.entries.push(NamedAddress { name: "A".to_string(), address: 100 });
        let body = render_entries_file(&unit).unwrap();
        assert_eq!(body, "A\t0100\nB\t0105\n");
    }

    #[test]
    fn externals_file_is_none_when_no_external_used() {
        let unit = TranslationUnit::new(100);
        assert!(render_externals_file(&unit).is_none());
    }

    #[test]
    fn externals_file_lists_every_use_site() {
        let mut unit = TranslationUnit::new(100);
        unit.externals.push(NamedAddress { name: "X".to_string(), address: 101 });
        unit.externals.push(NamedAddress { name: "X".to_string(), address: 104 });
        let body = render_externals_file(&unit).unwrap();
        assert_eq!(body, "X\t0101\nX\t0104\n");
    }
}
