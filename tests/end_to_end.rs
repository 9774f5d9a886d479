use octasm::config::AssemblerConfig;
use octasm::model::symbol::SymbolKind;
use octasm::model::word::Are;
use octasm::{assemble, emit};
use rstest::rstest;

fn config() -> AssemblerConfig {
    AssemblerConfig::default()
}

#[test]
fn scenario_1_constant_and_immediate() {
    let src = ".define sz = 2\nMAIN: mov #sz, r1\nhlt\n";
    let unit = assemble("scenario1", src, &config()).unwrap();
    // mov #sz, r1 costs 3 words (opcode + immediate + register); hlt costs 1 more.
    assert_eq!(unit.ic, 104);
    assert_eq!(unit.symbols.get("MAIN").unwrap().kind, SymbolKind::CodeLabel);
    assert_eq!(unit.symbols.get("MAIN").unwrap().address, 100);
    assert_eq!(*unit.constants.get("sz").unwrap(), 2);

    let object_file = emit::render_object_file(&unit, config().code_origin);
    assert!(object_file.starts_with("  4 0\n"));

    let immediate_word = unit.code_image[1];
    assert_eq!(immediate_word.payload(), 2);
    assert_eq!(immediate_word.are(), Are::Absolute);
}

#[test]
fn scenario_2_entry_before_definition() {
    let src = ".entry HELLO\nHELLO: add #1, r1\n";
    let unit = assemble("scenario2", src, &config()).unwrap();
    assert_eq!(unit.symbols.get("HELLO").unwrap().kind, SymbolKind::EntryCodeLabel);
    assert_eq!(unit.symbols.get("HELLO").unwrap().address, 100);
    assert_eq!(unit.entries.len(), 1);
    assert_eq!(unit.entries[0].name, "HELLO");
    assert_eq!(unit.entries[0].address, 100);

    let entries_body = emit::render_entries_file(&unit).unwrap();
    assert_eq!(entries_body, "HELLO\t0100\n");
}

#[test]
fn scenario_3_external_reference() {
    let src = ".extern EXT\njmp EXT\n";
    let unit = assemble("scenario3", src, &config()).unwrap();
    let operand_word = unit.code_image[1];
    assert_eq!(operand_word.payload(), 0);
    assert_eq!(operand_word.are(), Are::External);

    let externals_body = emit::render_externals_file(&unit).unwrap();
    assert_eq!(externals_body, "EXT\t0101\n");
}

#[test]
fn scenario_4_string_directive_and_data_image() {
    let src = "STR: .string \"ab\"\ndec STR\n";
    let unit = assemble("scenario4", src, &config()).unwrap();
    let data_values: Vec<u16> = unit.data_image.iter().map(|w| w.value()).collect();
    assert_eq!(data_values, vec![97, 98, 0]);
    assert_eq!(unit.symbols.get("STR").unwrap().address, unit.ic as i32);

    let object_file = emit::render_object_file(&unit, config().code_origin);
    let data_lines = object_file.lines().filter(|l| !l.starts_with("  ")).count();
    assert_eq!(data_lines, unit.code_image.len() + unit.data_image.len());
}

#[test]
fn scenario_5_data_only_file_has_no_code() {
    let src = ".data 7, -57, +17, 9\n";
    let unit = assemble("scenario5", src, &config()).unwrap();
    assert_eq!(unit.data_image.len(), 4);
    assert_eq!(unit.dc, 4);
    assert!(unit.code_image.is_empty());
}

#[test]
fn scenario_6_duplicate_symbol_blocks_output() {
    let src = "X: mov r1, r2\nX: add r1, r2\n";
    let diagnostics = assemble("scenario6", src, &config()).unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("X"));
}

#[rstest]
#[case(31, true)]
#[case(32, false)]
fn boundary_label_length(#[case] length: usize, #[case] should_succeed: bool) {
    let label = "a".repeat(length);
    let src = format!("{label}: hlt\n");
    let result = assemble("boundary", &src, &config());
    assert_eq!(result.is_ok(), should_succeed);
}

#[test]
fn boundary_line_at_exactly_80_characters_is_accepted() {
    let comment = format!(";{}", "a".repeat(79));
    assert_eq!(comment.len(), 80);
    let src = format!("{comment}\nhlt\n");
    assert!(assemble("boundary_line", &src, &config()).is_ok());
}

#[test]
fn boundary_data_with_no_values_is_rejected() {
    let src = ".data\n";
    assert!(assemble("boundary_data_empty", src, &config()).is_err());
}

#[test]
fn boundary_data_with_one_value_is_accepted() {
    let src = ".data 5\n";
    let unit = assemble("boundary_data_one", src, &config()).unwrap();
    assert_eq!(unit.data_image.len(), 1);
}

#[test]
fn boundary_shared_register_word_vs_separate_label_word() {
    let unit_registers = assemble("boundary_regs", "mov r1, r2\n", &config()).unwrap();
    assert_eq!(unit_registers.code_image.len(), 2);

    let unit_label = assemble("boundary_label", "mov r1, X\nX: hlt\n", &config()).unwrap();
    assert_eq!(unit_label.code_image.len(), 3);
}

#[test]
fn macro_expansion_is_exercised_end_to_end() {
    let src = "mcr GREET\nprn #1\nendmcr\nGREET\nhlt\n";
    let unit = assemble("macro_e2e", src, &config()).unwrap();
    assert_eq!(unit.ic, 100 + 2 + 1);
}

#[test]
fn on_disk_round_trip_writes_object_and_entries_files() {
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("prog");
    std::fs::write(stem.with_extension("as"), ".entry MAIN\nMAIN: hlt\n").unwrap();

    let source = std::fs::read_to_string(stem.with_extension("as")).unwrap();
    let unit = assemble(&stem.with_extension("as").display().to_string(), &source, &config()).unwrap();
    std::fs::write(stem.with_extension("ob"), emit::render_object_file(&unit, config().code_origin)).unwrap();
    std::fs::write(stem.with_extension("ent"), emit::render_entries_file(&unit).unwrap()).unwrap();

    let object_file = std::fs::read_to_string(stem.with_extension("ob")).unwrap();
    assert!(object_file.starts_with("  1 0\n"));
    let entries_file = std::fs::read_to_string(stem.with_extension("ent")).unwrap();
    assert_eq!(entries_file, "MAIN\t0100\n");
    assert!(!stem.with_extension("ext").exists());
}
