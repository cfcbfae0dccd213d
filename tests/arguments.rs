//! Argument, comment, and cell edits

mod common;

use common::*;
use rfedit::events::{ModelEventKind, NodeRef, RecordingBroker};
use rfedit::model::PLACEHOLDER;
use rfedit::rules::{ModelType, RowKind, SectionKind, SettingRole};
use rfedit::EditorCommand;

fn comment_only_model() -> rfedit::EditorModel {
    test_model(&["*** Test Cases ***", "case", "  # comment"])
}

// ========================================================================
// SetArgument
// ========================================================================

#[test]
fn test_argument_beyond_end_pads_nameless_call() {
    let mut model = comment_only_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::set_call_argument(row, 3, Some("arg")));
    let edited = model.suite.row(row).unwrap();
    assert_eq!(edited.name(), PLACEHOLDER);
    assert_eq!(edited.arguments(), ["\\", "\\", "\\", "arg"]);
    assert_eq!(edited.comment(), "# comment");
    assert_eq!(
        broker.count_for(ModelEventKind::KeywordCallArgumentChange, NodeRef::Row(row)),
        1
    );

    undo_all(&mut model, &mut broker, undo);
    let restored = model.suite.row(row).unwrap();
    assert_eq!(restored.name(), "");
    assert!(restored.arguments().is_empty());
    assert_eq!(restored.comment(), "# comment");
}

#[test]
fn test_argument_round_trip() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_argument(row, 1, Some("x")));
    assert_eq!(broker.len(), 1);
    assert_eq!(model.suite.row(row).unwrap().arguments(), ["1", "x"]);
}

#[test]
fn test_clearing_last_argument_strips_placeholders() {
    let mut model = test_model(&["*** Keywords ***", "kw", "  Log  a  \\  \\  d"]);
    let kw = holder(&model, SectionKind::Keywords, "kw");
    let row = row_at(&model, kw, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_argument(row, 3, None));
    assert_eq!(model.suite.row(row).unwrap().arguments(), ["a"]);
}

#[test]
fn test_clearing_inner_argument_writes_placeholder() {
    let mut model = test_model(&["*** Keywords ***", "kw", "  Log  a  b  c"]);
    let kw = holder(&model, SectionKind::Keywords, "kw");
    let row = row_at(&model, kw, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_argument(row, 1, Some("")));
    assert_eq!(model.suite.row(row).unwrap().arguments(), ["a", "\\", "c"]);
}

#[test]
fn test_clearing_missing_argument_is_a_no_op() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::set_call_argument(row, 5, None));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
}

#[test]
fn test_setting_argument_keeps_setting() {
    let mut model = test_model(&["*** Test Cases ***", "case", "  [Tags]  a"]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let tags = row_at(&model, case, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_argument(tags, 2, Some("c")));
    let row = model.suite.row(tags).unwrap();
    assert_eq!(row.kind(), RowKind::Setting(SettingRole::Tags));
    assert_eq!(row.arguments(), ["a", "\\", "c"]);
}

// ========================================================================
// SetComment
// ========================================================================

#[test]
fn test_set_comment() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_comment(row, Some("# new")));
    assert_eq!(broker.len(), 1);
    assert_eq!(broker.count(ModelEventKind::KeywordCallCommentChange), 1);
    assert_eq!(model.suite.row(row).unwrap().comment(), "# new");
}

#[test]
fn test_remove_comment() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    run(&mut model, &mut broker, EditorCommand::set_call_comment(row, None));
    assert_eq!(model.suite.row(row).unwrap().comment(), "");

    broker.clear();
    run(&mut model, &mut broker, EditorCommand::set_call_comment(row, Some("")));
    assert!(broker.is_empty());
}

// ========================================================================
// Cells
// ========================================================================

#[test]
fn test_insert_cell_sends_cell_change() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::insert_cell(row, 2, "new"));
    assert_eq!(broker.len(), 1);
    assert_eq!(
        broker.count_for(ModelEventKind::KeywordCallCellChange, NodeRef::Row(row)),
        1
    );
    assert_eq!(
        model.suite.row(row).unwrap().token().element_tokens(),
        ["call", "1", "new", "2", "#comment"]
    );
}

#[test]
fn test_insert_cell_in_front_of_comment_only_row() {
    let mut model = comment_only_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    assert_round_trip(&mut model, EditorCommand::insert_cell(row, 0, "Log"));
    let edited = model.suite.row(row).unwrap();
    assert_eq!(edited.token().element_tokens(), ["Log", "", "# comment"]);
    assert_eq!(edited.kind(), RowKind::Executable);
}

#[test]
fn test_insert_cell_into_empty_line_is_a_no_op() {
    let mut model = test_model(&["*** Test Cases ***", "case", "  Log  1", "", "  Log  2"]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let empty = row_at(&model, case, 1);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::insert_cell(empty, 0, "x"));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
}

#[test]
fn test_insert_bracket_cell_converts_row() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::insert_cell(row, 0, "[Documentation]"));
    assert_eq!(broker.len(), 1);
    assert_eq!(broker.count(ModelEventKind::KeywordCallCellChange), 0);
    assert_eq!(
        broker.count_for(ModelEventKind::KeywordCallConverted, NodeRef::Holder(case)),
        1
    );

    let converted = row_at(&model, case, 0);
    assert_ne!(converted, row);
    let edited = model.suite.row(converted).unwrap();
    assert_eq!(edited.token().model_type(), ModelType::TestCaseDocumentation);
    assert_eq!(edited.arguments(), ["call", "1", "2"]);
}

#[test]
fn test_delete_bracket_cell_converts_setting_back_to_call() {
    let mut model = test_model(&["*** Test Cases ***", "case", "  [Setup]  Open  page"]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let setup = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::delete_cell(setup, 0));
    assert_eq!(broker.count(ModelEventKind::KeywordCallConverted), 1);
    assert_eq!(broker.count(ModelEventKind::KeywordCallCellChange), 0);
    let edited = model.suite.row(row_at(&model, case, 0)).unwrap();
    assert_eq!(edited.kind(), RowKind::Executable);
    assert_eq!(edited.name(), "Open");
    assert_eq!(edited.arguments(), ["page"]);
}

#[test]
fn test_delete_cell() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::delete_cell(row, 1));
    assert_eq!(broker.count(ModelEventKind::KeywordCallCellChange), 1);
    assert_eq!(
        model.suite.row(row).unwrap().token().element_tokens(),
        ["call", "2", "#comment"]
    );
}

#[test]
fn test_delete_cell_past_the_end_is_a_no_op() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let row = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::delete_cell(row, 9));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
}
