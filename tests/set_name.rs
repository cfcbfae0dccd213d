//! Setting a row's name: call, setting, and empty line transitions

mod common;

use common::*;
use rfedit::events::{ModelEventKind, NodeRef, RecordingBroker};
use rfedit::model::PLACEHOLDER;
use rfedit::rules::{ModelType, RowKind, SectionKind, SettingRole};
use rfedit::EditorCommand;

#[test]
fn test_call_renamed_to_tags_becomes_setting() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(call, Some("[Tags]")));
    assert_eq!(
        broker.count_for(ModelEventKind::KeywordCallConverted, NodeRef::Holder(case)),
        1
    );
    assert_eq!(broker.count(ModelEventKind::KeywordCallNameChange), 0);
    assert_eq!(broker.count(ModelEventKind::KeywordCallArgumentChange), 0);

    let tags = model.suite.row(row_at(&model, case, 0)).unwrap();
    assert_eq!(tags.kind(), RowKind::Setting(SettingRole::Tags));
    assert_eq!(tags.token().model_type(), ModelType::TestCaseTags);
    assert_eq!(tags.arguments(), ["1", "2"]);
    assert_eq!(tags.comment(), "#comment");
    assert_eq!(
        model
            .suite
            .rows_of(case)
            .filter(|r| r.kind() == RowKind::Executable)
            .count(),
        0
    );
}

#[test]
fn test_undo_restores_row_id() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::set_call_name(call, Some("[Setup]")));
    assert_ne!(row_at(&model, case, 0), call);

    undo_all(&mut model, &mut broker, undo);
    assert_eq!(row_at(&model, case, 0), call);
    assert_eq!(model.suite.row(call).unwrap().name(), "call");
}

#[test]
fn test_plain_rename_sends_name_change() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(call, Some("other")));
    assert_eq!(broker.len(), 1);
    assert_eq!(
        broker.count_for(ModelEventKind::KeywordCallNameChange, NodeRef::Row(call)),
        1
    );
    assert_eq!(row_at(&model, case, 0), call);
    assert_eq!(model.suite.row(call).unwrap().arguments(), ["1", "2"]);
}

#[test]
fn test_same_name_is_a_no_op() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::set_call_name(call, Some("call")));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
}

#[test]
fn test_clearing_name_promotes_first_argument() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(call, None));
    assert_eq!(broker.count(ModelEventKind::KeywordCallNameChange), 1);
    assert_eq!(broker.count(ModelEventKind::KeywordCallArgumentChange), 1);

    let row = model.suite.row(call).unwrap();
    assert_eq!(row.name(), "1");
    assert_eq!(row.arguments(), ["2"]);
    assert_eq!(row.comment(), "#comment");
}

#[test]
fn test_clearing_setting_name_promotes_bracket_argument() {
    let mut model = test_model(&[
        "*** Test Cases ***",
        "case",
        "  [Setup]  [Tags]  smoke",
    ]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let setup = row_at(&model, case, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(setup, None));
    assert_eq!(broker.count(ModelEventKind::KeywordCallConverted), 1);

    let row = model.suite.row(row_at(&model, case, 0)).unwrap();
    assert_eq!(row.kind(), RowKind::Setting(SettingRole::Tags));
    assert_eq!(row.arguments(), ["smoke"]);
}

#[test]
fn test_clearing_setting_name_with_plain_argument_makes_call() {
    let mut model = test_model(&["*** Keywords ***", "kw", "  [Teardown]  Close  all"]);
    let kw = holder(&model, SectionKind::Keywords, "kw");
    let teardown = row_at(&model, kw, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_name(teardown, None));
    let row = model.suite.row(row_at(&model, kw, 0)).unwrap();
    assert_eq!(row.token().model_type(), ModelType::UserKeywordExecutableRow);
    assert_eq!(row.name(), "Close");
    assert_eq!(row.arguments(), ["all"]);
}

#[test]
fn test_clearing_name_without_arguments_leaves_nameless_call() {
    let mut model = test_model(&["*** Tasks ***", "task", "  Run"]);
    let task = holder(&model, SectionKind::Tasks, "task");
    let run_row = row_at(&model, task, 0);

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(run_row, None));
    assert_eq!(broker.len(), 1);
    let row = model.suite.row(run_row).unwrap();
    assert_eq!(row.name(), "");
    assert!(row.arguments().is_empty());
    assert_eq!(row.kind(), RowKind::Executable);
}

#[test]
fn test_empty_name_with_arguments_becomes_placeholder() {
    let mut model = single_call_model();
    let case = holder(&model, SectionKind::TestCases, "case");
    let call = row_at(&model, case, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_name(call, Some("")));
    assert_eq!(model.suite.row(call).unwrap().name(), PLACEHOLDER);
}

#[test]
fn test_conversion_does_not_move_row() {
    let mut model = test_model(&[
        "*** Test Cases ***",
        "case",
        "  [Tags]  a",
        "  first",
        "  second",
        "  [Teardown]  Close",
    ]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let second = row_at(&model, case, 2);

    assert_round_trip(&mut model, EditorCommand::set_call_name(second, Some("[Timeout]")));
    assert_eq!(
        row_names(&model, case),
        vec!["Tags", "first", "Timeout", "Teardown"]
    );
}

#[test]
fn test_setting_renamed_to_unknown_bracket() {
    let mut model = test_model(&["*** Keywords ***", "kw", "  [Arguments]  ${a}"]);
    let kw = holder(&model, SectionKind::Keywords, "kw");
    let arguments = row_at(&model, kw, 0);

    assert_round_trip(&mut model, EditorCommand::set_call_name(arguments, Some("[Setup]")));
    let row = model.suite.row(row_at(&model, kw, 0)).unwrap();
    assert_eq!(row.token().model_type(), ModelType::UserKeywordSettingUnknown);
    assert_eq!(row.token().declaration(), "[Setup]");
}

#[test]
fn test_empty_line_rename() {
    let mut model = test_model(&["*** Test Cases ***", "case", "  Log  1", "", "  Log  2"]);
    let case = holder(&model, SectionKind::TestCases, "case");
    let empty = row_at(&model, case, 1);
    let mut broker = RecordingBroker::new();

    assert!(run(&mut model, &mut broker, EditorCommand::set_call_name(empty, None)).is_empty());
    assert!(run(&mut model, &mut broker, EditorCommand::set_call_name(empty, Some(""))).is_empty());
    assert!(broker.is_empty());

    let broker = assert_round_trip(&mut model, EditorCommand::set_call_name(empty, Some("Sleep")));
    assert_eq!(broker.count(ModelEventKind::KeywordCallConverted), 1);
    let row = model.suite.row(row_at(&model, case, 1)).unwrap();
    assert_eq!(row.kind(), RowKind::Executable);
    assert_eq!(row.name(), "Sleep");
}
