//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use rfedit::dump::SuiteDump;
use rfedit::events::RecordingBroker;
use rfedit::model::{EditorModel, HolderId, RowId, SectionId, SuiteFileBuilder, VariableId};
use rfedit::rules::SectionKind;
use rfedit::update::{update, update_all};
use rfedit::EditorCommand;

/// Create a test model from suite lines
pub fn test_model(lines: &[&str]) -> EditorModel {
    let suite = lines
        .iter()
        .fold(SuiteFileBuilder::new(), |builder, line| builder.append_line(line))
        .build();
    EditorModel::with_suite(suite)
}

/// A test case section with one case holding a call with a comment
pub fn single_call_model() -> EditorModel {
    test_model(&[
        "*** Test Cases ***",
        "case",
        "  call  1  2  #comment",
    ])
}

pub fn section(model: &EditorModel, kind: SectionKind) -> SectionId {
    model
        .suite
        .find_section(kind)
        .unwrap_or_else(|| panic!("no {:?} section", kind))
}

pub fn holder(model: &EditorModel, kind: SectionKind, name: &str) -> HolderId {
    let section = section(model, kind);
    model
        .suite
        .holders_of(section)
        .find(|h| h.name() == name)
        .map(|h| h.id())
        .unwrap_or_else(|| panic!("no holder {:?} in {:?}", name, kind))
}

/// Id of the row at `index` in `holder`
pub fn row_at(model: &EditorModel, holder: HolderId, index: usize) -> RowId {
    model.suite.holder(holder).expect("holder").rows()[index]
}

pub fn variable_at(model: &EditorModel, index: usize) -> VariableId {
    let section = section(model, SectionKind::Variables);
    model.suite.section(section).expect("section").variables()[index]
}

pub fn holder_names(model: &EditorModel, kind: SectionKind) -> Vec<String> {
    let section = section(model, kind);
    model
        .suite
        .holder_names(section)
        .map(str::to_string)
        .collect()
}

pub fn row_names(model: &EditorModel, holder: HolderId) -> Vec<String> {
    model
        .suite
        .rows_of(holder)
        .map(|r| r.name().to_string())
        .collect()
}

pub fn dump(model: &EditorModel) -> SuiteDump {
    SuiteDump::from_suite(&model.suite)
}

/// Execute `command`, returning its undo commands
pub fn run(model: &mut EditorModel, broker: &mut RecordingBroker, command: EditorCommand) -> Vec<EditorCommand> {
    update(model, broker, command).expect("command failed")
}

/// Execute undo commands, returning the redo commands
pub fn undo_all(
    model: &mut EditorModel,
    broker: &mut RecordingBroker,
    undo: Vec<EditorCommand>,
) -> Vec<EditorCommand> {
    update_all(model, broker, undo).expect("undo failed")
}

/// Execute, undo, and redo `command`, asserting the suite matches at each step
///
/// Returns the broker holding only the events of the first execution.
pub fn assert_round_trip(model: &mut EditorModel, command: EditorCommand) -> RecordingBroker {
    let before = dump(model);
    let mut broker = RecordingBroker::new();
    let undo = run(model, &mut broker, command);
    let after = dump(model);

    let mut scratch = RecordingBroker::new();
    let redo = undo_all(model, &mut scratch, undo);
    assert_eq!(dump(model), before, "undo did not restore the suite");

    undo_all(model, &mut scratch, redo);
    assert_eq!(dump(model), after, "redo did not reproduce the change");
    broker
}
