//! Holder commands: fresh holders, batch inserts, deletes, moves, renames

mod common;

use common::*;
use rfedit::events::{ModelEventKind, NodeRef, RecordingBroker};
use rfedit::model::{DetachedHolder, TokenRow, PLACEHOLDER};
use rfedit::rules::{HolderKind, ModelType, SectionKind};
use rfedit::update::update;
use rfedit::{CommandError, EditorCommand};

fn three_cases() -> rfedit::EditorModel {
    test_model(&[
        "*** Test Cases ***",
        "case",
        "  Log  1",
        "case 1",
        "  Log  2",
        "case 2",
        "  Log  3",
    ])
}

// ========================================================================
// CreateFreshHolder
// ========================================================================

#[test]
fn test_fresh_holder_name_counts_existing_holders() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);

    let broker = assert_round_trip(&mut model, EditorCommand::create_fresh_holder(section, None));
    assert_eq!(broker.count(ModelEventKind::ElementAdded), 1);
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["case", "case 1", "case 2", "case 4"]
    );
}

#[test]
fn test_fresh_holder_skips_name_already_taken() {
    let mut model = test_model(&["*** Test Cases ***", "case 2", "other"]);
    let section = section(&model, SectionKind::TestCases);
    let mut broker = RecordingBroker::new();

    run(&mut model, &mut broker, EditorCommand::create_fresh_holder(section, None));
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["case 2", "other", "case 3"]
    );
}

#[test]
fn test_fresh_holder_at_index() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);
    let mut broker = RecordingBroker::new();

    run(&mut model, &mut broker, EditorCommand::create_fresh_holder(section, Some(0)));
    assert_eq!(holder_names(&model, SectionKind::TestCases)[0], "case 4");
    let added = &broker.events[0];
    assert_eq!(added.data, NodeRef::Section(section));
    assert_eq!(added.additional.len(), 1);
}

#[test]
fn test_fresh_holder_uses_section_naming() {
    let mut model = test_model(&["*** Keywords ***", "*** Tasks ***"]);
    let keywords = section(&model, SectionKind::Keywords);
    let tasks = section(&model, SectionKind::Tasks);
    let mut broker = RecordingBroker::new();

    run(&mut model, &mut broker, EditorCommand::create_fresh_holder(keywords, None));
    run(&mut model, &mut broker, EditorCommand::create_fresh_holder(tasks, None));
    assert_eq!(holder_names(&model, SectionKind::Keywords), vec!["Keyword 1"]);
    assert_eq!(holder_names(&model, SectionKind::Tasks), vec!["task 1"]);
}

#[test]
fn test_fresh_holder_in_variables_section_fails() {
    let mut model = test_model(&["*** Variables ***", "${a}  1"]);
    let section = section(&model, SectionKind::Variables);
    let mut broker = RecordingBroker::new();

    let result = update(
        &mut model,
        &mut broker,
        EditorCommand::create_fresh_holder(section, None),
    );
    assert_eq!(
        result,
        Err(CommandError::NotAHolderSection(SectionKind::Variables))
    );
    assert!(broker.is_empty());
}

// ========================================================================
// InsertHolders
// ========================================================================

#[test]
fn test_insert_empty_batch_is_a_no_op() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);
    let before = dump(&model);
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::insert_holders(section, None, vec![]));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
    assert_eq!(dump(&model), before);
}

#[test]
fn test_insert_renames_colliding_holders() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);
    let holders = vec![
        DetachedHolder::new("case", vec![]),
        DetachedHolder::new("fresh", vec![]),
        DetachedHolder::new("case 1", vec![]),
    ];

    let broker = assert_round_trip(
        &mut model,
        EditorCommand::insert_holders(section, Some(1), holders),
    );
    assert_eq!(broker.len(), 1);
    assert_eq!(broker.events[0].additional.len(), 3);
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["case", "case 3", "fresh", "case 4", "case 1", "case 2"]
    );
}

#[test]
fn test_insert_nameless_holders_get_placeholder_name() {
    let mut model = test_model(&["*** Test Cases ***", "case"]);
    let section = section(&model, SectionKind::TestCases);
    let holders = vec![DetachedHolder::new("", vec![]), DetachedHolder::new("", vec![])];

    assert_round_trip(&mut model, EditorCommand::insert_holders(section, None, holders));
    let names = holder_names(&model, SectionKind::TestCases);
    assert_eq!(names, vec!["case", PLACEHOLDER, "\\ 1"]);
    assert!(names.iter().all(|name| !name.is_empty()));
}

#[test]
fn test_insert_retypes_keyword_rows_for_test_cases() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);
    let rows = vec![
        TokenRow::setting(HolderKind::Keyword, "[Teardown]", &["Close"]),
        TokenRow::setting(HolderKind::Keyword, "[Arguments]", &["${x}"]),
        TokenRow::call(HolderKind::Keyword, "Log", &["${x}"]),
    ];
    let mut broker = RecordingBroker::new();

    run(
        &mut model,
        &mut broker,
        EditorCommand::insert_holders(section, None, vec![DetachedHolder::new("copied", rows)]),
    );
    let copied = dump(&model);
    let copied = copied.holder(SectionKind::TestCases, "copied").unwrap();
    let types: Vec<ModelType> = copied.rows.iter().map(|r| r.model_type).collect();
    assert_eq!(
        types,
        vec![
            ModelType::TestCaseTeardown,
            ModelType::TestCaseSettingUnknown,
            ModelType::TestCaseExecutableRow,
        ]
    );
}

#[test]
fn test_insert_past_the_end_fails_without_events() {
    let mut model = three_cases();
    let section = section(&model, SectionKind::TestCases);
    let before = dump(&model);
    let mut broker = RecordingBroker::new();

    let result = update(
        &mut model,
        &mut broker,
        EditorCommand::insert_holders(section, Some(7), vec![DetachedHolder::new("x", vec![])]),
    );
    assert_eq!(result, Err(CommandError::IndexOutOfRange { index: 7, len: 3 }));
    assert!(broker.is_empty());
    assert_eq!(dump(&model), before);
}

// ========================================================================
// DeleteHolders
// ========================================================================

#[test]
fn test_delete_sends_one_event_per_section() {
    let mut model = test_model(&[
        "*** Test Cases ***",
        "case",
        "case 1",
        "case 2",
        "*** Keywords ***",
        "kw",
        "  No Operation",
    ]);
    let ids = vec![
        holder(&model, SectionKind::TestCases, "case 2"),
        holder(&model, SectionKind::Keywords, "kw"),
        holder(&model, SectionKind::TestCases, "case"),
    ];

    let broker = assert_round_trip(&mut model, EditorCommand::delete_holders(ids));
    assert_eq!(broker.count(ModelEventKind::ElementRemoved), 2);
}

#[test]
fn test_delete_restores_original_positions() {
    let mut model = three_cases();
    let ids = vec![
        holder(&model, SectionKind::TestCases, "case"),
        holder(&model, SectionKind::TestCases, "case 2"),
    ];
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::delete_holders(ids.clone()));
    assert_eq!(holder_names(&model, SectionKind::TestCases), vec!["case 1"]);

    broker.clear();
    undo_all(&mut model, &mut broker, undo);
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["case", "case 1", "case 2"]
    );
    assert_eq!(broker.count(ModelEventKind::ElementAdded), 1);
    // Restored holders come back under their old ids
    assert_eq!(holder(&model, SectionKind::TestCases, "case"), ids[0]);
}

// ========================================================================
// Move and rename
// ========================================================================

#[test]
fn test_move_holder_up() {
    let mut model = three_cases();
    let id = holder(&model, SectionKind::TestCases, "case 1");

    let broker = assert_round_trip(&mut model, EditorCommand::move_holder_up(id));
    assert_eq!(broker.count(ModelEventKind::ElementMoved), 1);
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["case 1", "case", "case 2"]
    );
}

#[test]
fn test_move_first_holder_up_is_a_no_op() {
    let mut model = three_cases();
    let first = holder(&model, SectionKind::TestCases, "case");
    let last = holder(&model, SectionKind::TestCases, "case 2");
    let mut broker = RecordingBroker::new();

    assert!(run(&mut model, &mut broker, EditorCommand::move_holder_up(first)).is_empty());
    assert!(run(&mut model, &mut broker, EditorCommand::move_holder_down(last)).is_empty());
    assert!(broker.is_empty());
}

#[test]
fn test_set_holder_name() {
    let mut model = three_cases();
    let id = holder(&model, SectionKind::TestCases, "case 1");

    let broker = assert_round_trip(&mut model, EditorCommand::set_holder_name(id, Some("login")));
    assert_eq!(
        broker.count_for(ModelEventKind::ElementNameChanged, NodeRef::Holder(id)),
        1
    );
}

#[test]
fn test_empty_holder_name_becomes_placeholder() {
    let mut model = three_cases();
    let id = holder(&model, SectionKind::TestCases, "case");
    let mut broker = RecordingBroker::new();

    run(&mut model, &mut broker, EditorCommand::set_holder_name(id, None));
    assert_eq!(model.suite.holder(id).unwrap().name(), PLACEHOLDER);

    broker.clear();
    run(&mut model, &mut broker, EditorCommand::set_holder_name(id, Some("")));
    assert!(broker.is_empty());
}

#[test]
fn test_unchanged_holder_name_is_a_no_op() {
    let mut model = three_cases();
    let id = holder(&model, SectionKind::TestCases, "case");
    let mut broker = RecordingBroker::new();

    let undo = run(&mut model, &mut broker, EditorCommand::set_holder_name(id, Some("case")));
    assert!(undo.is_empty());
    assert!(broker.is_empty());
}
