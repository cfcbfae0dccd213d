//! Reading suite text and dumping the model

mod common;

use common::*;
use rfedit::dump::SuiteDump;
use rfedit::model::SuiteFileBuilder;
use rfedit::rules::{ModelType, SectionKind};
use rfedit::{EditorCommand, EditorModel};

const SAMPLE: &str = include_str!("../samples/sample.robot");

fn sample_model() -> EditorModel {
    EditorModel::with_suite(SuiteFileBuilder::new().append_text(SAMPLE).build())
}

#[test]
fn test_sample_sections() {
    let model = sample_model();
    let kinds: Vec<SectionKind> = model.suite.sections().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Settings,
            SectionKind::Variables,
            SectionKind::TestCases,
            SectionKind::Keywords,
        ]
    );
    assert_eq!(
        holder_names(&model, SectionKind::TestCases),
        vec!["Valid Login", "Invalid Login"]
    );
}

#[test]
fn test_sample_row_types() {
    let dump = SuiteDump::from_suite(&sample_model().suite);

    let invalid = dump.holder(SectionKind::TestCases, "Invalid Login").unwrap();
    let types: Vec<ModelType> = invalid.rows.iter().map(|r| r.model_type).collect();
    assert_eq!(
        types,
        vec![
            ModelType::TestCaseDocumentation,
            ModelType::TestCaseExecutableRow,
            ModelType::TestCaseEmptyLine,
            ModelType::TestCaseExecutableRow,
            ModelType::TestCaseExecutableRow,
            ModelType::TestCaseTeardown,
        ]
    );

    let open = dump.holder(SectionKind::Keywords, "Open Login Page").unwrap();
    assert_eq!(open.rows[1].model_type, ModelType::UserKeywordSettingUnknown);

    let input = dump.holder(SectionKind::Keywords, "Input Credentials").unwrap();
    assert_eq!(input.rows[0].model_type, ModelType::UserKeywordArguments);
    assert_eq!(input.rows[3].model_type, ModelType::UserKeywordReturn);
}

#[test]
fn test_sample_comment_row() {
    let model = sample_model();
    let valid = holder(&model, SectionKind::TestCases, "Valid Login");
    let comment = model.suite.row(row_at(&model, valid, 4)).unwrap();
    assert_eq!(comment.name(), "");
    assert_eq!(comment.comment(), "# Landing page check");
}

#[test]
fn test_sample_variables() {
    let model = sample_model();
    let dump = dump(&model);
    let variables = &dump
        .sections
        .iter()
        .find(|s| s.kind == SectionKind::Variables)
        .unwrap()
        .variables;
    assert_eq!(variables.len(), 3);
    assert_eq!(variables[1].name, "@{USERS}");
    assert_eq!(variables[1].value, ["alice", "bob"]);
    assert_eq!(variables[1].comment, ["# known accounts"]);
}

#[test]
fn test_json_reflects_edits() {
    let mut model = sample_model();
    let valid = holder(&model, SectionKind::TestCases, "Valid Login");
    let submit = row_at(&model, valid, 3);

    assert_round_trip(&mut model, EditorCommand::convert_call_to_comment(submit));
    let json = dump(&model).to_json().unwrap();
    assert!(json.contains("\"# Submit\""));
}
