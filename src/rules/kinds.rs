//! Section, holder, and row kinds
//!
//! Kinds are small `Copy` enums; the declaration type of a row is derived from
//! a (holder kind, row kind) pair in [`super::table`].

use serde::{Deserialize, Serialize};

/// Kind of a top-level table in a suite file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Settings,
    Variables,
    TestCases,
    Tasks,
    Keywords,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Settings,
        SectionKind::Variables,
        SectionKind::TestCases,
        SectionKind::Tasks,
        SectionKind::Keywords,
    ];

    /// Parse a section header such as `*** Test Cases ***` or `keyword`
    ///
    /// Surrounding asterisks and whitespace are ignored, matching is case
    /// insensitive and accepts both singular and plural forms.
    pub fn from_header(header: &str) -> Option<Self> {
        let name = header.trim().trim_matches('*').trim().to_ascii_lowercase();
        match name.as_str() {
            "setting" | "settings" => Some(SectionKind::Settings),
            "variable" | "variables" => Some(SectionKind::Variables),
            "test case" | "test cases" => Some(SectionKind::TestCases),
            "task" | "tasks" => Some(SectionKind::Tasks),
            "keyword" | "keywords" => Some(SectionKind::Keywords),
            _ => None,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            SectionKind::Settings => "*** Settings ***",
            SectionKind::Variables => "*** Variables ***",
            SectionKind::TestCases => "*** Test Cases ***",
            SectionKind::Tasks => "*** Tasks ***",
            SectionKind::Keywords => "*** Keywords ***",
        }
    }

    /// Kind of holders this section contains, if it contains holders at all
    pub fn holder_kind(self) -> Option<HolderKind> {
        match self {
            SectionKind::TestCases => Some(HolderKind::TestCase),
            SectionKind::Tasks => Some(HolderKind::Task),
            SectionKind::Keywords => Some(HolderKind::Keyword),
            SectionKind::Settings | SectionKind::Variables => None,
        }
    }
}

/// Kind of a named code holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderKind {
    TestCase,
    Task,
    Keyword,
}

/// Semantic role of a bracketed setting row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingRole {
    Tags,
    Setup,
    Teardown,
    Timeout,
    Template,
    Arguments,
    Return,
    Documentation,
    Unknown,
}

impl SettingRole {
    /// Role of a declaration text, or `None` when the text is not a `[...]` literal
    pub fn from_declaration(text: &str) -> Option<Self> {
        let inner = bracket_inner(text)?;
        let role = match inner.trim().to_ascii_lowercase().as_str() {
            "tags" => SettingRole::Tags,
            "setup" => SettingRole::Setup,
            "teardown" => SettingRole::Teardown,
            "timeout" => SettingRole::Timeout,
            "template" => SettingRole::Template,
            "arguments" => SettingRole::Arguments,
            "return" => SettingRole::Return,
            "documentation" => SettingRole::Documentation,
            _ => SettingRole::Unknown,
        };
        Some(role)
    }

    /// Canonical bracket literal, `None` for unknown settings
    pub fn declaration(self) -> Option<&'static str> {
        match self {
            SettingRole::Tags => Some("[Tags]"),
            SettingRole::Setup => Some("[Setup]"),
            SettingRole::Teardown => Some("[Teardown]"),
            SettingRole::Timeout => Some("[Timeout]"),
            SettingRole::Template => Some("[Template]"),
            SettingRole::Arguments => Some("[Arguments]"),
            SettingRole::Return => Some("[Return]"),
            SettingRole::Documentation => Some("[Documentation]"),
            SettingRole::Unknown => None,
        }
    }
}

/// Which of the three row shapes a row has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    Executable,
    Setting(SettingRole),
    Empty,
}

impl RowKind {
    pub fn is_setting(self) -> bool {
        matches!(self, RowKind::Setting(_))
    }
}

/// Row kind implied by a declaration text: bracket literals are settings
pub fn classify(declaration: &str) -> RowKind {
    match SettingRole::from_declaration(declaration) {
        Some(role) => RowKind::Setting(role),
        None => RowKind::Executable,
    }
}

/// Text between the brackets of a `[...]` literal
pub fn bracket_inner(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
