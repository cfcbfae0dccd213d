//! Declaration type lookup keyed by (holder kind, row kind)
//!
//! The same bracket literal maps to different declaration types depending on
//! where the row lives: `[Setup]` is a real setting in a test case but an
//! unknown one in a keyword, `[Arguments]` the other way round.

use serde::{Deserialize, Serialize};

use super::kinds::{HolderKind, RowKind, SettingRole};

/// Concrete declaration type of a token row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    TestCaseExecutableRow,
    TestCaseEmptyLine,
    TestCaseTags,
    TestCaseSetup,
    TestCaseTeardown,
    TestCaseTimeout,
    TestCaseTemplate,
    TestCaseDocumentation,
    TestCaseSettingUnknown,

    TaskExecutableRow,
    TaskEmptyLine,
    TaskTags,
    TaskSetup,
    TaskTeardown,
    TaskTimeout,
    TaskTemplate,
    TaskDocumentation,
    TaskSettingUnknown,

    UserKeywordExecutableRow,
    UserKeywordEmptyLine,
    UserKeywordTags,
    UserKeywordArguments,
    UserKeywordTeardown,
    UserKeywordTimeout,
    UserKeywordReturn,
    UserKeywordDocumentation,
    UserKeywordSettingUnknown,
}

/// Declaration type of a row of `kind` living in a holder of `holder` kind
pub fn model_type(holder: HolderKind, kind: RowKind) -> ModelType {
    use HolderKind as H;
    use ModelType as M;
    use SettingRole as S;

    match (holder, kind) {
        (H::TestCase, RowKind::Executable) => M::TestCaseExecutableRow,
        (H::TestCase, RowKind::Empty) => M::TestCaseEmptyLine,
        (H::TestCase, RowKind::Setting(role)) => match role {
            S::Tags => M::TestCaseTags,
            S::Setup => M::TestCaseSetup,
            S::Teardown => M::TestCaseTeardown,
            S::Timeout => M::TestCaseTimeout,
            S::Template => M::TestCaseTemplate,
            S::Documentation => M::TestCaseDocumentation,
            S::Arguments | S::Return | S::Unknown => M::TestCaseSettingUnknown,
        },

        (H::Task, RowKind::Executable) => M::TaskExecutableRow,
        (H::Task, RowKind::Empty) => M::TaskEmptyLine,
        (H::Task, RowKind::Setting(role)) => match role {
            S::Tags => M::TaskTags,
            S::Setup => M::TaskSetup,
            S::Teardown => M::TaskTeardown,
            S::Timeout => M::TaskTimeout,
            S::Template => M::TaskTemplate,
            S::Documentation => M::TaskDocumentation,
            S::Arguments | S::Return | S::Unknown => M::TaskSettingUnknown,
        },

        (H::Keyword, RowKind::Executable) => M::UserKeywordExecutableRow,
        (H::Keyword, RowKind::Empty) => M::UserKeywordEmptyLine,
        (H::Keyword, RowKind::Setting(role)) => match role {
            S::Tags => M::UserKeywordTags,
            S::Arguments => M::UserKeywordArguments,
            S::Teardown => M::UserKeywordTeardown,
            S::Timeout => M::UserKeywordTimeout,
            S::Return => M::UserKeywordReturn,
            S::Documentation => M::UserKeywordDocumentation,
            S::Setup | S::Template | S::Unknown => M::UserKeywordSettingUnknown,
        },
    }
}

impl ModelType {
    pub fn holder_kind(self) -> HolderKind {
        use ModelType::*;
        match self {
            TestCaseExecutableRow | TestCaseEmptyLine | TestCaseTags | TestCaseSetup
            | TestCaseTeardown | TestCaseTimeout | TestCaseTemplate | TestCaseDocumentation
            | TestCaseSettingUnknown => HolderKind::TestCase,
            TaskExecutableRow | TaskEmptyLine | TaskTags | TaskSetup | TaskTeardown
            | TaskTimeout | TaskTemplate | TaskDocumentation | TaskSettingUnknown => {
                HolderKind::Task
            }
            UserKeywordExecutableRow
            | UserKeywordEmptyLine
            | UserKeywordTags
            | UserKeywordArguments
            | UserKeywordTeardown
            | UserKeywordTimeout
            | UserKeywordReturn
            | UserKeywordDocumentation
            | UserKeywordSettingUnknown => HolderKind::Keyword,
        }
    }

    /// Row kind of this type; every unknown setting reports [`SettingRole::Unknown`]
    pub fn row_kind(self) -> RowKind {
        use ModelType::*;
        match self {
            TestCaseExecutableRow | TaskExecutableRow | UserKeywordExecutableRow => {
                RowKind::Executable
            }
            TestCaseEmptyLine | TaskEmptyLine | UserKeywordEmptyLine => RowKind::Empty,
            TestCaseTags | TaskTags | UserKeywordTags => RowKind::Setting(SettingRole::Tags),
            TestCaseSetup | TaskSetup => RowKind::Setting(SettingRole::Setup),
            TestCaseTeardown | TaskTeardown | UserKeywordTeardown => {
                RowKind::Setting(SettingRole::Teardown)
            }
            TestCaseTimeout | TaskTimeout | UserKeywordTimeout => {
                RowKind::Setting(SettingRole::Timeout)
            }
            TestCaseTemplate | TaskTemplate => RowKind::Setting(SettingRole::Template),
            UserKeywordArguments => RowKind::Setting(SettingRole::Arguments),
            UserKeywordReturn => RowKind::Setting(SettingRole::Return),
            TestCaseDocumentation | TaskDocumentation | UserKeywordDocumentation => {
                RowKind::Setting(SettingRole::Documentation)
            }
            TestCaseSettingUnknown | TaskSettingUnknown | UserKeywordSettingUnknown => {
                RowKind::Setting(SettingRole::Unknown)
            }
        }
    }

    pub fn is_setting(self) -> bool {
        self.row_kind().is_setting()
    }
}
