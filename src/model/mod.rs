//! Editing model - the suite tree plus engine configuration
//!
//! Commands receive the whole [`EditorModel`] so that configuration such as
//! fresh holder names is available next to the tree they mutate.

pub mod builder;
pub mod suite;
pub mod token_row;

pub use builder::{split_cells, SuiteFileBuilder};
pub use suite::{
    variable_type, DetachedHolder, DetachedRow, DetachedSection, DetachedVariable, Holder,
    HolderId, Row, RowId, Section, SectionId, SuiteFile, Variable, VariableId, VariableType,
};
pub use token_row::{TokenRow, COMMENT_SEPARATOR, PLACEHOLDER};

use crate::config::EngineConfig;

/// The complete editing state
#[derive(Debug, Clone, Default)]
pub struct EditorModel {
    pub suite: SuiteFile,
    pub config: EngineConfig,
}

impl EditorModel {
    pub fn new(suite: SuiteFile, config: EngineConfig) -> Self {
        Self { suite, config }
    }

    /// Model over `suite` with default configuration
    pub fn with_suite(suite: SuiteFile) -> Self {
        Self {
            suite,
            config: EngineConfig::default(),
        }
    }
}
