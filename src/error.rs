//! Errors raised by editor commands
//!
//! Every variant is raised before the command mutates anything, so a failed
//! command leaves the suite untouched and sends no events.

use thiserror::Error;

use crate::model::{HolderId, RowId, SectionId, VariableId};
use crate::rules::{RowKind, SectionKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("setting row {0:?} cannot be moved up or down")]
    IllegalSettingMove(RowId),

    #[error("unrecognized section name: {0:?}")]
    UnrecognizedSection(String),

    #[error("section {0:?} does not exist")]
    UnknownSection(SectionId),

    #[error("holder {0:?} does not exist")]
    UnknownHolder(HolderId),

    #[error("row {0:?} does not exist")]
    UnknownRow(RowId),

    #[error("variable {0:?} does not exist")]
    UnknownVariable(VariableId),

    #[error("{0:?} section does not contain code holders")]
    NotAHolderSection(SectionKind),

    #[error("{0:?} section does not contain variables")]
    NotAVariableSection(SectionKind),

    #[error("row {row:?} is {actual:?}, expected {expected}")]
    UnexpectedRowKind {
        row: RowId,
        actual: RowKind,
        expected: &'static str,
    },

    #[error("index {index} is out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("argument index {index} is past the {limit} cells a row may hold")]
    ArgumentIndexTooLarge { index: usize, limit: usize },
}
