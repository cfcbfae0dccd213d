//! Token-level record behind every view row
//!
//! A token row is a typed declaration token followed by argument tokens and
//! comment tokens. The declaration type always agrees with the holder kind the
//! row lives in; [`TokenRow::retyped_for`] re-derives it when a row moves
//! between holders.

use serde::{Deserialize, Serialize};

use crate::rules::{bracket_inner, classify, model_type, HolderKind, ModelType, RowKind};

/// Cell marker keeping later positions addressable after an earlier cell is cleared
pub const PLACEHOLDER: &str = "\\";

/// Separator used when comment tokens are shown as a single string
pub const COMMENT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub(crate) model_type: ModelType,
    pub(crate) declaration: String,
    pub(crate) arguments: Vec<String>,
    pub(crate) comment: Vec<String>,
}

impl TokenRow {
    /// Executable call row (`name` may be empty for comment-only lines)
    pub fn call(holder: HolderKind, name: &str, arguments: &[&str]) -> Self {
        Self {
            model_type: model_type(holder, RowKind::Executable),
            declaration: name.to_string(),
            arguments: arguments.iter().map(|a| a.to_string()).collect(),
            comment: Vec::new(),
        }
    }

    /// Setting row; the role comes from the bracket literal in `declaration`
    ///
    /// A declaration without brackets is wrapped, so `"Tags"` yields `[Tags]`.
    pub fn setting(holder: HolderKind, declaration: &str, arguments: &[&str]) -> Self {
        let declaration = if bracket_inner(declaration).is_some() {
            declaration.to_string()
        } else {
            format!("[{}]", declaration.trim())
        };
        Self {
            model_type: model_type(holder, classify(&declaration)),
            declaration,
            arguments: arguments.iter().map(|a| a.to_string()).collect(),
            comment: Vec::new(),
        }
    }

    pub fn empty(holder: HolderKind) -> Self {
        Self {
            model_type: model_type(holder, RowKind::Empty),
            declaration: String::new(),
            arguments: Vec::new(),
            comment: Vec::new(),
        }
    }

    /// Build a row from already split cells
    ///
    /// The first cell starting with `#` and everything after it form the comment.
    /// The declaration kind is derived from the first cell.
    pub fn from_cells<S: AsRef<str>>(holder: HolderKind, cells: &[S]) -> Self {
        let comment_at = cells
            .iter()
            .position(|c| c.as_ref().starts_with('#'))
            .unwrap_or(cells.len());
        let (code, comment) = cells.split_at(comment_at);
        let declaration = code.first().map(|c| c.as_ref().to_string()).unwrap_or_default();
        let arguments = code.iter().skip(1).map(|c| c.as_ref().to_string()).collect();
        Self {
            model_type: model_type(holder, classify(&declaration)),
            declaration,
            arguments,
            comment: comment.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = if comment.is_empty() {
            Vec::new()
        } else {
            vec![comment.to_string()]
        };
        self
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn kind(&self) -> RowKind {
        self.model_type.row_kind()
    }

    pub fn holder_kind(&self) -> HolderKind {
        self.model_type.holder_kind()
    }

    pub fn is_setting(&self) -> bool {
        self.model_type.is_setting()
    }

    pub fn is_executable(&self) -> bool {
        self.kind() == RowKind::Executable
    }

    pub fn is_empty_line(&self) -> bool {
        self.kind() == RowKind::Empty
    }

    /// Raw declaration text, bracket literal included for settings
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Display name: the call name, or the bracket inner text for settings
    pub fn name(&self) -> &str {
        match self.kind() {
            RowKind::Setting(_) => bracket_inner(&self.declaration).unwrap_or(&self.declaration),
            RowKind::Executable => &self.declaration,
            RowKind::Empty => "",
        }
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn comment_tokens(&self) -> &[String] {
        &self.comment
    }

    /// Comment tokens joined into a single display string
    pub fn comment(&self) -> String {
        self.comment.join(COMMENT_SEPARATOR)
    }

    /// Declaration, arguments, and comment tokens in order
    ///
    /// Empty lines have no element tokens at all.
    pub fn element_tokens(&self) -> Vec<&str> {
        if self.is_empty_line() {
            return Vec::new();
        }
        std::iter::once(self.declaration.as_str())
            .chain(self.arguments.iter().map(String::as_str))
            .chain(self.comment.iter().map(String::as_str))
            .collect()
    }

    /// Same row re-typed for a holder of another kind
    ///
    /// Settings keep their declaration text; the role is looked up again, so a
    /// keyword's unknown `[Setup]` becomes a real setup in a test case.
    pub fn retyped_for(&self, holder: HolderKind) -> Self {
        let kind = match self.kind() {
            RowKind::Empty => RowKind::Empty,
            RowKind::Executable => RowKind::Executable,
            RowKind::Setting(_) => classify(&self.declaration),
        };
        Self {
            model_type: model_type(holder, kind),
            ..self.clone()
        }
    }

    /// Re-derive the type from the current declaration text
    ///
    /// Used after cell edits that may have replaced the declaration token.
    pub(crate) fn reclassified(mut self) -> Self {
        if !self.is_empty_line() {
            self.model_type = model_type(self.holder_kind(), classify(&self.declaration));
        }
        self
    }
}
