//! Row kind transitions
//!
//! Pure functions from one token row to its converted form. None of them move
//! the row; the caller swaps the result in at the same index.

use crate::model::token_row::{TokenRow, COMMENT_SEPARATOR, PLACEHOLDER};
use crate::rules::{classify, model_type, RowKind};

/// Fold the whole row into a single comment token
///
/// `call · 1 · 2 · #comment` becomes `# call | 1 | 2 | #comment`. Returns `None`
/// for rows without any text.
pub fn to_comment(row: &TokenRow) -> Option<TokenRow> {
    let cells: Vec<&str> = row
        .element_tokens()
        .into_iter()
        .enumerate()
        .filter(|(i, cell)| *i > 0 || !cell.is_empty())
        .map(|(_, cell)| cell)
        .collect();
    let first = cells.first()?;

    let mut text = String::new();
    if !first.starts_with('#') {
        text.push_str("# ");
    }
    text.push_str(&cells.join(COMMENT_SEPARATOR));

    Some(TokenRow {
        model_type: model_type(row.holder_kind(), RowKind::Executable),
        declaration: String::new(),
        arguments: Vec::new(),
        comment: vec![text],
    })
}

/// Executable row named `name`, keeping arguments and comment
///
/// A setting's bracket literal is dropped rather than kept as an argument.
/// A bracket `name` declares a setting, so the row becomes that setting.
pub fn to_call(row: &TokenRow, name: &str) -> TokenRow {
    if classify(name).is_setting() {
        return to_setting(row, name);
    }
    TokenRow {
        model_type: model_type(row.holder_kind(), RowKind::Executable),
        declaration: name.to_string(),
        ..row.clone()
    }
}

/// Setting row declared by `declaration`, keeping arguments and comment
pub fn to_setting(row: &TokenRow, declaration: &str) -> TokenRow {
    let setting = TokenRow::setting(row.holder_kind(), declaration, &[]);
    TokenRow {
        model_type: setting.model_type,
        declaration: setting.declaration,
        ..row.clone()
    }
}

/// Row after its name is set to `name`
///
/// Bracket literals turn the row into the matching setting and plain text into
/// a call. `None` drops the current name and promotes the first argument in its
/// place. Returns `None` when nothing would change.
pub fn rename(row: &TokenRow, name: Option<&str>) -> Option<TokenRow> {
    if row.is_empty_line() && name.map_or(true, str::is_empty) {
        return None;
    }
    let holder = row.holder_kind();
    let next = match name {
        Some(text) => {
            let text = if text.is_empty() && !row.arguments.is_empty() {
                PLACEHOLDER
            } else {
                text
            };
            TokenRow {
                model_type: model_type(holder, classify(text)),
                declaration: text.to_string(),
                ..row.clone()
            }
        }
        None => {
            let mut arguments = row.arguments.clone();
            let declaration = if arguments.is_empty() {
                String::new()
            } else {
                arguments.remove(0)
            };
            TokenRow {
                model_type: model_type(holder, classify(&declaration)),
                declaration,
                arguments,
                comment: row.comment.clone(),
            }
        }
    };
    (next != *row).then_some(next)
}
