//! Sparse cell and argument editing
//!
//! Every function returns the edited row, or `None` when the edit would leave
//! the row unchanged. Callers treat `None` as a no-op and send nothing.

use crate::error::CommandError;
use crate::model::token_row::{TokenRow, PLACEHOLDER};

/// Upper bound on the argument index a padding write may reach
pub const MAX_ARGUMENTS: usize = 1 << 16;

/// Reject argument writes that would pad a row past [`MAX_ARGUMENTS`]
///
/// Clearing never pads, so any index is fine for `None`/`""`.
pub fn check_argument_index(index: usize, value: Option<&str>) -> Result<(), CommandError> {
    let writes = value.is_some_and(|v| !v.is_empty());
    if writes && index >= MAX_ARGUMENTS {
        return Err(CommandError::ArgumentIndexTooLarge {
            index,
            limit: MAX_ARGUMENTS,
        });
    }
    Ok(())
}

/// Set, clear, or pad the argument at `index`
///
/// A non-empty value beyond the current arguments pads the gap with
/// placeholders. Clearing the last argument removes it together with any
/// trailing placeholders; clearing an inner one writes a placeholder so later
/// cells keep their positions. Writes rejected by [`check_argument_index`]
/// yield `None`.
pub fn set_argument(row: &TokenRow, index: usize, value: Option<&str>) -> Option<TokenRow> {
    if row.is_empty_line() || check_argument_index(index, value).is_err() {
        return None;
    }
    let mut next = row.clone();
    match value.filter(|v| !v.is_empty()) {
        Some(value) => {
            if index < next.arguments.len() {
                next.arguments[index] = value.to_string();
            } else {
                next.arguments.resize(index, PLACEHOLDER.to_string());
                next.arguments.push(value.to_string());
            }
            // A name must exist in front of any argument
            if next.is_executable() && next.declaration.is_empty() {
                next.declaration = PLACEHOLDER.to_string();
            }
        }
        None => {
            let len = next.arguments.len();
            if index >= len {
                return None;
            }
            if index == len - 1 {
                next.arguments.pop();
                while next.arguments.last().map(String::as_str) == Some(PLACEHOLDER) {
                    next.arguments.pop();
                }
            } else {
                next.arguments[index] = PLACEHOLDER.to_string();
            }
        }
    }
    (next != *row).then_some(next)
}

/// Insert `value` at `index` of the element tokens
///
/// Index 0 replaces the declaration (the old one shifts into the arguments),
/// indices up to the end of the arguments insert an argument, anything later
/// lands in the comment tokens. Empty lines have no cells to shift.
pub fn insert_cell(row: &TokenRow, index: usize, value: &str) -> Option<TokenRow> {
    if row.is_empty_line() {
        return None;
    }
    let mut next = row.clone();
    let arguments_end = 1 + next.arguments.len();
    let index = index.min(arguments_end + next.comment.len());

    if index == 0 {
        let previous = std::mem::replace(&mut next.declaration, value.to_string());
        next.arguments.insert(0, previous);
    } else if index <= arguments_end {
        next.arguments.insert(index - 1, value.to_string());
    } else {
        next.comment.insert(index - arguments_end, value.to_string());
    }
    Some(next.reclassified())
}

/// Remove the element token at `index`
///
/// Removing the declaration promotes the first argument into its place.
pub fn delete_cell(row: &TokenRow, index: usize) -> Option<TokenRow> {
    if row.is_empty_line() {
        return None;
    }
    let mut next = row.clone();
    let arguments_end = 1 + next.arguments.len();
    if index >= arguments_end + next.comment.len() {
        return None;
    }

    if index == 0 {
        next.declaration = if next.arguments.is_empty() {
            String::new()
        } else {
            next.arguments.remove(0)
        };
    } else if index < arguments_end {
        next.arguments.remove(index - 1);
    } else {
        next.comment.remove(index - arguments_end);
    }
    let next = next.reclassified();
    (next != *row).then_some(next)
}

/// Replace the comment with a single token, or drop it for `None`/`""`
pub fn set_comment(row: &TokenRow, comment: Option<&str>) -> Option<TokenRow> {
    if row.is_empty_line() {
        return None;
    }
    let next = row.clone().with_comment(comment.unwrap_or_default());
    (next != *row).then_some(next)
}
