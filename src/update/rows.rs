//! Row content commands: names, arguments, comments, cells, conversions
//!
//! All of them compute the new token row with a pure rule and hand it to
//! [`rewrite`], which applies it and produces the inverse rewrite.

use super::UndoCommands;
use crate::commands::{ChangeStyle, EditorCommand, RowCmd};
use crate::error::CommandError;
use crate::events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
use crate::model::{DetachedRow, EditorModel, RowId, TokenRow};
use crate::rules::{cells, conversion, RowKind};

/// Handle row content commands
pub fn update_row(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    cmd: RowCmd,
) -> UndoCommands {
    match cmd {
        RowCmd::SetName { row, name } => {
            let next = conversion::rename(token(model, row)?, name.as_deref());
            apply(model, broker, row, next, ChangeStyle::Fields)
        }
        RowCmd::SetArgument { row, index, value } => {
            let current = token(model, row)?;
            cells::check_argument_index(index, value.as_deref())?;
            let next = cells::set_argument(current, index, value.as_deref());
            apply(model, broker, row, next, ChangeStyle::Fields)
        }
        RowCmd::SetComment { row, comment } => {
            let next = cells::set_comment(token(model, row)?, comment.as_deref());
            apply(model, broker, row, next, ChangeStyle::Fields)
        }
        RowCmd::InsertCell { row, index, value } => {
            let next = cells::insert_cell(token(model, row)?, index, &value);
            apply(model, broker, row, next, ChangeStyle::Cells)
        }
        RowCmd::DeleteCell { row, index } => {
            let next = cells::delete_cell(token(model, row)?, index);
            apply(model, broker, row, next, ChangeStyle::Cells)
        }
        RowCmd::ConvertCallToComment { row } => {
            let current = expect_kind(model, row, "an executable row", |k| {
                k == RowKind::Executable
            })?;
            let next = conversion::to_comment(current);
            apply(model, broker, row, next, ChangeStyle::Converted)
        }
        RowCmd::ConvertSettingToComment { row } => {
            let current = expect_kind(model, row, "a setting", RowKind::is_setting)?;
            let next = conversion::to_comment(current);
            apply(model, broker, row, next, ChangeStyle::Converted)
        }
        RowCmd::ConvertEmptyToCall { row, name } => {
            let current = expect_kind(model, row, "an empty line", |k| k == RowKind::Empty)?;
            let next = conversion::to_call(current, &name);
            apply(model, broker, row, Some(next), ChangeStyle::Converted)
        }
        RowCmd::ConvertEmptyToSetting { row, declaration } => {
            let current = expect_kind(model, row, "an empty line", |k| k == RowKind::Empty)?;
            let next = conversion::to_setting(current, &declaration);
            apply(model, broker, row, Some(next), ChangeStyle::Converted)
        }
        RowCmd::ConvertSettingToSetting { row, declaration } => {
            let current = expect_kind(model, row, "a setting", RowKind::is_setting)?;
            let next = conversion::to_setting(current, &declaration);
            apply(model, broker, row, Some(next), ChangeStyle::Converted)
        }
        RowCmd::ConvertSettingToCall { row, name } => {
            let current = expect_kind(model, row, "a setting", RowKind::is_setting)?;
            let next = conversion::to_call(current, &name);
            apply(model, broker, row, Some(next), ChangeStyle::Converted)
        }
        RowCmd::Rewrite {
            row,
            token,
            reuse_id,
            style,
        } => rewrite(model, broker, row, token, reuse_id, style),
    }
}

fn token(model: &EditorModel, row: RowId) -> Result<&TokenRow, CommandError> {
    model
        .suite
        .row(row)
        .map(|r| r.token())
        .ok_or(CommandError::UnknownRow(row))
}

fn expect_kind<'m>(
    model: &'m EditorModel,
    row: RowId,
    expected: &'static str,
    accepts: impl Fn(RowKind) -> bool,
) -> Result<&'m TokenRow, CommandError> {
    let current = token(model, row)?;
    if accepts(current.kind()) {
        Ok(current)
    } else {
        Err(CommandError::UnexpectedRowKind {
            row,
            actual: current.kind(),
            expected,
        })
    }
}

fn apply(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    row: RowId,
    next: Option<TokenRow>,
    style: ChangeStyle,
) -> UndoCommands {
    match next {
        Some(token) => rewrite(model, broker, row, token, None, style),
        None => Ok(vec![]),
    }
}

/// Write `token` into `row` and announce it according to `style`
///
/// A row whose declaration type changes is swapped for a new node at the same
/// index (taking `reuse_id` when free); otherwise the token is replaced in place.
fn rewrite(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    row: RowId,
    token: TokenRow,
    reuse_id: Option<RowId>,
    style: ChangeStyle,
) -> UndoCommands {
    let current = model.suite.row(row).ok_or(CommandError::UnknownRow(row))?;
    let holder = current.holder();
    let old = current.token().clone();
    if old == token {
        return Ok(vec![]);
    }

    let swap = match style {
        ChangeStyle::Fields | ChangeStyle::Cells => old.model_type() != token.model_type(),
        ChangeStyle::Converted => true,
    };
    tracing::trace!(?row, ?style, swap, "rewriting row");

    let (target, undo_reuse) = if swap {
        let (new_id, _) = model.suite.replace_row(
            row,
            DetachedRow {
                id: reuse_id,
                token: token.clone(),
            },
        )?;
        (new_id, Some(row))
    } else {
        model.suite.set_row_token(row, token.clone())?;
        (row, None)
    };

    match style {
        ChangeStyle::Cells if !swap => broker.send(ModelEvent::new(
            ModelEventKind::KeywordCallCellChange,
            NodeRef::Row(target),
        )),
        ChangeStyle::Cells | ChangeStyle::Converted => broker.send(ModelEvent::with_children(
            ModelEventKind::KeywordCallConverted,
            NodeRef::Holder(holder),
            vec![NodeRef::Row(target)],
        )),
        ChangeStyle::Fields => {
            if swap {
                broker.send(ModelEvent::with_children(
                    ModelEventKind::KeywordCallConverted,
                    NodeRef::Holder(holder),
                    vec![NodeRef::Row(target)],
                ));
            } else if old.declaration() != token.declaration() {
                broker.send(ModelEvent::new(
                    ModelEventKind::KeywordCallNameChange,
                    NodeRef::Row(target),
                ));
            }
            if old.arguments() != token.arguments() {
                broker.send(ModelEvent::new(
                    ModelEventKind::KeywordCallArgumentChange,
                    NodeRef::Row(target),
                ));
            }
            if old.comment_tokens() != token.comment_tokens() {
                broker.send(ModelEvent::new(
                    ModelEventKind::KeywordCallCommentChange,
                    NodeRef::Row(target),
                ));
            }
        }
    }

    Ok(vec![EditorCommand::Row(RowCmd::Rewrite {
        row: target,
        token: old,
        reuse_id: undo_reuse,
        style,
    })])
}
