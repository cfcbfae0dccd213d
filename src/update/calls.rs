//! Keyword call commands: create, insert, delete, move, replace

use std::collections::HashSet;

use super::UndoCommands;
use crate::commands::{CallCmd, Direction, EditorCommand, RowGroup};
use crate::error::CommandError;
use crate::events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
use crate::model::{DetachedRow, EditorModel, HolderId, RowId, TokenRow};

/// Handle keyword call commands
pub fn update_call(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    cmd: CallCmd,
) -> UndoCommands {
    match cmd {
        CallCmd::CreateFresh { holder, index } => {
            let kind = model
                .suite
                .holder(holder)
                .ok_or(CommandError::UnknownHolder(holder))?
                .kind();
            insert(model, broker, holder, index, vec![TokenRow::call(kind, "", &[])])
        }
        CallCmd::Insert {
            holder,
            index,
            rows,
        } => insert(model, broker, holder, index, rows),
        CallCmd::Delete { rows } => delete(model, broker, rows),
        CallCmd::Restore { groups } => restore(model, broker, groups),
        CallCmd::Move { row, direction } => move_call(model, broker, row, direction),
        CallCmd::Replace { row, replacement } => replace(model, broker, row, replacement),
    }
}

fn insert(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    holder: HolderId,
    index: Option<usize>,
    rows: Vec<TokenRow>,
) -> UndoCommands {
    if rows.is_empty() {
        return Ok(vec![]);
    }
    let len = model
        .suite
        .holder(holder)
        .ok_or(CommandError::UnknownHolder(holder))?
        .rows()
        .len();
    if let Some(index) = index.filter(|i| *i > len) {
        return Err(CommandError::IndexOutOfRange { index, len });
    }

    let mut ids = Vec::with_capacity(rows.len());
    for (offset, row) in rows.into_iter().enumerate() {
        let at = index.map(|i| i + offset);
        ids.push(model.suite.insert_row(holder, at, row.into())?);
    }

    broker.send(ModelEvent::with_children(
        ModelEventKind::KeywordCallAdded,
        NodeRef::Holder(holder),
        ids.iter().copied().map(NodeRef::Row).collect(),
    ));
    Ok(vec![EditorCommand::delete_calls(ids)])
}

fn delete(model: &mut EditorModel, broker: &mut dyn EventBroker, rows: Vec<RowId>) -> UndoCommands {
    // Group per holder, keeping first-seen order of holders
    let mut seen = HashSet::new();
    let mut grouped: Vec<(HolderId, Vec<(usize, RowId)>)> = Vec::new();
    for id in rows {
        if !seen.insert(id) {
            continue;
        }
        let holder = model
            .suite
            .row(id)
            .ok_or(CommandError::UnknownRow(id))?
            .holder();
        let index = model.suite.row_index(id).ok_or(CommandError::UnknownRow(id))?;
        match grouped.iter_mut().find(|(h, _)| *h == holder) {
            Some((_, members)) => members.push((index, id)),
            None => grouped.push((holder, vec![(index, id)])),
        }
    }
    if grouped.is_empty() {
        return Ok(vec![]);
    }

    let mut groups = Vec::with_capacity(grouped.len());
    for (holder, mut members) in grouped {
        members.sort_by(|a, b| b.0.cmp(&a.0));
        let mut items: Vec<(usize, DetachedRow)> = members
            .into_iter()
            .filter_map(|(_, id)| model.suite.remove_row(id))
            .collect();
        items.reverse();

        broker.send(ModelEvent::new(
            ModelEventKind::KeywordCallRemoved,
            NodeRef::Holder(holder),
        ));
        groups.push(RowGroup { holder, items });
    }
    Ok(vec![EditorCommand::Call(CallCmd::Restore { groups })])
}

fn restore(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    groups: Vec<RowGroup>,
) -> UndoCommands {
    for group in &groups {
        if model.suite.holder(group.holder).is_none() {
            return Err(CommandError::UnknownHolder(group.holder));
        }
    }

    let mut restored = Vec::new();
    for group in groups {
        if group.items.is_empty() {
            continue;
        }
        let mut ids = Vec::with_capacity(group.items.len());
        for (index, row) in group.items {
            ids.push(model.suite.insert_row(group.holder, Some(index), row)?);
        }
        broker.send(ModelEvent::with_children(
            ModelEventKind::KeywordCallAdded,
            NodeRef::Holder(group.holder),
            ids.iter().copied().map(NodeRef::Row).collect(),
        ));
        restored.extend(ids);
    }

    if restored.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![EditorCommand::delete_calls(restored)])
}

/// Swap a non-setting row with its neighbour inside the same holder
///
/// Settings never move; a setting neighbour acts as the boundary.
fn move_call(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    row: RowId,
    direction: Direction,
) -> UndoCommands {
    let current = model.suite.row(row).ok_or(CommandError::UnknownRow(row))?;
    if current.token().is_setting() {
        return Err(CommandError::IllegalSettingMove(row));
    }
    let holder_id = current.holder();
    let holder = model
        .suite
        .holder(holder_id)
        .ok_or(CommandError::UnknownHolder(holder_id))?;
    let index = model.suite.row_index(row).ok_or(CommandError::UnknownRow(row))?;

    let neighbour = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < holder.rows().len() => index + 1,
        _ => return Ok(vec![]),
    };
    let neighbour_is_setting = model
        .suite
        .row(holder.rows()[neighbour])
        .is_some_and(|r| r.token().is_setting());
    if neighbour_is_setting {
        return Ok(vec![]);
    }

    model.suite.swap_rows(holder_id, index, neighbour);
    broker.send(ModelEvent::new(
        ModelEventKind::KeywordCallMoved,
        NodeRef::Holder(holder_id),
    ));
    Ok(vec![EditorCommand::Call(CallCmd::Move {
        row,
        direction: direction.opposite(),
    })])
}

fn replace(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    row: RowId,
    replacement: DetachedRow,
) -> UndoCommands {
    let holder = model
        .suite
        .row(row)
        .ok_or(CommandError::UnknownRow(row))?
        .holder();
    let (new_id, old) = model.suite.replace_row(row, replacement)?;

    broker.send(ModelEvent::with_children(
        ModelEventKind::KeywordCallConverted,
        NodeRef::Holder(holder),
        vec![NodeRef::Row(new_id)],
    ));
    Ok(vec![EditorCommand::Call(CallCmd::Replace {
        row: new_id,
        replacement: old,
    })])
}
