//! Holder commands: create, insert, delete, move, rename

use std::collections::HashSet;

use super::UndoCommands;
use crate::commands::{Direction, EditorCommand, HolderCmd, HolderGroup};
use crate::error::CommandError;
use crate::events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
use crate::model::{DetachedHolder, EditorModel, HolderId, SectionId, PLACEHOLDER};
use crate::names;

/// Handle holder commands
pub fn update_holder(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    cmd: HolderCmd,
) -> UndoCommands {
    match cmd {
        HolderCmd::CreateFresh { section, index } => create_fresh(model, broker, section, index),
        HolderCmd::Insert {
            section,
            index,
            holders,
        } => insert(model, broker, section, index, holders),
        HolderCmd::Delete { holders } => delete(model, broker, holders),
        HolderCmd::Restore { groups } => restore(model, broker, groups),
        HolderCmd::Move { holder, direction } => move_holder(model, broker, holder, direction),
        HolderCmd::SetName { holder, name } => set_name(model, broker, holder, name),
    }
}

fn create_fresh(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    section: SectionId,
    index: Option<usize>,
) -> UndoCommands {
    let kind = model.suite.holder_kind_of(section)?;
    let name = {
        let count = model.suite.holder_names(section).count();
        let taken: HashSet<&str> = model.suite.holder_names(section).collect();
        let base = model.config.naming.base_for(kind);
        // Count-based, bumped past names a user already picked
        (count + 1..)
            .map(|n| format!("{} {}", base, n))
            .find(|name| !taken.contains(name.as_str()))
            .unwrap_or_else(|| base.to_string())
    };

    let id = model
        .suite
        .insert_holder(section, index, DetachedHolder::new(&name, vec![]))?;
    broker.send(ModelEvent::with_children(
        ModelEventKind::ElementAdded,
        NodeRef::Section(section),
        vec![NodeRef::Holder(id)],
    ));
    Ok(vec![EditorCommand::delete_holders(vec![id])])
}

fn insert(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    section: SectionId,
    index: Option<usize>,
    holders: Vec<DetachedHolder>,
) -> UndoCommands {
    if holders.is_empty() {
        return Ok(vec![]);
    }
    model.suite.holder_kind_of(section)?;
    let len = model.suite.holder_names(section).count();
    if let Some(index) = index.filter(|i| *i > len) {
        return Err(CommandError::IndexOutOfRange { index, len });
    }

    let mut ids = Vec::with_capacity(holders.len());
    for (offset, mut holder) in holders.into_iter().enumerate() {
        if holder.name.is_empty() {
            holder.name = PLACEHOLDER.to_string();
        }
        let name = names::next_free_variant(model.suite.holder_names(section), &holder.name);
        if name != holder.name {
            tracing::debug!("Renaming inserted holder {:?} to {:?}", holder.name, name);
            holder.name = name;
        }
        let at = index.map(|i| i + offset);
        ids.push(model.suite.insert_holder(section, at, holder)?);
    }

    broker.send(ModelEvent::with_children(
        ModelEventKind::ElementAdded,
        NodeRef::Section(section),
        ids.iter().copied().map(NodeRef::Holder).collect(),
    ));
    Ok(vec![EditorCommand::delete_holders(ids)])
}

fn delete(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    holders: Vec<HolderId>,
) -> UndoCommands {
    // Group per section, keeping first-seen order of sections
    let mut seen = HashSet::new();
    let mut grouped: Vec<(SectionId, Vec<(usize, HolderId)>)> = Vec::new();
    for id in holders {
        if !seen.insert(id) {
            continue;
        }
        let section = model
            .suite
            .holder(id)
            .ok_or(CommandError::UnknownHolder(id))?
            .section();
        let index = model
            .suite
            .holder_index(id)
            .ok_or(CommandError::UnknownHolder(id))?;
        match grouped.iter_mut().find(|(s, _)| *s == section) {
            Some((_, members)) => members.push((index, id)),
            None => grouped.push((section, vec![(index, id)])),
        }
    }
    if grouped.is_empty() {
        return Ok(vec![]);
    }

    let mut groups = Vec::with_capacity(grouped.len());
    for (section, mut members) in grouped {
        // Remove back to front so recorded indices stay valid for restoring
        members.sort_by(|a, b| b.0.cmp(&a.0));
        let mut items: Vec<(usize, DetachedHolder)> = members
            .into_iter()
            .filter_map(|(_, id)| model.suite.remove_holder(id))
            .collect();
        items.reverse();

        broker.send(ModelEvent::new(
            ModelEventKind::ElementRemoved,
            NodeRef::Section(section),
        ));
        groups.push(HolderGroup { section, items });
    }
    Ok(vec![EditorCommand::Holder(HolderCmd::Restore { groups })])
}

fn restore(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    groups: Vec<HolderGroup>,
) -> UndoCommands {
    for group in &groups {
        model.suite.holder_kind_of(group.section)?;
    }

    let mut restored = Vec::new();
    for group in groups {
        if group.items.is_empty() {
            continue;
        }
        let mut ids = Vec::with_capacity(group.items.len());
        for (index, holder) in group.items {
            ids.push(model.suite.insert_holder(group.section, Some(index), holder)?);
        }
        broker.send(ModelEvent::with_children(
            ModelEventKind::ElementAdded,
            NodeRef::Section(group.section),
            ids.iter().copied().map(NodeRef::Holder).collect(),
        ));
        restored.extend(ids);
    }

    if restored.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![EditorCommand::delete_holders(restored)])
}

fn move_holder(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    holder: HolderId,
    direction: Direction,
) -> UndoCommands {
    let section = model
        .suite
        .holder(holder)
        .ok_or(CommandError::UnknownHolder(holder))?
        .section();
    let index = model
        .suite
        .holder_index(holder)
        .ok_or(CommandError::UnknownHolder(holder))?;
    let len = model.suite.holder_names(section).count();

    let neighbour = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < len => index + 1,
        _ => return Ok(vec![]),
    };
    model.suite.swap_holders(section, index, neighbour);

    broker.send(ModelEvent::new(
        ModelEventKind::ElementMoved,
        NodeRef::Section(section),
    ));
    Ok(vec![EditorCommand::Holder(HolderCmd::Move {
        holder,
        direction: direction.opposite(),
    })])
}

fn set_name(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    holder: HolderId,
    name: Option<String>,
) -> UndoCommands {
    let current = model
        .suite
        .holder(holder)
        .ok_or(CommandError::UnknownHolder(holder))?
        .name();
    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    if current == name {
        return Ok(vec![]);
    }

    let old = model.suite.set_holder_name(holder, &name)?;
    broker.send(ModelEvent::new(
        ModelEventKind::ElementNameChanged,
        NodeRef::Holder(holder),
    ));
    Ok(vec![EditorCommand::set_holder_name(holder, Some(&old))])
}
