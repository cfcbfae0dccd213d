//! Section commands

use super::UndoCommands;
use crate::commands::{EditorCommand, SectionCmd};
use crate::error::CommandError;
use crate::events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
use crate::model::EditorModel;
use crate::rules::SectionKind;

/// Handle section commands
pub fn update_section(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    cmd: SectionCmd,
) -> UndoCommands {
    match cmd {
        SectionCmd::Create { name } => {
            let kind = SectionKind::from_header(&name)
                .ok_or_else(|| CommandError::UnrecognizedSection(name.clone()))?;
            let (id, created) = model.suite.ensure_section(kind);
            if !created {
                return Ok(vec![]);
            }
            broker.send(ModelEvent::with_children(
                ModelEventKind::SuiteSectionAdded,
                NodeRef::Suite,
                vec![NodeRef::Section(id)],
            ));
            Ok(vec![EditorCommand::delete_section(id)])
        }
        SectionCmd::Delete { section } => {
            let (index, detached) = model
                .suite
                .remove_section(section)
                .ok_or(CommandError::UnknownSection(section))?;
            broker.send(ModelEvent::with_children(
                ModelEventKind::SuiteSectionRemoved,
                NodeRef::Suite,
                vec![NodeRef::Section(section)],
            ));
            Ok(vec![EditorCommand::Section(SectionCmd::Restore {
                index,
                section: detached,
            })])
        }
        SectionCmd::Restore { index, section } => {
            if model.suite.find_section(section.kind).is_some() {
                tracing::warn!("Not restoring {:?} section over an existing one", section.kind);
                return Ok(vec![]);
            }
            let id = model.suite.insert_section(Some(index), section);
            broker.send(ModelEvent::with_children(
                ModelEventKind::SuiteSectionAdded,
                NodeRef::Suite,
                vec![NodeRef::Section(id)],
            ));
            Ok(vec![EditorCommand::delete_section(id)])
        }
    }
}
