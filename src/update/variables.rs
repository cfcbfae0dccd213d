//! Variable commands

use super::UndoCommands;
use crate::commands::{Direction, EditorCommand, VariableCmd};
use crate::error::CommandError;
use crate::events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
use crate::model::{variable_type, EditorModel, VariableId};

/// Handle variable commands
pub fn update_variable(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    cmd: VariableCmd,
) -> UndoCommands {
    match cmd {
        VariableCmd::Move {
            variable,
            direction,
        } => move_variable(model, broker, variable, direction),
        VariableCmd::SetName { variable, name } => set_name(model, broker, variable, name),
    }
}

fn move_variable(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    variable: VariableId,
    direction: Direction,
) -> UndoCommands {
    let section = model
        .suite
        .variable(variable)
        .ok_or(CommandError::UnknownVariable(variable))?
        .section();
    let index = model
        .suite
        .variable_index(variable)
        .ok_or(CommandError::UnknownVariable(variable))?;
    let len = model.suite.variables_of(section).count();

    let neighbour = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < len => index + 1,
        _ => return Ok(vec![]),
    };
    model.suite.swap_variables(section, index, neighbour);

    broker.send(ModelEvent::new(
        ModelEventKind::VariableMoved,
        NodeRef::Section(section),
    ));
    Ok(vec![EditorCommand::Variable(VariableCmd::Move {
        variable,
        direction: direction.opposite(),
    })])
}

fn set_name(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    variable: VariableId,
    name: String,
) -> UndoCommands {
    let current = model
        .suite
        .variable(variable)
        .ok_or(CommandError::UnknownVariable(variable))?;
    if current.declaration() == name {
        return Ok(vec![]);
    }
    let type_changed =
        current.variable_type() != variable_type(&name, current.value().len());

    let old = model.suite.set_variable_name(variable, &name)?;
    broker.send(ModelEvent::new(
        ModelEventKind::VariableNameChange,
        NodeRef::Variable(variable),
    ));
    if type_changed {
        broker.send(ModelEvent::new(
            ModelEventKind::VariableTypeChange,
            NodeRef::Variable(variable),
        ));
    }
    Ok(vec![EditorCommand::set_variable_name(variable, &old)])
}
