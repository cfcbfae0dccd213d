//! Command execution
//!
//! All suite mutations flow through [`update`], which dispatches to the
//! per-group handlers and returns the undo commands of the executed command.

mod calls;
mod holders;
mod rows;
mod sections;
mod variables;

use crate::commands::EditorCommand;
use crate::error::CommandError;
use crate::events::EventBroker;
use crate::model::EditorModel;

#[cfg(debug_assertions)]
use crate::events::ModelEvent;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use calls::update_call;
pub use holders::update_holder;
pub use rows::update_row;
pub use sections::update_section;
pub use variables::update_variable;

/// Result of executing one command: the commands that undo it
pub type UndoCommands = Result<Vec<EditorCommand>, CommandError>;

/// Execute `command` against `model`, sending change events to `broker`
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// suite invariants afterwards. In release builds, it's a direct dispatch.
#[inline]
pub fn update(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    command: EditorCommand,
) -> UndoCommands {
    #[cfg(debug_assertions)]
    {
        update_traced(model, broker, command)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, broker, command)
    }
}

/// Execute each command in order, collecting their undo commands
///
/// The returned list undoes the whole batch when executed front to back.
/// When a command fails, the ones already executed are undone before the
/// error is returned, so the batch applies entirely or not at all. Events
/// sent by the executed part and by its rollback still reach `broker`.
pub fn update_all(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    commands: Vec<EditorCommand>,
) -> UndoCommands {
    let mut undo = Vec::new();
    for command in commands {
        match update(model, broker, command) {
            Ok(mut inverse) => {
                inverse.extend(undo);
                undo = inverse;
            }
            Err(e) => {
                roll_back(model, broker, undo);
                return Err(e);
            }
        }
    }
    Ok(undo)
}

fn roll_back(model: &mut EditorModel, broker: &mut dyn EventBroker, undo: Vec<EditorCommand>) {
    for command in undo {
        let name = command.name();
        if let Err(e) = update(model, broker, command) {
            tracing::error!("Rolling back {} failed: {}", name, e);
        }
    }
}

fn update_inner(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    command: EditorCommand,
) -> UndoCommands {
    match command {
        EditorCommand::Section(cmd) => sections::update_section(model, broker, cmd),
        EditorCommand::Holder(cmd) => holders::update_holder(model, broker, cmd),
        EditorCommand::Call(cmd) => calls::update_call(model, broker, cmd),
        EditorCommand::Row(cmd) => rows::update_row(model, broker, cmd),
        EditorCommand::Variable(cmd) => variables::update_variable(model, broker, cmd),
    }
}

/// Counts events on their way to the real broker
#[cfg(debug_assertions)]
struct CountingBroker<'a> {
    inner: &'a mut dyn EventBroker,
    sent: usize,
}

#[cfg(debug_assertions)]
impl EventBroker for CountingBroker<'_> {
    fn send(&mut self, event: ModelEvent) {
        self.sent += 1;
        self.inner.send(event);
    }
}

#[cfg(debug_assertions)]
fn update_traced(
    model: &mut EditorModel,
    broker: &mut dyn EventBroker,
    command: EditorCommand,
) -> UndoCommands {
    let name = command.name();
    let _span = span!(Level::DEBUG, "update", command = %name).entered();
    debug!(target: "command", command = %name, "executing");

    let mut counting = CountingBroker {
        inner: broker,
        sent: 0,
    };
    let result = update_inner(model, &mut counting, command);

    match &result {
        Ok(undo) => debug!(
            target: "command",
            command = %name,
            events = counting.sent,
            undo = undo.len(),
            "executed"
        ),
        Err(e) => {
            debug!(target: "command", command = %name, error = %e, "rejected");
            debug_assert_eq!(counting.sent, 0, "{} sent events before failing", name);
        }
    }

    model.suite.assert_invariants();
    result
}
