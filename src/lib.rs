//! rfedit - undoable editing core for tabular Robot Framework suites
//!
//! The suite tree lives in [`model`]; every mutation is an [`EditorCommand`]
//! executed through [`update::update`], which sends [`events`] to a broker and
//! returns the commands that undo it.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dump;
pub mod error;
pub mod events;
pub mod history;
pub mod model;
pub mod names;
pub mod rules;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::EditorCommand;
pub use config::EngineConfig;
pub use error::CommandError;
pub use events::{EventBroker, ModelEvent, ModelEventKind, NodeRef};
pub use history::CommandHistory;
pub use model::{EditorModel, SuiteFile};
