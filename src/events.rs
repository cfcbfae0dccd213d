//! Change notifications produced by commands
//!
//! Each successful mutation sends one event per distinct kind. `data` is the
//! affected parent (or the node itself for in-place edits); `additional` lists
//! affected children where a command adds or replaces nodes.

use serde::Serialize;

use crate::model::{HolderId, RowId, SectionId, VariableId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelEventKind {
    ElementAdded,
    ElementRemoved,
    ElementMoved,
    ElementNameChanged,
    KeywordCallAdded,
    KeywordCallRemoved,
    KeywordCallMoved,
    KeywordCallConverted,
    KeywordCallNameChange,
    KeywordCallArgumentChange,
    KeywordCallCommentChange,
    KeywordCallCellChange,
    SuiteSectionAdded,
    SuiteSectionRemoved,
    VariableMoved,
    VariableNameChange,
    VariableTypeChange,
}

impl ModelEventKind {
    /// Topic name on the event bus
    pub fn topic(self) -> &'static str {
        match self {
            ModelEventKind::ElementAdded => "ELEMENT_ADDED",
            ModelEventKind::ElementRemoved => "ELEMENT_REMOVED",
            ModelEventKind::ElementMoved => "ELEMENT_MOVED",
            ModelEventKind::ElementNameChanged => "ELEMENT_NAME_CHANGED",
            ModelEventKind::KeywordCallAdded => "KEYWORD_CALL_ADDED",
            ModelEventKind::KeywordCallRemoved => "KEYWORD_CALL_REMOVED",
            ModelEventKind::KeywordCallMoved => "KEYWORD_CALL_MOVED",
            ModelEventKind::KeywordCallConverted => "KEYWORD_CALL_CONVERTED",
            ModelEventKind::KeywordCallNameChange => "KEYWORD_CALL_NAME_CHANGE",
            ModelEventKind::KeywordCallArgumentChange => "KEYWORD_CALL_ARGUMENT_CHANGE",
            ModelEventKind::KeywordCallCommentChange => "KEYWORD_CALL_COMMENT_CHANGE",
            ModelEventKind::KeywordCallCellChange => "KEYWORD_CALL_CELL_CHANGE",
            ModelEventKind::SuiteSectionAdded => "ROBOT_SUITE_SECTION_ADDED",
            ModelEventKind::SuiteSectionRemoved => "ROBOT_SUITE_SECTION_REMOVED",
            ModelEventKind::VariableMoved => "ROBOT_VARIABLE_MOVED",
            ModelEventKind::VariableNameChange => "ROBOT_VARIABLE_NAME_CHANGE",
            ModelEventKind::VariableTypeChange => "ROBOT_VARIABLE_TYPE_CHANGE",
        }
    }
}

/// Reference to a node of the suite tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeRef {
    Suite,
    Section(SectionId),
    Holder(HolderId),
    Row(RowId),
    Variable(VariableId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEvent {
    pub kind: ModelEventKind,
    pub data: NodeRef,
    pub additional: Vec<NodeRef>,
}

impl ModelEvent {
    pub fn new(kind: ModelEventKind, data: NodeRef) -> Self {
        Self {
            kind,
            data,
            additional: Vec::new(),
        }
    }

    pub fn with_children(kind: ModelEventKind, data: NodeRef, additional: Vec<NodeRef>) -> Self {
        Self {
            kind,
            data,
            additional,
        }
    }
}

/// Receiver of change notifications
pub trait EventBroker {
    fn send(&mut self, event: ModelEvent);
}

/// Discards every event
#[derive(Debug, Default)]
pub struct NullBroker;

impl EventBroker for NullBroker {
    fn send(&mut self, _event: ModelEvent) {}
}

/// Logs every event at trace level
#[derive(Debug, Default)]
pub struct TracingBroker;

impl EventBroker for TracingBroker {
    fn send(&mut self, event: ModelEvent) {
        tracing::trace!(
            topic = event.kind.topic(),
            data = ?event.data,
            children = event.additional.len(),
            "model event"
        );
    }
}

/// Keeps every event in order for later inspection
#[derive(Debug, Default)]
pub struct RecordingBroker {
    pub events: Vec<ModelEvent>,
}

impl RecordingBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: ModelEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Number of events of `kind` sent for `data`
    pub fn count_for(&self, kind: ModelEventKind, data: NodeRef) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == kind && e.data == data)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn take(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventBroker for RecordingBroker {
    fn send(&mut self, event: ModelEvent) {
        self.events.push(event);
    }
}
