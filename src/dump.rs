//! Structural snapshot of a suite
//!
//! Serializes the tree without ids, so two dumps compare equal exactly when the
//! documents have the same sections, holders, rows, and variables in the same
//! order. Used by the `dump` command and by undo/redo assertions.

use serde::Serialize;

use crate::model::SuiteFile;
use crate::rules::{ModelType, SectionKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteDump {
    pub sections: Vec<SectionDump>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionDump {
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holders: Vec<HolderDump>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableDump>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderDump {
    pub name: String,
    pub rows: Vec<RowDump>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDump {
    pub model_type: ModelType,
    pub declaration: String,
    pub arguments: Vec<String>,
    pub comment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDump {
    pub name: String,
    pub value: Vec<String>,
    pub comment: Vec<String>,
}

impl SuiteDump {
    pub fn from_suite(suite: &SuiteFile) -> Self {
        let sections = suite
            .sections()
            .map(|section| SectionDump {
                kind: section.kind(),
                holders: suite
                    .holders_of(section.id())
                    .map(|holder| HolderDump {
                        name: holder.name().to_string(),
                        rows: suite
                            .rows_of(holder.id())
                            .map(|row| RowDump {
                                model_type: row.token().model_type(),
                                declaration: row.token().declaration().to_string(),
                                arguments: row.arguments().to_vec(),
                                comment: row.token().comment_tokens().to_vec(),
                            })
                            .collect(),
                    })
                    .collect(),
                variables: suite
                    .variables_of(section.id())
                    .map(|variable| VariableDump {
                        name: variable.declaration().to_string(),
                        value: variable.value().to_vec(),
                        comment: variable.comment_tokens().to_vec(),
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Holder dump by section kind and name, for assertions
    pub fn holder(&self, kind: SectionKind, name: &str) -> Option<&HolderDump> {
        self.sections
            .iter()
            .find(|s| s.kind == kind)?
            .holders
            .iter()
            .find(|h| h.name == name)
    }
}
