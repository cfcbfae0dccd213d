//! Suite file view tree
//!
//! Sections, holders, rows, and variables live in id-keyed arenas. Ordering is
//! kept only in the parent's child list, and every child carries a
//! back-reference to its parent. All structural changes go through the
//! primitives below so that both sides are updated together.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::token_row::TokenRow;
use crate::error::CommandError;
use crate::rules::{HolderKind, RowKind, SectionKind};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(pub u64);

/// Unique identifier for a test case, task, or keyword definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HolderId(pub u64);

/// Unique identifier for a row inside a holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

/// Unique identifier for a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(pub u64);

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    kind: SectionKind,
    holders: Vec<HolderId>,
    variables: Vec<VariableId>,
}

impl Section {
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn holders(&self) -> &[HolderId] {
        &self.holders
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }
}

/// A test case, task, or keyword definition
#[derive(Debug, Clone)]
pub struct Holder {
    id: HolderId,
    kind: HolderKind,
    name: String,
    section: SectionId,
    rows: Vec<RowId>,
}

impl Holder {
    pub fn id(&self) -> HolderId {
        self.id
    }

    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }
}

/// One line of a holder body, owning exactly one token row
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    holder: HolderId,
    token: TokenRow,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn holder(&self) -> HolderId {
        self.holder
    }

    pub fn token(&self) -> &TokenRow {
        &self.token
    }

    pub fn kind(&self) -> RowKind {
        self.token.kind()
    }

    pub fn name(&self) -> &str {
        self.token.name()
    }

    pub fn arguments(&self) -> &[String] {
        self.token.arguments()
    }

    pub fn comment(&self) -> String {
        self.token.comment()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableType {
    Scalar,
    ScalarAsList,
    List,
    Dictionary,
    Invalid,
}

#[derive(Debug, Clone)]
pub struct Variable {
    id: VariableId,
    section: SectionId,
    name: String,
    value: Vec<String>,
    comment: Vec<String>,
}

impl Variable {
    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    /// Declared name including sigil and braces, e.g. `${x}`
    pub fn declaration(&self) -> &str {
        &self.name
    }

    /// Name without sigil and braces for valid variables
    pub fn name(&self) -> &str {
        match self.variable_type() {
            VariableType::Invalid => &self.name,
            _ => &self.name[2..self.name.len() - 1],
        }
    }

    pub fn value(&self) -> &[String] {
        &self.value
    }

    pub fn comment_tokens(&self) -> &[String] {
        &self.comment
    }

    pub fn comment(&self) -> String {
        self.comment.join(super::token_row::COMMENT_SEPARATOR)
    }

    pub fn variable_type(&self) -> VariableType {
        variable_type(&self.name, self.value.len())
    }
}

/// Type implied by a variable declaration and its number of values
pub fn variable_type(declaration: &str, values: usize) -> VariableType {
    let well_formed = declaration.len() >= 3
        && declaration.as_bytes()[1] == b'{'
        && declaration.ends_with('}');
    if !well_formed {
        return VariableType::Invalid;
    }
    match declaration.as_bytes()[0] {
        b'$' if values > 1 => VariableType::ScalarAsList,
        b'$' => VariableType::Scalar,
        b'@' => VariableType::List,
        b'&' => VariableType::Dictionary,
        _ => VariableType::Invalid,
    }
}

// ============================================================================
// Detached nodes
// ============================================================================

/// A row outside of any holder
///
/// `id` is kept when the row was removed from a suite so that restoring it
/// brings back the same node; fresh rows have no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedRow {
    pub id: Option<RowId>,
    pub token: TokenRow,
}

impl From<TokenRow> for DetachedRow {
    fn from(token: TokenRow) -> Self {
        Self { id: None, token }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetachedHolder {
    pub id: Option<HolderId>,
    pub name: String,
    pub rows: Vec<DetachedRow>,
}

impl DetachedHolder {
    pub fn new(name: &str, rows: Vec<TokenRow>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            rows: rows.into_iter().map(DetachedRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetachedVariable {
    pub id: Option<VariableId>,
    pub name: String,
    pub value: Vec<String>,
    pub comment: Vec<String>,
}

impl DetachedVariable {
    pub fn new(name: &str, value: &[&str]) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            value: value.iter().map(|v| v.to_string()).collect(),
            comment: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetachedSection {
    pub id: Option<SectionId>,
    pub kind: SectionKind,
    pub holders: Vec<DetachedHolder>,
    pub variables: Vec<DetachedVariable>,
}

// ============================================================================
// Suite file
// ============================================================================

/// In-memory mirror of one suite document
#[derive(Debug, Clone, Default)]
pub struct SuiteFile {
    sections: HashMap<SectionId, Section>,
    section_order: Vec<SectionId>,
    holders: HashMap<HolderId, Holder>,
    rows: HashMap<RowId, Row>,
    variables: HashMap<VariableId, Variable>,
    next_id: u64,
}

impl SuiteFile {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    pub fn holder(&self, id: HolderId) -> Option<&Holder> {
        self.holders.get(&id)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(&id)
    }

    pub fn variable(&self, id: VariableId) -> Option<&Variable> {
        self.variables.get(&id)
    }

    /// Sections in document order
    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.section_order.iter().filter_map(|id| self.sections.get(id))
    }

    pub fn find_section(&self, kind: SectionKind) -> Option<SectionId> {
        self.sections().find(|s| s.kind == kind).map(|s| s.id)
    }

    pub fn holders_of(&self, section: SectionId) -> impl Iterator<Item = &Holder> + '_ {
        self.sections
            .get(&section)
            .into_iter()
            .flat_map(|s| s.holders.iter())
            .filter_map(|id| self.holders.get(id))
    }

    pub fn holder_names(&self, section: SectionId) -> impl Iterator<Item = &str> + '_ {
        self.holders_of(section).map(|h| h.name.as_str())
    }

    pub fn rows_of(&self, holder: HolderId) -> impl Iterator<Item = &Row> + '_ {
        self.holders
            .get(&holder)
            .into_iter()
            .flat_map(|h| h.rows.iter())
            .filter_map(|id| self.rows.get(id))
    }

    pub fn variables_of(&self, section: SectionId) -> impl Iterator<Item = &Variable> + '_ {
        self.sections
            .get(&section)
            .into_iter()
            .flat_map(|s| s.variables.iter())
            .filter_map(|id| self.variables.get(id))
    }

    pub fn section_index(&self, id: SectionId) -> Option<usize> {
        self.section_order.iter().position(|s| *s == id)
    }

    pub fn holder_index(&self, id: HolderId) -> Option<usize> {
        let holder = self.holders.get(&id)?;
        self.sections.get(&holder.section)?.holders.iter().position(|h| *h == id)
    }

    pub fn row_index(&self, id: RowId) -> Option<usize> {
        let row = self.rows.get(&id)?;
        self.holders.get(&row.holder)?.rows.iter().position(|r| *r == id)
    }

    pub fn variable_index(&self, id: VariableId) -> Option<usize> {
        let variable = self.variables.get(&id)?;
        self.sections.get(&variable.section)?.variables.iter().position(|v| *v == id)
    }

    /// Holder kind of a section, failing for Settings and Variables
    pub fn holder_kind_of(&self, section: SectionId) -> Result<HolderKind, CommandError> {
        let section = self
            .sections
            .get(&section)
            .ok_or(CommandError::UnknownSection(section))?;
        section
            .kind
            .holder_kind()
            .ok_or(CommandError::NotAHolderSection(section.kind))
    }

    // ------------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------------

    /// Section of `kind`, appended if the suite has none yet
    ///
    /// Returns the id and whether the section was created.
    pub fn ensure_section(&mut self, kind: SectionKind) -> (SectionId, bool) {
        if let Some(id) = self.find_section(kind) {
            return (id, false);
        }
        let id = self.insert_section(
            None,
            DetachedSection {
                id: None,
                kind,
                holders: Vec::new(),
                variables: Vec::new(),
            },
        );
        (id, true)
    }

    /// Insert a detached section with all its content
    ///
    /// The caller guarantees no section of the same kind exists.
    pub fn insert_section(&mut self, index: Option<usize>, detached: DetachedSection) -> SectionId {
        let id = match detached.id {
            Some(id) if !self.sections.contains_key(&id) => id,
            _ => SectionId(self.next_id()),
        };
        self.sections.insert(
            id,
            Section {
                id,
                kind: detached.kind,
                holders: Vec::new(),
                variables: Vec::new(),
            },
        );
        let index = index.unwrap_or(self.section_order.len()).min(self.section_order.len());
        self.section_order.insert(index, id);

        if let Some(holder_kind) = detached.kind.holder_kind() {
            for holder in detached.holders {
                self.attach_holder(id, holder_kind, None, holder);
            }
        }
        for variable in detached.variables {
            self.attach_variable(id, None, variable);
        }
        id
    }

    pub fn remove_section(&mut self, id: SectionId) -> Option<(usize, DetachedSection)> {
        let index = self.section_index(id)?;
        let section = self.sections.remove(&id)?;
        self.section_order.remove(index);

        let holders = section
            .holders
            .iter()
            .filter_map(|h| self.detach_holder_node(*h))
            .collect();
        let variables = section
            .variables
            .iter()
            .filter_map(|v| self.detach_variable_node(*v))
            .collect();
        Some((
            index,
            DetachedSection {
                id: Some(id),
                kind: section.kind,
                holders,
                variables,
            },
        ))
    }

    // ------------------------------------------------------------------------
    // Holders
    // ------------------------------------------------------------------------

    /// Insert a holder at `index` (append for `None`), retyping its rows
    pub fn insert_holder(
        &mut self,
        section: SectionId,
        index: Option<usize>,
        holder: DetachedHolder,
    ) -> Result<HolderId, CommandError> {
        let kind = self.holder_kind_of(section)?;
        let len = self.sections.get(&section).map_or(0, |s| s.holders.len());
        check_index(index, len)?;
        Ok(self.attach_holder(section, kind, index, holder))
    }

    fn attach_holder(
        &mut self,
        section: SectionId,
        kind: HolderKind,
        index: Option<usize>,
        detached: DetachedHolder,
    ) -> HolderId {
        let id = match detached.id {
            Some(id) if !self.holders.contains_key(&id) => id,
            _ => HolderId(self.next_id()),
        };
        self.holders.insert(
            id,
            Holder {
                id,
                kind,
                name: detached.name,
                section,
                rows: Vec::new(),
            },
        );
        for row in detached.rows {
            self.attach_row(id, kind, None, row);
        }
        if let Some(parent) = self.sections.get_mut(&section) {
            let index = index.unwrap_or(parent.holders.len()).min(parent.holders.len());
            parent.holders.insert(index, id);
        }
        id
    }

    /// Detach a holder and its rows, returning its former index
    pub fn remove_holder(&mut self, id: HolderId) -> Option<(usize, DetachedHolder)> {
        let index = self.holder_index(id)?;
        let section = self.holders.get(&id)?.section;
        if let Some(parent) = self.sections.get_mut(&section) {
            parent.holders.remove(index);
        }
        self.detach_holder_node(id).map(|holder| (index, holder))
    }

    fn detach_holder_node(&mut self, id: HolderId) -> Option<DetachedHolder> {
        let holder = self.holders.remove(&id)?;
        let rows = holder
            .rows
            .iter()
            .filter_map(|r| self.rows.remove(r))
            .map(|row| DetachedRow {
                id: Some(row.id),
                token: row.token,
            })
            .collect();
        Some(DetachedHolder {
            id: Some(id),
            name: holder.name,
            rows,
        })
    }

    /// Copy of a holder suitable for inserting elsewhere
    pub fn snapshot_holder(&self, id: HolderId) -> Option<DetachedHolder> {
        let holder = self.holders.get(&id)?;
        Some(DetachedHolder {
            id: None,
            name: holder.name.clone(),
            rows: self
                .rows_of(id)
                .map(|row| DetachedRow::from(row.token.clone()))
                .collect(),
        })
    }

    /// Rename a holder, returning the previous name
    pub fn set_holder_name(&mut self, id: HolderId, name: &str) -> Result<String, CommandError> {
        let holder = self
            .holders
            .get_mut(&id)
            .ok_or(CommandError::UnknownHolder(id))?;
        Ok(std::mem::replace(&mut holder.name, name.to_string()))
    }

    pub fn swap_holders(&mut self, section: SectionId, a: usize, b: usize) {
        if let Some(section) = self.sections.get_mut(&section) {
            section.holders.swap(a, b);
        }
    }

    // ------------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------------

    /// Insert a row at `index` (append for `None`), retyped for the holder
    pub fn insert_row(
        &mut self,
        holder: HolderId,
        index: Option<usize>,
        row: DetachedRow,
    ) -> Result<RowId, CommandError> {
        let parent = self
            .holders
            .get(&holder)
            .ok_or(CommandError::UnknownHolder(holder))?;
        check_index(index, parent.rows.len())?;
        let kind = parent.kind;
        Ok(self.attach_row(holder, kind, index, row))
    }

    fn attach_row(
        &mut self,
        holder: HolderId,
        kind: HolderKind,
        index: Option<usize>,
        detached: DetachedRow,
    ) -> RowId {
        let id = match detached.id {
            Some(id) if !self.rows.contains_key(&id) => id,
            _ => RowId(self.next_id()),
        };
        let token = if detached.token.holder_kind() == kind {
            detached.token
        } else {
            detached.token.retyped_for(kind)
        };
        self.rows.insert(id, Row { id, holder, token });
        if let Some(parent) = self.holders.get_mut(&holder) {
            let index = index.unwrap_or(parent.rows.len()).min(parent.rows.len());
            parent.rows.insert(index, id);
        }
        id
    }

    /// Detach a row, returning its former index
    pub fn remove_row(&mut self, id: RowId) -> Option<(usize, DetachedRow)> {
        let index = self.row_index(id)?;
        let row = self.rows.remove(&id)?;
        if let Some(parent) = self.holders.get_mut(&row.holder) {
            parent.rows.remove(index);
        }
        Some((
            index,
            DetachedRow {
                id: Some(id),
                token: row.token,
            },
        ))
    }

    /// Swap a row for a new node at the same index
    ///
    /// The old row and its token row are detached together and handed back.
    pub fn replace_row(
        &mut self,
        id: RowId,
        replacement: DetachedRow,
    ) -> Result<(RowId, DetachedRow), CommandError> {
        let holder = self.rows.get(&id).ok_or(CommandError::UnknownRow(id))?.holder;
        let kind = self
            .holders
            .get(&holder)
            .ok_or(CommandError::UnknownHolder(holder))?
            .kind;
        let (index, old) = self.remove_row(id).ok_or(CommandError::UnknownRow(id))?;
        let new_id = self.attach_row(holder, kind, Some(index), replacement);
        Ok((new_id, old))
    }

    /// Overwrite a row's token in place, returning the previous one
    pub fn set_row_token(&mut self, id: RowId, token: TokenRow) -> Result<TokenRow, CommandError> {
        let row = self.rows.get_mut(&id).ok_or(CommandError::UnknownRow(id))?;
        Ok(std::mem::replace(&mut row.token, token))
    }

    pub fn swap_rows(&mut self, holder: HolderId, a: usize, b: usize) {
        if let Some(holder) = self.holders.get_mut(&holder) {
            holder.rows.swap(a, b);
        }
    }

    // ------------------------------------------------------------------------
    // Variables
    // ------------------------------------------------------------------------

    pub fn insert_variable(
        &mut self,
        section: SectionId,
        index: Option<usize>,
        variable: DetachedVariable,
    ) -> Result<VariableId, CommandError> {
        let parent = self
            .sections
            .get(&section)
            .ok_or(CommandError::UnknownSection(section))?;
        if parent.kind != SectionKind::Variables {
            return Err(CommandError::NotAVariableSection(parent.kind));
        }
        check_index(index, parent.variables.len())?;
        Ok(self.attach_variable(section, index, variable))
    }

    fn attach_variable(
        &mut self,
        section: SectionId,
        index: Option<usize>,
        detached: DetachedVariable,
    ) -> VariableId {
        let id = match detached.id {
            Some(id) if !self.variables.contains_key(&id) => id,
            _ => VariableId(self.next_id()),
        };
        self.variables.insert(
            id,
            Variable {
                id,
                section,
                name: detached.name,
                value: detached.value,
                comment: detached.comment,
            },
        );
        if let Some(parent) = self.sections.get_mut(&section) {
            let index = index.unwrap_or(parent.variables.len()).min(parent.variables.len());
            parent.variables.insert(index, id);
        }
        id
    }

    fn detach_variable_node(&mut self, id: VariableId) -> Option<DetachedVariable> {
        let variable = self.variables.remove(&id)?;
        Some(DetachedVariable {
            id: Some(id),
            name: variable.name,
            value: variable.value,
            comment: variable.comment,
        })
    }

    /// Rename a variable, returning the previous declaration
    pub fn set_variable_name(
        &mut self,
        id: VariableId,
        name: &str,
    ) -> Result<String, CommandError> {
        let variable = self
            .variables
            .get_mut(&id)
            .ok_or(CommandError::UnknownVariable(id))?;
        Ok(std::mem::replace(&mut variable.name, name.to_string()))
    }

    pub fn swap_variables(&mut self, section: SectionId, a: usize, b: usize) {
        if let Some(section) = self.sections.get_mut(&section) {
            section.variables.swap(a, b);
        }
    }

    // ------------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------------

    /// Validate parent links and declaration types across the whole tree
    ///
    /// This function checks that:
    /// - every section in the order list exists, and section kinds are unique
    /// - every child listed by a parent exists and points back to that parent
    /// - every row's declaration type belongs to its holder's kind
    /// - no node is listed twice and no node is orphaned
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        use std::collections::HashSet;

        let mut kinds = HashSet::new();
        let mut seen_holders = HashSet::new();
        let mut seen_rows = HashSet::new();
        let mut seen_variables = HashSet::new();

        assert_eq!(
            self.section_order.len(),
            self.sections.len(),
            "section order lists {} sections but {} exist",
            self.section_order.len(),
            self.sections.len()
        );

        for section_id in &self.section_order {
            let section = self
                .sections
                .get(section_id)
                .unwrap_or_else(|| panic!("section {:?} is listed but missing", section_id));
            assert!(
                kinds.insert(section.kind),
                "suite has two {:?} sections",
                section.kind
            );

            for holder_id in &section.holders {
                assert!(seen_holders.insert(*holder_id), "{:?} listed twice", holder_id);
                let holder = self
                    .holders
                    .get(holder_id)
                    .unwrap_or_else(|| panic!("holder {:?} is listed but missing", holder_id));
                assert_eq!(
                    holder.section, *section_id,
                    "holder {:?} points to the wrong section",
                    holder_id
                );
                assert_eq!(
                    section.kind.holder_kind(),
                    Some(holder.kind),
                    "holder {:?} has the wrong kind for its section",
                    holder_id
                );

                for row_id in &holder.rows {
                    assert!(seen_rows.insert(*row_id), "{:?} listed twice", row_id);
                    let row = self
                        .rows
                        .get(row_id)
                        .unwrap_or_else(|| panic!("row {:?} is listed but missing", row_id));
                    assert_eq!(row.holder, *holder_id, "row {:?} points to the wrong holder", row_id);
                    assert_eq!(
                        row.token.holder_kind(),
                        holder.kind,
                        "row {:?} has declaration type {:?} inside a {:?}",
                        row_id,
                        row.token.model_type(),
                        holder.kind
                    );
                }
            }

            for variable_id in &section.variables {
                assert!(seen_variables.insert(*variable_id), "{:?} listed twice", variable_id);
                let variable = self
                    .variables
                    .get(variable_id)
                    .unwrap_or_else(|| panic!("variable {:?} is listed but missing", variable_id));
                assert_eq!(variable.section, *section_id);
            }
        }

        assert_eq!(seen_holders.len(), self.holders.len(), "orphaned holders");
        assert_eq!(seen_rows.len(), self.rows.len(), "orphaned rows");
        assert_eq!(seen_variables.len(), self.variables.len(), "orphaned variables");
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

fn check_index(index: Option<usize>, len: usize) -> Result<(), CommandError> {
    match index {
        Some(index) if index > len => Err(CommandError::IndexOutOfRange { index, len }),
        _ => Ok(()),
    }
}
