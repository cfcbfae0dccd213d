//! Line-based suite reader for fixtures
//!
//! Understands just enough of the tabular format to build models in tests,
//! benches and the `dump` command: section headers, holder names in the first
//! column, indented rows, comments, and variables. Cells are separated by a tab
//! or by two or more spaces. Blank lines become empty rows only when another
//! row of the same holder follows them.

use super::suite::{DetachedHolder, DetachedVariable, HolderId, SectionId, SuiteFile};
use super::token_row::TokenRow;
use crate::rules::{HolderKind, SectionKind};

#[derive(Debug, Default)]
pub struct SuiteFileBuilder {
    lines: Vec<String>,
}

impl SuiteFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append every line of `text`
    pub fn append_text(mut self, text: &str) -> Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    pub fn build(self) -> SuiteFile {
        let mut suite = SuiteFile::new();
        let mut section: Option<(SectionId, SectionKind)> = None;
        let mut holder: Option<(HolderId, HolderKind)> = None;
        let mut pending_empty = 0usize;

        for line in &self.lines {
            let line = line.trim_end();
            if line.starts_with('*') {
                holder = None;
                pending_empty = 0;
                section = SectionKind::from_header(line).map(|kind| (suite.ensure_section(kind).0, kind));
                if section.is_none() {
                    tracing::debug!("Skipping unrecognized section header {:?}", line);
                }
                continue;
            }
            let Some((section_id, section_kind)) = section else {
                continue;
            };

            match section_kind.holder_kind() {
                Some(holder_kind) => {
                    let indented = line.starts_with(' ') || line.starts_with('\t');
                    let cells = split_cells(line);
                    if !indented && !cells.is_empty() {
                        pending_empty = 0;
                        let name = cells[0].clone();
                        let id = suite
                            .insert_holder(section_id, None, DetachedHolder::new(&name, vec![]))
                            .ok();
                        holder = id.map(|id| (id, holder_kind));
                        if cells.len() > 1 {
                            push_row(&mut suite, holder, TokenRow::from_cells(holder_kind, &cells[1..]));
                        }
                    } else if cells.is_empty() {
                        pending_empty += 1;
                    } else {
                        for _ in 0..std::mem::take(&mut pending_empty) {
                            push_row(&mut suite, holder, TokenRow::empty(holder_kind));
                        }
                        push_row(&mut suite, holder, TokenRow::from_cells(holder_kind, &cells));
                    }
                }
                None if section_kind == SectionKind::Variables => {
                    let cells = split_cells(line);
                    if let Some(variable) = variable_from_cells(&cells) {
                        // Only fails for non-variable sections
                        let _ = suite.insert_variable(section_id, None, variable);
                    }
                }
                None => {}
            }
        }

        suite.assert_invariants();
        suite
    }
}

fn push_row(suite: &mut SuiteFile, holder: Option<(HolderId, HolderKind)>, row: TokenRow) {
    if let Some((holder, _)) = holder {
        if let Err(e) = suite.insert_row(holder, None, row.into()) {
            tracing::warn!("Could not add fixture row: {}", e);
        }
    }
}

fn variable_from_cells(cells: &[String]) -> Option<DetachedVariable> {
    let name = cells.first().filter(|c| !c.starts_with('#'))?;
    let comment_at = cells
        .iter()
        .position(|c| c.starts_with('#'))
        .unwrap_or(cells.len());
    Some(DetachedVariable {
        id: None,
        name: name.clone(),
        value: cells[1..comment_at].to_vec(),
        comment: cells[comment_at..].to_vec(),
    })
}

/// Split a line into cells on tabs and runs of two or more spaces
///
/// Leading indentation is not a cell.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.trim().chars().peekable();

    while let Some(c) = chars.next() {
        let separator = c == '\t' || (c == ' ' && matches!(chars.peek(), Some(' ') | Some('\t')));
        if separator {
            while matches!(chars.peek(), Some(' ') | Some('\t')) {
                chars.next();
            }
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        cells.push(current);
    }
    cells
}
