//! Editor commands
//!
//! Every mutation of the suite is expressed as an [`EditorCommand`]. Executing
//! one through [`crate::update::update`] returns the commands that undo it;
//! executing those returns commands that redo it.

use crate::model::{
    DetachedHolder, DetachedRow, DetachedSection, HolderId, RowId, SectionId, TokenRow,
    VariableId,
};

/// Direction for vertical moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// How a row rewrite is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStyle {
    /// Name, argument, and comment changes; a type change swaps the row
    Fields,
    /// A single cell-change event, row edited in place; a type change
    /// swaps the row and announces a conversion instead
    Cells,
    /// Always swap the row and announce a conversion
    Converted,
}

/// Holders removed from one section, with their former indices (ascending)
#[derive(Debug, Clone, PartialEq)]
pub struct HolderGroup {
    pub section: SectionId,
    pub items: Vec<(usize, DetachedHolder)>,
}

/// Rows removed from one holder, with their former indices (ascending)
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    pub holder: HolderId,
    pub items: Vec<(usize, DetachedRow)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionCmd {
    /// Add a section by header name; no-op when one of that kind exists
    Create { name: String },
    Delete { section: SectionId },
    Restore { index: usize, section: DetachedSection },
}

#[derive(Debug, Clone, PartialEq)]
pub enum HolderCmd {
    CreateFresh {
        section: SectionId,
        index: Option<usize>,
    },
    Insert {
        section: SectionId,
        index: Option<usize>,
        holders: Vec<DetachedHolder>,
    },
    Delete {
        holders: Vec<HolderId>,
    },
    Restore {
        groups: Vec<HolderGroup>,
    },
    Move {
        holder: HolderId,
        direction: Direction,
    },
    SetName {
        holder: HolderId,
        name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallCmd {
    CreateFresh {
        holder: HolderId,
        index: Option<usize>,
    },
    Insert {
        holder: HolderId,
        index: Option<usize>,
        rows: Vec<TokenRow>,
    },
    Delete {
        rows: Vec<RowId>,
    },
    Restore {
        groups: Vec<RowGroup>,
    },
    Move {
        row: RowId,
        direction: Direction,
    },
    /// Put `replacement` in place of `row`, re-parented into the same holder
    Replace {
        row: RowId,
        replacement: DetachedRow,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowCmd {
    SetName {
        row: RowId,
        name: Option<String>,
    },
    SetArgument {
        row: RowId,
        index: usize,
        value: Option<String>,
    },
    SetComment {
        row: RowId,
        comment: Option<String>,
    },
    InsertCell {
        row: RowId,
        index: usize,
        value: String,
    },
    DeleteCell {
        row: RowId,
        index: usize,
    },
    ConvertCallToComment {
        row: RowId,
    },
    ConvertSettingToComment {
        row: RowId,
    },
    ConvertEmptyToCall {
        row: RowId,
        name: String,
    },
    ConvertEmptyToSetting {
        row: RowId,
        declaration: String,
    },
    ConvertSettingToSetting {
        row: RowId,
        declaration: String,
    },
    ConvertSettingToCall {
        row: RowId,
        name: String,
    },
    /// Write `token` into `row`; produced as the undo of row edits
    ///
    /// When the row gets swapped, the new node takes `reuse_id` if it is free.
    Rewrite {
        row: RowId,
        token: TokenRow,
        reuse_id: Option<RowId>,
        style: ChangeStyle,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariableCmd {
    Move {
        variable: VariableId,
        direction: Direction,
    },
    SetName {
        variable: VariableId,
        name: String,
    },
}

/// Any mutation of the suite tree
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Section(SectionCmd),
    Holder(HolderCmd),
    Call(CallCmd),
    Row(RowCmd),
    Variable(VariableCmd),
}

impl EditorCommand {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::Section(cmd) => match cmd {
                SectionCmd::Create { .. } => "CreateSection",
                SectionCmd::Delete { .. } => "DeleteSection",
                SectionCmd::Restore { .. } => "RestoreSection",
            },
            EditorCommand::Holder(cmd) => match cmd {
                HolderCmd::CreateFresh { .. } => "CreateFreshHolder",
                HolderCmd::Insert { .. } => "InsertHolders",
                HolderCmd::Delete { .. } => "DeleteHolders",
                HolderCmd::Restore { .. } => "RestoreHolders",
                HolderCmd::Move { .. } => "MoveCodeHolder",
                HolderCmd::SetName { .. } => "SetCodeHolderName",
            },
            EditorCommand::Call(cmd) => match cmd {
                CallCmd::CreateFresh { .. } => "CreateFreshKeywordCall",
                CallCmd::Insert { .. } => "InsertKeywordCalls",
                CallCmd::Delete { .. } => "DeleteKeywordCalls",
                CallCmd::Restore { .. } => "RestoreKeywordCalls",
                CallCmd::Move { .. } => "MoveKeywordCall",
                CallCmd::Replace { .. } => "ReplaceKeywordCall",
            },
            EditorCommand::Row(cmd) => match cmd {
                RowCmd::SetName { .. } => "SetKeywordCallName",
                RowCmd::SetArgument { .. } => "SetKeywordCallArgument",
                RowCmd::SetComment { .. } => "SetKeywordCallComment",
                RowCmd::InsertCell { .. } => "InsertCell",
                RowCmd::DeleteCell { .. } => "DeleteCell",
                RowCmd::ConvertCallToComment { .. } => "ConvertCallToComment",
                RowCmd::ConvertSettingToComment { .. } => "ConvertSettingToComment",
                RowCmd::ConvertEmptyToCall { .. } => "ConvertEmptyToCall",
                RowCmd::ConvertEmptyToSetting { .. } => "ConvertEmptyToSetting",
                RowCmd::ConvertSettingToSetting { .. } => "ConvertSettingToSetting",
                RowCmd::ConvertSettingToCall { .. } => "ConvertSettingToCall",
                RowCmd::Rewrite { .. } => "RewriteRow",
            },
            EditorCommand::Variable(cmd) => match cmd {
                VariableCmd::Move { .. } => "MoveVariable",
                VariableCmd::SetName { .. } => "SetVariableName",
            },
        }
    }

    // === Sections ===

    pub fn create_section(name: &str) -> Self {
        EditorCommand::Section(SectionCmd::Create {
            name: name.to_string(),
        })
    }

    pub fn delete_section(section: SectionId) -> Self {
        EditorCommand::Section(SectionCmd::Delete { section })
    }

    // === Holders ===

    pub fn create_fresh_holder(section: SectionId, index: Option<usize>) -> Self {
        EditorCommand::Holder(HolderCmd::CreateFresh { section, index })
    }

    pub fn insert_holders(
        section: SectionId,
        index: Option<usize>,
        holders: Vec<DetachedHolder>,
    ) -> Self {
        EditorCommand::Holder(HolderCmd::Insert {
            section,
            index,
            holders,
        })
    }

    pub fn delete_holders(holders: Vec<HolderId>) -> Self {
        EditorCommand::Holder(HolderCmd::Delete { holders })
    }

    pub fn move_holder_up(holder: HolderId) -> Self {
        EditorCommand::Holder(HolderCmd::Move {
            holder,
            direction: Direction::Up,
        })
    }

    pub fn move_holder_down(holder: HolderId) -> Self {
        EditorCommand::Holder(HolderCmd::Move {
            holder,
            direction: Direction::Down,
        })
    }

    pub fn set_holder_name(holder: HolderId, name: Option<&str>) -> Self {
        EditorCommand::Holder(HolderCmd::SetName {
            holder,
            name: name.map(str::to_string),
        })
    }

    // === Keyword calls ===

    pub fn create_fresh_call(holder: HolderId, index: Option<usize>) -> Self {
        EditorCommand::Call(CallCmd::CreateFresh { holder, index })
    }

    pub fn insert_calls(holder: HolderId, index: Option<usize>, rows: Vec<TokenRow>) -> Self {
        EditorCommand::Call(CallCmd::Insert {
            holder,
            index,
            rows,
        })
    }

    pub fn delete_calls(rows: Vec<RowId>) -> Self {
        EditorCommand::Call(CallCmd::Delete { rows })
    }

    pub fn move_call_up(row: RowId) -> Self {
        EditorCommand::Call(CallCmd::Move {
            row,
            direction: Direction::Up,
        })
    }

    pub fn move_call_down(row: RowId) -> Self {
        EditorCommand::Call(CallCmd::Move {
            row,
            direction: Direction::Down,
        })
    }

    pub fn replace_call(row: RowId, replacement: TokenRow) -> Self {
        EditorCommand::Call(CallCmd::Replace {
            row,
            replacement: replacement.into(),
        })
    }

    // === Row content ===

    pub fn set_call_name(row: RowId, name: Option<&str>) -> Self {
        EditorCommand::Row(RowCmd::SetName {
            row,
            name: name.map(str::to_string),
        })
    }

    pub fn set_call_argument(row: RowId, index: usize, value: Option<&str>) -> Self {
        EditorCommand::Row(RowCmd::SetArgument {
            row,
            index,
            value: value.map(str::to_string),
        })
    }

    pub fn set_call_comment(row: RowId, comment: Option<&str>) -> Self {
        EditorCommand::Row(RowCmd::SetComment {
            row,
            comment: comment.map(str::to_string),
        })
    }

    pub fn insert_cell(row: RowId, index: usize, value: &str) -> Self {
        EditorCommand::Row(RowCmd::InsertCell {
            row,
            index,
            value: value.to_string(),
        })
    }

    pub fn delete_cell(row: RowId, index: usize) -> Self {
        EditorCommand::Row(RowCmd::DeleteCell { row, index })
    }

    pub fn convert_call_to_comment(row: RowId) -> Self {
        EditorCommand::Row(RowCmd::ConvertCallToComment { row })
    }

    pub fn convert_setting_to_comment(row: RowId) -> Self {
        EditorCommand::Row(RowCmd::ConvertSettingToComment { row })
    }

    pub fn convert_empty_to_call(row: RowId, name: &str) -> Self {
        EditorCommand::Row(RowCmd::ConvertEmptyToCall {
            row,
            name: name.to_string(),
        })
    }

    pub fn convert_empty_to_setting(row: RowId, declaration: &str) -> Self {
        EditorCommand::Row(RowCmd::ConvertEmptyToSetting {
            row,
            declaration: declaration.to_string(),
        })
    }

    pub fn convert_setting_to_setting(row: RowId, declaration: &str) -> Self {
        EditorCommand::Row(RowCmd::ConvertSettingToSetting {
            row,
            declaration: declaration.to_string(),
        })
    }

    pub fn convert_setting_to_call(row: RowId, name: &str) -> Self {
        EditorCommand::Row(RowCmd::ConvertSettingToCall {
            row,
            name: name.to_string(),
        })
    }

    // === Variables ===

    pub fn move_variable_up(variable: VariableId) -> Self {
        EditorCommand::Variable(VariableCmd::Move {
            variable,
            direction: Direction::Up,
        })
    }

    pub fn move_variable_down(variable: VariableId) -> Self {
        EditorCommand::Variable(VariableCmd::Move {
            variable,
            direction: Direction::Down,
        })
    }

    pub fn set_variable_name(variable: VariableId, name: &str) -> Self {
        EditorCommand::Variable(VariableCmd::SetName {
            variable,
            name: name.to_string(),
        })
    }
}
