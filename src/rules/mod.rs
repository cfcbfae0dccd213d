//! Row conversion rules
//!
//! Pure functions deciding which row kind and declaration type a row takes,
//! plus the sparse cell editing helpers. Nothing here touches the suite tree.

pub mod cells;
pub mod conversion;
pub mod kinds;
pub mod table;

pub use kinds::{bracket_inner, classify, HolderKind, RowKind, SectionKind, SettingRole};
pub use table::{model_type, ModelType};
