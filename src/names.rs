//! Unique sibling names for holders
//!
//! `"name"` collides → `"name N"` where N is one past the highest suffix in use.

use crate::model::{SectionId, SuiteFile};

/// Unique holder name for `section` derived from `base`
///
/// Returns `base` unchanged when no holder of the section uses it yet.
pub fn generate_unique_name(suite: &SuiteFile, section: SectionId, base: &str) -> String {
    unique_name(suite.holder_names(section), base)
}

/// Unique name among `existing` derived from `base`
pub fn unique_name<'a, I>(existing: I, base: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = false;
    let mut max_suffix = 0u64;
    for name in existing {
        if name == base {
            taken = true;
        } else if let Some(n) = suffix_of(name, base) {
            max_suffix = max_suffix.max(n);
        }
    }
    if taken {
        format!("{} {}", base, max_suffix + 1)
    } else {
        base.to_string()
    }
}

/// Name for an inserted holder whose `name` may already be in use
///
/// A trailing number is treated as a suffix, so inserting `"case 1"` next to
/// `case 1..3` yields `"case 4"` rather than `"case 1 1"`.
pub fn next_free_variant<'a, I>(existing: I, name: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: Vec<&str> = existing.into_iter().collect();
    if !existing.contains(&name) {
        return name.to_string();
    }
    let Some((base, _)) = split_suffix(name) else {
        return unique_name(existing, name);
    };
    let max_suffix = existing
        .iter()
        .filter_map(|n| if *n == base { Some(0) } else { suffix_of(n, base) })
        .max()
        .unwrap_or(0);
    format!("{} {}", base, max_suffix + 1)
}

fn suffix_of(name: &str, base: &str) -> Option<u64> {
    let rest = name.strip_prefix(base)?.strip_prefix(' ')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

fn split_suffix(name: &str) -> Option<(&str, u64)> {
    let (base, suffix) = name.rsplit_once(' ')?;
    if base.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((base, suffix.parse().ok()?))
}
