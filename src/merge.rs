//! Multi-source merging.
//!
//! Lists from different sources are combined by summing values that share
//! a key. Output order follows the first time each key is seen, and the
//! first occurrence's display metadata is kept; totals do not depend on
//! the order of the inputs.

use crate::build::LevelEntry;
use crate::sheet::StatEntry;
use std::collections::HashMap;

/// Sum level deltas per id across all lists.
///
/// Sums saturate at `u32::MAX`.
///
/// # Examples
///
/// ```rust
/// use railstat::merge::merge_levels;
/// use railstat::LevelEntry;
///
/// let ranks = vec![LevelEntry::new("skill_a", 2)];
/// let tree = vec![LevelEntry::new("skill_b", 1), LevelEntry::new("skill_a", 5)];
///
/// let merged = merge_levels([ranks.as_slice(), tree.as_slice()]);
/// assert_eq!(merged, vec![LevelEntry::new("skill_a", 7), LevelEntry::new("skill_b", 1)]);
/// ```
pub fn merge_levels<'a, I>(lists: I) -> Vec<LevelEntry>
where
    I: IntoIterator<Item = &'a [LevelEntry]>,
{
    let mut merged: Vec<LevelEntry> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    for entry in lists.into_iter().flatten() {
        match positions.get(entry.id.as_str()) {
            Some(&i) => merged[i].level = merged[i].level.saturating_add(entry.level),
            None => {
                positions.insert(&entry.id, merged.len());
                merged.push(entry.clone());
            }
        }
    }
    merged
}

/// Sum stat entries per [`StatEntry::key`] across all lists.
///
/// Each output entry is built fresh from the first occurrence's metadata
/// and the summed value, with `display` re-rendered.
///
/// # Examples
///
/// ```rust
/// use railstat::merge::merge_stats;
/// use railstat::StatEntry;
///
/// let character = vec![StatEntry::new("atk", "ATK", None, 500.0, false)];
/// let light_cone = vec![StatEntry::new("atk", "ATK", None, 400.5, false)];
///
/// let merged = merge_stats([character.as_slice(), light_cone.as_slice()]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].value, 900.5);
/// assert_eq!(merged[0].display, "900");
/// ```
pub fn merge_stats<'a, I>(lists: I) -> Vec<StatEntry>
where
    I: IntoIterator<Item = &'a [StatEntry]>,
{
    let mut firsts: Vec<&'a StatEntry> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    for entry in lists.into_iter().flatten() {
        match positions.get(entry.key()) {
            Some(&i) => totals[i] += entry.value,
            None => {
                positions.insert(entry.key(), firsts.len());
                firsts.push(entry);
                totals.push(entry.value);
            }
        }
    }
    firsts
        .into_iter()
        .zip(totals)
        .map(|(first, total)| first.with_value(total))
        .collect()
}
