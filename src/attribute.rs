//! Promotion attributes.
//!
//! Base stats follow a linear curve per promotion tier:
//! `value = base + step * (level - 1)`.

use crate::catalog::Catalog;
use crate::records::PromotionRecord;
use crate::sheet::StatEntry;
use std::ops::RangeInclusive;

/// Valid promotion tiers.
pub const PROMOTION_TIERS: RangeInclusive<u32> = 0..=6;

/// Valid levels for attribute interpolation.
pub const LEVELS: RangeInclusive<u32> = 1..=80;

/// Interpolate the base attributes of a promotion record.
///
/// Returns an empty list when `record` is `None`, `tier` is outside
/// `0..=6`, or `level` is outside `1..=80`. Attributes come out in record
/// order; fields with no matching property in the catalog are dropped.
///
/// # Examples
///
/// ```rust
/// use railstat::attribute::resolve_promotion_attributes;
/// use railstat::{Catalog, Domain, MemorySource};
///
/// let mut source = MemorySource::empty();
/// for domain in Domain::ALL {
///     source.insert(domain, "{}");
/// }
/// source.insert(
///     Domain::Properties,
///     r#"{"BaseHP": {"type": "BaseHP", "name": "HP", "field": "hp"}}"#,
/// );
/// source.insert(
///     Domain::CharacterPromotions,
///     r#"{"1001": {"id": "1001", "values": [{"hp": {"base": 100.0, "step": 5.0}}]}}"#,
/// );
/// let catalog = Catalog::load(&source).unwrap();
///
/// let record = catalog.character_promotion("1001");
/// let attributes = resolve_promotion_attributes(&catalog, record, 0, 11);
/// assert_eq!(attributes[0].value, 150.0);
/// assert!(resolve_promotion_attributes(&catalog, record, 0, 81).is_empty());
/// ```
pub fn resolve_promotion_attributes(
    catalog: &Catalog,
    record: Option<&PromotionRecord>,
    tier: u32,
    level: u32,
) -> Vec<StatEntry> {
    let Some(record) = record else {
        return Vec::new();
    };
    if !PROMOTION_TIERS.contains(&tier) || !LEVELS.contains(&level) {
        tracing::debug!(
            promotion_id = %record.id,
            tier,
            level,
            "promotion tier or level out of range"
        );
        return Vec::new();
    }
    let Some(curves) = record.values.get(tier as usize) else {
        tracing::debug!(promotion_id = %record.id, tier, "promotion tier missing from record");
        return Vec::new();
    };

    curves
        .iter()
        .filter_map(|(field, curve)| {
            let property = catalog.property_for_field(field)?;
            let value = curve.base + curve.step * f64::from(level - 1);
            Some(StatEntry::attribute(field, property, value))
        })
        .collect()
}
