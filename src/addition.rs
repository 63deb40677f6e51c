//! Addition totals.
//!
//! Converts merged bonus properties into absolute per-field additions on
//! top of the base attributes. A ratio property (e.g. `+28% ATK`) becomes
//! `0.28 * base ATK`; every other property adds its raw value.

use crate::catalog::Catalog;
use crate::sheet::StatEntry;
use std::collections::HashMap;

/// Compute per-field additions from base attributes and properties.
///
/// Contributions are summed per stat field in the order fields first
/// appear among `properties`. Each addition takes its display metadata
/// from the catalog's first property for that field; fields with no
/// property in the catalog are dropped.
///
/// # Examples
///
/// ```rust
/// use railstat::addition::compute_additions;
/// use railstat::{Catalog, Domain, MemorySource, StatEntry};
///
/// let mut source = MemorySource::empty();
/// for domain in Domain::ALL {
///     source.insert(domain, "{}");
/// }
/// source.insert(
///     Domain::Properties,
///     r#"{
///         "BaseAttack": {"type": "BaseAttack", "name": "ATK", "field": "atk"},
///         "AttackAddedRatio": {"type": "AttackAddedRatio", "name": "ATK", "field": "atk", "ratio": true, "percent": true}
///     }"#,
/// );
/// let catalog = Catalog::load(&source).unwrap();
///
/// let base_atk = StatEntry::attribute("atk", catalog.property("BaseAttack").unwrap(), 1000.0);
/// let atk_ratio = StatEntry::property(catalog.property("AttackAddedRatio").unwrap(), 0.3);
///
/// let additions = compute_additions(&catalog, &[base_atk], &[atk_ratio]);
/// assert_eq!(additions[0].field, "atk");
/// assert_eq!(additions[0].value, 300.0);
/// assert_eq!(additions[0].display, "300");
/// ```
pub fn compute_additions(
    catalog: &Catalog,
    attributes: &[StatEntry],
    properties: &[StatEntry],
) -> Vec<StatEntry> {
    let mut bases: HashMap<&str, f64> = HashMap::new();
    for attribute in attributes {
        bases.entry(attribute.field.as_str()).or_insert(attribute.value);
    }

    let mut firsts: Vec<&StatEntry> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for property in properties {
        let ratio = property
            .kind
            .as_deref()
            .and_then(|kind| catalog.property(kind))
            .is_some_and(|record| record.ratio);
        let contribution = match bases.get(property.field.as_str()) {
            Some(base) if ratio => property.value * base,
            _ => property.value,
        };
        match positions.get(property.field.as_str()) {
            Some(&i) => totals[i] += contribution,
            None => {
                positions.insert(&property.field, firsts.len());
                firsts.push(property);
                totals.push(contribution);
            }
        }
    }

    firsts
        .into_iter()
        .zip(totals)
        .filter_map(|(first, total)| {
            let Some(record) = catalog.property_for_field(&first.field) else {
                tracing::debug!(field = %first.field, "no property for addition field");
                return None;
            };
            Some(StatEntry::attribute(first.field.clone(), record, total))
        })
        .collect()
}
