// src/core/replay.rs

use scraper::{ElementRef, Html, Selector};

use crate::core::value::resolve_value;
use crate::schema::{ExtractedRecord, FieldDescriptor};

/// Replay a field schema across every record instance in `doc`.
///
/// Instances are all matches of `record_selector`, in document order. Each
/// instance always emits one record; per field (in schema order) the value
/// comes from an ordered three-tier lookup:
///
/// 1. field selector identical to the record selector → the instance
///    itself;
/// 2. first descendant of the instance matching the field selector;
/// 3. first descendant of the instance's *parent* matching it; some
///    fields render just outside the detected boundary;
/// 4. otherwise the empty string. Missing fields never drop a record.
///
/// Duplicate field names overwrite earlier values in the emitted record.
/// An unparseable or empty `record_selector` simply matches nothing. Pure
/// and idempotent; linear scan, fine up to low thousands of instances.
pub fn extract(
    doc: &Html,
    record_selector: &str,
    fields: &[FieldDescriptor],
) -> Vec<ExtractedRecord> {
    let Ok(instance_sel) = Selector::parse(record_selector) else {
        return Vec::new();
    };

    // Parse each field selector once up front. Empty or unparseable
    // selectors stay None and resolve to empty values throughout.
    let field_sels: Vec<Option<Selector>> = fields
        .iter()
        .map(|f| {
            if f.selector.is_empty() {
                None
            } else {
                Selector::parse(&f.selector).ok()
            }
        })
        .collect();

    let mut out = Vec::new();
    for instance in doc.select(&instance_sel) {
        let mut row = ExtractedRecord::new();
        for (field, sel) in fields.iter().zip(&field_sels) {
            row.insert(&field.name, field_value(instance, field, sel.as_ref(), record_selector));
        }
        out.push(row);
    }
    out
}

fn field_value(
    instance: ElementRef,
    field: &FieldDescriptor,
    sel: Option<&Selector>,
    record_selector: &str,
) -> String {
    // Tier 1: the field targets the record element itself.
    if field.selector == record_selector {
        return resolve_value(instance, &field.attribute);
    }
    let Some(sel) = sel else {
        return s!();
    };
    // Tier 2: within the instance.
    if let Some(hit) = instance.select(sel).next() {
        return resolve_value(hit, &field.attribute);
    }
    // Tier 3: sibling scope, via the instance's parent.
    if let Some(parent) = instance.parent().and_then(ElementRef::wrap) {
        if let Some(hit) = parent.select(sel).next() {
            return resolve_value(hit, &field.attribute);
        }
    }
    s!()
}
