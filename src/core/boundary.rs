// src/core/boundary.rs

use scraper::ElementRef;

use crate::core::locator::{build_locator, record_locator};

/// A detected record boundary: the element presumed to represent one
/// repeated entry, plus a locator that matches every sibling instance.
#[derive(Debug, Clone)]
pub struct RecordSelection<'a> {
    pub record: ElementRef<'a>,
    pub selector: String,
}

/// Climb from a clicked element to the repeated-record boundary.
///
/// A click usually lands on something inside one "card" of a list: a
/// link, a price span. Starting at the click, each candidate's parent is
/// tested as a list container: more than 2 element children whose first
/// two share a tag name. The first candidate whose parent passes is the
/// record. Reaching the document root without a hit falls back to the
/// clicked element's parent, then to the clicked element itself.
///
/// Idempotent; never fails. Precision limits of the container test: a
/// non-repeating header child ahead of the repeated run defeats it, as do
/// visually uniform cards built from differing tags.
pub fn detect_record(clicked: ElementRef) -> RecordSelection {
    let mut candidate = clicked;
    while let Some(parent) = candidate.parent().and_then(ElementRef::wrap) {
        if looks_like_list(parent) {
            return RecordSelection {
                record: candidate,
                selector: record_locator(candidate),
            };
        }
        candidate = parent;
    }

    // No list signal, so the fallback element is not a known repeated
    // sibling; keep the full locator, ordinal included.
    let record = clicked.parent().and_then(ElementRef::wrap).unwrap_or(clicked);
    RecordSelection {
        record,
        selector: build_locator(record),
    }
}

fn looks_like_list(parent: ElementRef) -> bool {
    let mut kids = parent.children().filter_map(ElementRef::wrap);
    let (Some(first), Some(second)) = (kids.next(), kids.next()) else {
        return false;
    };
    if kids.next().is_none() {
        // exactly two children is not enough signal
        return false;
    }
    first.value().name() == second.value().name()
}
