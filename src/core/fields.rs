// src/core/fields.rs

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::core::value::trimmed_text;
use crate::schema::{Attribute, FieldDescriptor};

static LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static IMAGES: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img[src]").unwrap());
static TEXTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, p, span, div").unwrap());

/// Texts containing any of these read as prices.
const CURRENCY_MARKERS: [char; 3] = ['đ', '$', '₫'];

/// Emitted text candidates must have strictly more than this many chars…
const TEXT_MIN: usize = 3;
/// …and strictly fewer than this many.
const TEXT_MAX: usize = 200;

/// Below this many chars a non-heading, non-price text is "short info".
const SHORT_TEXT: usize = 50;

/// Preview cutoff for text candidates.
const PREVIEW_LEN: usize = 50;

/// Propose candidate fields from a record's template instance.
///
/// Only the record's *first* child element is examined; it stands in for
/// every instance. A record with no child elements proposes nothing.
/// Output order is fixed: link candidates, then image candidates, then
/// text candidates deduplicated by trimmed content, each group in document
/// order. The list is advisory; callers may edit, reorder, delete, or
/// append before building a schema.
pub fn propose_fields(record: ElementRef) -> Vec<FieldDescriptor> {
    let Some(template) = record.children().filter_map(ElementRef::wrap).next() else {
        return Vec::new();
    };

    let mut out: Vec<FieldDescriptor> = Vec::new();

    for link in template.select(&LINKS) {
        let href = link.value().attr("href").unwrap_or_default();
        if href.is_empty() || trimmed_text(link).is_empty() {
            continue;
        }
        let name = format!("Link {}", out.len() + 1);
        out.push(candidate(out.len(), name, "a", Attribute::Href, s!(href)));
    }

    let link_count = out.len();
    for img in template.select(&IMAGES) {
        let src = img.value().attr("src").unwrap_or_default();
        if src.is_empty() {
            continue;
        }
        let name = format!("Image {}", out.len() - link_count + 1);
        out.push(candidate(out.len(), name, "img", Attribute::Src, s!(src)));
    }

    let mut seen: HashSet<String> = HashSet::new();
    for el in template.select(&TEXTS) {
        let text = trimmed_text(el);
        let chars = text.chars().count();
        if chars <= TEXT_MIN || chars >= TEXT_MAX {
            continue;
        }
        if !seen.insert(text.clone()) {
            continue;
        }
        let tag = el.value().name().to_ascii_lowercase();
        let name = format!("{} ({tag})", classify_text(&tag, &text, chars));
        out.push(candidate(out.len(), name, &tag, Attribute::Text, preview_of(&text)));
    }

    out
}

/// Display-name category, checked top to bottom: heading tag, currency
/// marker, short text, long text.
fn classify_text(tag: &str, text: &str, chars: usize) -> &'static str {
    if matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
        "Title"
    } else if text.chars().any(|c| CURRENCY_MARKERS.contains(&c)) {
        "Price"
    } else if chars < SHORT_TEXT {
        "Short info"
    } else {
        "Description"
    }
}

fn preview_of(text: &str) -> String {
    let mut rest = text.chars();
    let head: String = rest.by_ref().take(PREVIEW_LEN).collect();
    if rest.next().is_some() { head + "..." } else { head }
}

fn candidate(
    index: usize,
    name: String,
    selector: &str,
    attribute: Attribute,
    preview: String,
) -> FieldDescriptor {
    FieldDescriptor {
        id: index as u32 + 1,
        name,
        selector: s!(selector),
        attribute,
        preview: Some(preview),
    }
}
