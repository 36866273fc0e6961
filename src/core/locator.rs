// src/core/locator.rs

use scraper::ElementRef;

/// Class prefix reserved for the external highlight layer. Tokens carrying
/// it are never part of a locator.
pub const MARKER_CLASS_PREFIX: &str = "crawler-";

/// Locator depth cap: at most this many path segments.
pub const MAX_SEGMENTS: usize = 4;

/// Build a CSS-style locator for `el` within its document.
///
/// Walks upward from the element, one segment per node:
/// - a node with an id becomes `#id` and ends the walk (an id is treated
///   as sufficient context on its own);
/// - otherwise the segment is the lowercase tag name plus up to the first
///   two class tokens, with an `:nth-of-type` qualifier whenever the
///   parent has more than one same-tag child.
///
/// The walk stops at `body`/`html` or after [`MAX_SEGMENTS`] segments;
/// segments are joined with the descendant combinator. Deterministic:
/// identical node and document always produce the identical string. Not
/// guaranteed globally unique; best effort, human-plausible.
pub fn build_locator(el: ElementRef) -> String {
    locator_path(el, false)
}

/// Locator variant used for record boundaries: same walk, but the record's
/// own segment carries no positional qualifier. A record is one of several
/// repeated same-tag siblings, so an ordinal there would pin a single
/// instance instead of matching all of them.
pub(crate) fn record_locator(el: ElementRef) -> String {
    locator_path(el, true)
}

fn locator_path(el: ElementRef, skip_leaf_ordinal: bool) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut cur = Some(el);

    while let Some(node) = cur {
        let tag = node.value().name().to_ascii_lowercase();
        if tag == "body" || tag == "html" {
            break;
        }

        if let Some(id) = node.value().id() {
            segments.push(format!("#{id}"));
            break;
        }

        let mut seg = tag.clone();
        // classes() hands tokens back sorted; read the raw attribute to
        // keep the author's ordering
        let classes: Vec<&str> = node
            .value()
            .attr("class")
            .unwrap_or_default()
            .split_whitespace()
            .filter(|c| !c.starts_with(MARKER_CLASS_PREFIX))
            .take(2)
            .collect();
        if !classes.is_empty() {
            seg.push('.');
            seg.push_str(&classes.join("."));
        }

        let is_leaf = segments.is_empty();
        if !(is_leaf && skip_leaf_ordinal) {
            if let Some(pos) = ordinal_among_same_tag(node, &tag) {
                seg.push_str(&format!(":nth-of-type({pos})"));
            }
        }

        segments.push(seg);
        if segments.len() >= MAX_SEGMENTS {
            break;
        }
        cur = node.parent().and_then(ElementRef::wrap);
    }

    segments.reverse();
    segments.join(" ")
}

/// 1-based position of `el` among same-tag element siblings, or None when
/// it has no same-tag sibling (no qualifier needed then).
fn ordinal_among_same_tag(el: ElementRef, tag: &str) -> Option<usize> {
    let parent = el.parent()?;
    let mut count = 0usize;
    let mut pos = 0usize;
    for sib in parent.children().filter_map(ElementRef::wrap) {
        if sib.value().name().eq_ignore_ascii_case(tag) {
            count += 1;
            if sib.id() == el.id() {
                pos = count;
            }
        }
    }
    (count > 1 && pos > 0).then_some(pos)
}
