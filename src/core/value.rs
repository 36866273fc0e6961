// src/core/value.rs

use scraper::ElementRef;

use crate::schema::Attribute;

/// Read one scalar string value out of an element.
///
/// `text` is trimmed concatenated text content, `html` the serialized
/// inner markup; the rest are attribute reads. A missing attribute
/// resolves to the empty string, so this never fails.
pub fn resolve_value(el: ElementRef, attr: &Attribute) -> String {
    match attr {
        Attribute::Text => trimmed_text(el),
        Attribute::Html => el.inner_html(),
        Attribute::Href => attr_or_empty(el, "href"),
        Attribute::Src => attr_or_empty(el, "src"),
        Attribute::Value => attr_or_empty(el, "value"),
        Attribute::Custom(name) => attr_or_empty(el, name),
    }
}

pub(crate) fn trimmed_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn attr_or_empty(el: ElementRef, name: &str) -> String {
    el.value().attr(name).unwrap_or_default().to_string()
}
