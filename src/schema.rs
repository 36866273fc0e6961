// src/schema.rs
//
// Data shapes shared between the pick step (schema construction) and the
// crawl step (replay + export). The schema file on disk is plain JSON so it
// can be hand-edited between the two steps.

use std::error::Error;

use serde::{Deserialize, Serialize};

/// How to read one scalar value out of a matched element.
///
/// Anything that isn't one of the five built-in modes is kept verbatim and
/// read as a literal attribute name (e.g. `data-id`, `title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Attribute {
    Text,
    Html,
    Href,
    Src,
    Value,
    Custom(String),
}

impl From<String> for Attribute {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => Attribute::Text,
            "html" => Attribute::Html,
            "href" => Attribute::Href,
            "src" => Attribute::Src,
            "value" => Attribute::Value,
            _ => Attribute::Custom(s),
        }
    }
}

impl From<Attribute> for String {
    fn from(a: Attribute) -> Self {
        match a {
            Attribute::Text => s!("text"),
            Attribute::Html => s!("html"),
            Attribute::Href => s!("href"),
            Attribute::Src => s!("src"),
            Attribute::Value => s!("value"),
            Attribute::Custom(name) => name,
        }
    }
}

impl Attribute {
    pub fn as_str(&self) -> &str {
        match self {
            Attribute::Text => "text",
            Attribute::Html => "html",
            Attribute::Href => "href",
            Attribute::Src => "src",
            Attribute::Value => "value",
            Attribute::Custom(name) => name,
        }
    }
}

/// One named (selector, attribute) pair describing how to read one value
/// out of a record instance.
///
/// An empty `selector` is legal: it means "awaiting manual assignment" and
/// replays to empty values until filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: u32,
    pub name: String,
    pub selector: String,
    pub attribute: Attribute,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// The whole reusable artifact: which elements are records, and which
/// values to pull out of each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub record_selector: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Caller-side validation before replay. The core itself assumes a
    /// well-formed schema and never re-checks.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.record_selector.trim().is_empty() {
            return Err("schema has an empty record selector".into());
        }
        if self.fields.is_empty() {
            return Err("schema has no fields".into());
        }
        for f in &self.fields {
            if f.name.trim().is_empty() {
                return Err(format!("field #{} has a blank name", f.id).into());
            }
        }
        Ok(())
    }
}

/// One extracted row: field name → value, in first-insertion order.
/// Inserting an existing name overwrites the value but keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedRecord {
    entries: Vec<(String, String)>,
}

impl ExtractedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: String) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((s!(name), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered replay output for one or more documents. Transient: held only
/// until exported or discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionResult {
    pub records: Vec<ExtractedRecord>,
}

impl ExtractionResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column headers: the keys of the first record, in insertion order.
    pub fn headers(&self) -> Vec<String> {
        match self.records.first() {
            Some(rec) => rec.iter().map(|(n, _)| s!(n)).collect(),
            None => Vec::new(),
        }
    }

    /// Materialize rows against `headers`; missing keys become empty cells.
    pub fn rows(&self, headers: &[String]) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|rec| {
                headers
                    .iter()
                    .map(|h| rec.get(h).map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
