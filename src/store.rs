// src/store.rs

// Schema persistence. The pick step writes the schema JSON; the crawl step
// reads it back. The file is deliberately pretty-printed so fields can be
// renamed, reordered, deleted, or appended by hand in between.

use std::{error::Error, fs, path::Path};

use crate::file::ensure_directory;
use crate::schema::RecordSchema;

pub fn save_schema(path: &Path, schema: &RecordSchema) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(schema)?;
    fs::write(path, json)?;
    logd!("schema saved: {}", path.display());
    Ok(())
}

pub fn load_schema(path: &Path) -> Result<RecordSchema, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read schema {}: {}", path.display(), e))?;
    let schema: RecordSchema = serde_json::from_str(&text)?;
    logd!(
        "schema loaded: '{}' with {} fields",
        schema.record_selector,
        schema.fields.len()
    );
    Ok(schema)
}
