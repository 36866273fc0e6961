// tests/pick_crawl_e2e.rs
//
// Whole pipeline against a saved fixture: pick writes a schema, crawl
// replays it and exports rows. No network involved.
//
use std::fs;
use std::path::PathBuf;

use pagepick::csv::Delim;
use pagepick::params::{Params, Source};
use pagepick::progress::NullProgress;
use pagepick::runner;
use pagepick::store;

const LISTING: &str = r#"<html><body><div class="results">
    <div class="card"><a href="/p/1">Alpha</a><h3>Alpha thing</h3><span>$10</span></div>
    <div class="card"><a href="/p/2">Beta</a><h3>Beta thing</h3><span>$20</span></div>
    <div class="card"><a href="/p/3">Gamma</a><h3>Gamma thing</h3><span>$30</span></div>
</div></body></html>"#;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pagepick_e2e_{}_{}", std::process::id(), name))
}

#[test]
fn pick_then_crawl_produces_rows() {
    let page = scratch("listing.html");
    let schema_path = scratch("schema.json");
    let out_path = scratch("rows.csv");
    fs::write(&page, LISTING).unwrap();

    // pick: the "click" lands on the second card's link
    let mut params = Params::new();
    params.sources = vec![Source::File(page.clone())];
    params.pick = Some("a[href='/p/2']".into());
    params.schema_path = schema_path.clone();
    let mut sink = NullProgress;
    let summary = runner::run(&params, Some(&mut sink)).unwrap();
    assert_eq!(summary.files_written, vec![schema_path.clone()]);

    let schema = store::load_schema(&schema_path).unwrap();
    assert_eq!(schema.record_selector, "div.results div.card");
    assert!(schema.validate().is_ok());

    // crawl the same fixture twice: rows concatenate in order
    let mut params = Params::new();
    params.sources = vec![Source::File(page.clone()), Source::File(page.clone())];
    params.crawl = true;
    params.schema_path = schema_path.clone();
    params.out = Some(out_path.clone());
    params.format = Delim::Csv;
    let summary = runner::run(&params, Some(&mut sink)).unwrap();
    assert_eq!(summary.rows, 6);
    assert_eq!(summary.files_written, vec![out_path.clone()]);

    let exported = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = exported.lines().collect();
    assert_eq!(lines.len(), 7); // header + 6 rows
    assert!(lines[0].starts_with("Link 1,"));
    assert!(lines[1].contains("/p/1"));
    assert!(lines[3].contains("/p/3"));
    assert!(lines[4].contains("/p/1")); // second pass starts over

    for p in [page, schema_path, out_path] {
        let _ = fs::remove_file(p);
    }
}

#[test]
fn crawl_without_schema_fails_cleanly() {
    let mut params = Params::new();
    params.sources = vec![Source::File(scratch("missing.html"))];
    params.crawl = true;
    params.schema_path = scratch("no_such_schema.json");
    let err = runner::run(&params, None).unwrap_err();
    assert!(err.to_string().contains("schema"));
}

#[test]
fn no_mode_is_an_error() {
    let params = Params::new();
    assert!(runner::run(&params, None).is_err());
}
