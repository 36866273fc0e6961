// src/runner.rs
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use crate::{
    core, file, net,
    params::{Params, Source},
    progress::Progress,
    schema::{ExtractionResult, RecordSchema},
    store,
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on mode and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(target) = &params.locator {
        return locator_mode(params, target, progress);
    }
    if let Some(clicked) = &params.pick {
        return pick_mode(params, clicked, progress);
    }
    if params.crawl {
        return crawl_mode(params, progress);
    }
    Err("nothing to do: pass --pick, --crawl, or --locator (see --help)".into())
}

fn load_source(src: &Source) -> Result<String, Box<dyn Error>> {
    match src {
        Source::Url(u) => net::fetch_page(u),
        Source::File(p) => Ok(std::fs::read_to_string(p)?),
    }
}

fn source_label(src: &Source) -> String {
    match src {
        Source::Url(u) => u.clone(),
        Source::File(p) => p.display().to_string(),
    }
}

fn first_source(params: &Params) -> Result<&Source, Box<dyn Error>> {
    params
        .sources
        .first()
        .ok_or_else(|| "this mode needs a --url or --file".into())
}

/* ---------------- Pick: one click → schema ---------------- */

fn pick_mode(
    params: &Params,
    clicked_selector: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let src = first_source(params)?;
    let html = load_source(src)?;
    let doc = Html::parse_document(&html);

    let sel = Selector::parse(clicked_selector)
        .map_err(|e| format!("bad --pick selector: {e}"))?;
    let clicked = doc
        .select(&sel)
        .next()
        .ok_or_else(|| format!("nothing on the page matches --pick '{clicked_selector}'"))?;

    let selection = core::detect_record(clicked);
    // the proposer reads its template from the first child of whatever it
    // is handed; the record's parent puts the first record instance there
    let proposal_root = selection
        .record
        .parent()
        .and_then(ElementRef::wrap)
        .unwrap_or(selection.record);
    let fields = core::propose_fields(proposal_root);
    logf!(
        "pick: {} → record '{}', {} candidate fields",
        source_label(src),
        selection.selector,
        fields.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Record: {}", selection.selector));
        if fields.is_empty() {
            p.log("No fields detected; edit the schema file by hand.");
        }
        for f in &fields {
            let preview = f
                .preview
                .as_deref()
                .map(|pv| format!("  e.g. {pv}"))
                .unwrap_or_default();
            p.log(&format!(
                "  [{}] {} <{}> {}{}",
                f.id,
                f.name,
                f.selector,
                f.attribute.as_str(),
                preview
            ));
        }
    }

    let schema = RecordSchema {
        record_selector: selection.selector,
        fields,
    };
    store::save_schema(&params.schema_path, &schema)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Schema saved to {}", params.schema_path.display()));
        p.finish();
    }

    Ok(RunSummary {
        rows: 0,
        files_written: vec![params.schema_path.clone()],
    })
}

/* ---------------- Crawl: schema → rows ---------------- */

fn crawl_mode(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let schema = store::load_schema(&params.schema_path)?;
    schema.validate()?;

    if params.sources.is_empty() {
        return Err("crawl mode needs at least one --url or --file".into());
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.sources.len());
    }

    let mut result = ExtractionResult::default();
    for (i, src) in params.sources.iter().enumerate() {
        // pace network fetches only; local files need no courtesy
        if i > 0 && params.delay_ms > 0 && matches!(src, Source::Url(_)) {
            thread::sleep(Duration::from_millis(params.delay_ms));
        }

        let html = load_source(src)?;
        let doc = Html::parse_document(&html);
        let rows = core::extract(&doc, &schema.record_selector, &schema.fields);
        logf!("crawl: {} rows from {}", rows.len(), source_label(src));

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(i, rows.len());
        }
        result.records.extend(rows);
    }

    let headers = result.headers();
    let rows = result.rows(&headers);
    let out = params
        .out
        .clone()
        .unwrap_or_else(|| file::default_out_path(params.format));
    let written =
        file::write_export_single(&out, Some(&headers), &rows, params.include_headers, params.format)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} rows → {}", result.len(), written.display()));
        p.finish();
    }

    Ok(RunSummary {
        rows: result.len(),
        files_written: vec![written],
    })
}

/* ---------------- Locator: debugging aid ---------------- */

fn locator_mode(
    params: &Params,
    target: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let src = first_source(params)?;
    let html = load_source(src)?;
    let doc = Html::parse_document(&html);

    let sel = Selector::parse(target).map_err(|e| format!("bad --locator selector: {e}"))?;
    let el = doc
        .select(&sel)
        .next()
        .ok_or_else(|| format!("nothing on the page matches --locator '{target}'"))?;

    let loc = core::build_locator(el);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&loc);
    }

    Ok(RunSummary {
        rows: 0,
        files_written: Vec::new(),
    })
}
