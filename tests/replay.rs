// tests/replay.rs
//
// Schema replay: document-order rows, the three-tier fallback, degradation
// to empty values instead of dropped records.
//
use pagepick::core::extract;
use pagepick::schema::{Attribute, FieldDescriptor};
use scraper::Html;

fn field(name: &str, selector: &str, attribute: Attribute) -> FieldDescriptor {
    FieldDescriptor {
        id: 0,
        name: name.into(),
        selector: selector.into(),
        attribute,
        preview: None,
    }
}

fn list_doc() -> Html {
    Html::parse_document(
        r#"<html><body><ul>
            <li><a href="/one">One</a></li>
            <li><a href="/two">Two</a></li>
            <li><a href="/three">Three</a></li>
        </ul></body></html>"#,
    )
}

#[test]
fn one_row_per_instance_in_document_order() {
    let doc = list_doc();
    let fields = vec![field("Name", "a", Attribute::Text)];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Name"), Some("One"));
    assert_eq!(rows[1].get("Name"), Some("Two"));
    assert_eq!(rows[2].get("Name"), Some("Three"));
}

#[test]
fn attribute_modes_resolve_per_instance() {
    let doc = list_doc();
    let fields = vec![
        field("Name", "a", Attribute::Text),
        field("Url", "a", Attribute::Href),
    ];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows[1].get("Name"), Some("Two"));
    assert_eq!(rows[1].get("Url"), Some("/two"));
}

#[test]
fn unmatched_selector_degrades_to_empty_never_drops_rows() {
    let doc = list_doc();
    let fields = vec![
        field("Name", "a", Attribute::Text),
        field("Missing", "em.nope", Attribute::Text),
    ];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.get("Missing"), Some(""));
        assert_ne!(row.get("Name"), Some(""));
    }
}

#[test]
fn field_targeting_the_record_itself_resolves_directly() {
    let doc = list_doc();
    let fields = vec![field("Whole", "li", Attribute::Text)];

    // "li" equals the record selector, so tier 1 applies; a descendant
    // search inside an li would find no li at all
    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Whole"), Some("One"));
    assert_eq!(rows[2].get("Whole"), Some("Three"));
}

#[test]
fn sibling_scope_fallback_reaches_outside_the_record() {
    // the section heading sits next to the records, not inside them
    let doc = Html::parse_document(
        r#"<html><body><div class="wrap">
            <h2 class="section">Deals</h2>
            <div class="card">A</div>
            <div class="card">B</div>
            <div class="card">C</div>
        </div></body></html>"#,
    );
    let fields = vec![
        field("Item", "div.card", Attribute::Text),
        field("Section", "h2.section", Attribute::Text),
    ];

    let rows = extract(&doc, "div.card", &fields);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.get("Section"), Some("Deals"));
    }
    assert_eq!(rows[1].get("Item"), Some("B"));
}

#[test]
fn duplicate_field_names_overwrite_earlier_values() {
    let doc = list_doc();
    let fields = vec![
        field("Name", "a", Attribute::Text),
        field("Name", "a", Attribute::Href),
    ];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("Name"), Some("/one"));
}

#[test]
fn empty_field_selector_yields_empty_values() {
    let doc = list_doc();
    let fields = vec![field("Pending", "", Attribute::Text)];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Pending"), Some(""));
}

#[test]
fn unparseable_record_selector_matches_nothing() {
    let doc = list_doc();
    let fields = vec![field("Name", "a", Attribute::Text)];

    assert!(extract(&doc, "", &fields).is_empty());
    assert!(extract(&doc, ":::nope", &fields).is_empty());
}

#[test]
fn custom_attribute_reads_literally_or_empty() {
    let doc = Html::parse_document(
        r#"<html><body><ol>
            <li data-sku="A1"><b>x</b></li>
            <li><b>y</b></li>
            <li data-sku="C3"><b>z</b></li>
        </ol></body></html>"#,
    );
    let fields = vec![field("Sku", "li", Attribute::Custom("data-sku".into()))];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows[0].get("Sku"), Some("A1"));
    // missing attribute is empty, not a text fallback
    assert_eq!(rows[1].get("Sku"), Some(""));
    assert_eq!(rows[2].get("Sku"), Some("C3"));
}

#[test]
fn html_mode_returns_inner_markup() {
    let doc = Html::parse_document(
        r#"<html><body><ul><li><p>a <b>bold</b> move</p></li><li><p>two</p></li><li><p>three</p></li></ul></body></html>"#,
    );
    let fields = vec![field("Markup", "p", Attribute::Html)];

    let rows = extract(&doc, "li", &fields);
    assert_eq!(rows[0].get("Markup"), Some("a <b>bold</b> move"));
}

#[test]
fn idempotent_for_identical_inputs() {
    let doc = list_doc();
    let fields = vec![
        field("Name", "a", Attribute::Text),
        field("Url", "a", Attribute::Href),
    ];

    let first = extract(&doc, "li", &fields);
    let second = extract(&doc, "li", &fields);
    assert_eq!(first, second);
}
