// benches/replay.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pagepick::core::extract;
use pagepick::schema::{Attribute, FieldDescriptor};
use scraper::Html;

fn synthetic_listing(cards: usize) -> String {
    let mut html = String::from("<html><body><div class=\"grid\">");
    for i in 0..cards {
        html.push_str(&format!(
            "<div class=\"card\"><a href=\"/item/{i}\">Item {i}</a>\
             <img src=\"/img/{i}.png\">\
             <h3>Product {i}</h3>\
             <span class=\"price\">${i}.99</span></div>"
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn schema_fields() -> Vec<FieldDescriptor> {
    let field = |id, name: &str, selector: &str, attribute| FieldDescriptor {
        id,
        name: name.into(),
        selector: selector.into(),
        attribute,
        preview: None,
    };
    vec![
        field(1, "Link", "a", Attribute::Href),
        field(2, "Image", "img", Attribute::Src),
        field(3, "Title", "h3", Attribute::Text),
        field(4, "Price", "span.price", Attribute::Text),
        field(5, "Missing", "em.absent", Attribute::Text),
    ]
}

fn bench_replay(c: &mut Criterion) {
    let doc_small = Html::parse_document(&synthetic_listing(100));
    let doc_large = Html::parse_document(&synthetic_listing(2000));
    let fields = schema_fields();

    c.bench_function("replay_100_cards", |b| {
        b.iter(|| {
            let rows = extract(black_box(&doc_small), "div.card", black_box(&fields));
            black_box(rows.len())
        })
    });

    c.bench_function("replay_2000_cards", |b| {
        b.iter(|| {
            let rows = extract(black_box(&doc_large), "div.card", black_box(&fields));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
