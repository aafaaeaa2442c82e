// benches/pep_index.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use pep_scrape::specs::pep_detail::extract_status;
use pep_scrape::specs::pep_index::crawl_index;

fn synthetic_index(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        body.push_str(&format!(
            "<tr><td><abbr title=\"Standards Track, Final\">SF</abbr></td>\
             <td><a href=\"pep-{i:04}/\">{i}</a></td><td>Title {i}</td></tr>"
        ));
    }
    format!(
        "<html><body><section id=\"pep-content\">\
         <table class=\"pep-zero-table docutils align-default\">{body}</table>\
         </section></body></html>"
    )
}

fn synthetic_detail(fields: usize) -> String {
    let mut body = String::new();
    for i in 0..fields {
        body.push_str(&format!("<dt>Field{i}<span class=\"colon\">:</span></dt><dd>value {i}</dd>"));
    }
    body.push_str("<dt>Status<span class=\"colon\">:</span></dt><dd>Final</dd>");
    format!(
        "<html><body><section id=\"pep-content\">\
         <dl class=\"rfc2822 field-list simple\">{body}</dl>\
         </section></body></html>"
    )
}

fn bench_pep_parsing(c: &mut Criterion) {
    let index = synthetic_index(200);
    let base = Url::parse("https://peps.python.org/").unwrap();
    c.bench_function("crawl_index_200_rows", |b| {
        b.iter(|| {
            let entries = crawl_index(black_box(&index), &base).unwrap();
            black_box(entries.len())
        })
    });

    let detail = synthetic_detail(10);
    c.bench_function("extract_status_10_fields", |b| {
        b.iter(|| {
            let status = extract_status(black_box(&detail)).unwrap();
            black_box(status)
        })
    });
}

criterion_group!(benches, bench_pep_parsing);
criterion_main!(benches);
