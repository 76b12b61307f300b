#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Template rewriting benchmarks: tmplurl vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tmplurl::ModifiableUrl;
use url::Url as UrlCrate;

const WX_URL: &str =
    "http://wx.e.com/weather.php?postalCode=_POSTAL_CODE_&default=_DEFAULT_POSTAL_CODE_&units=imperial";

/// Replace the first pair whose value equals `token`, the way callers
/// without a value-based lookup have to do it with the url crate
fn url_crate_replace(input: &str, token: &str, replacement: &str) -> String {
    let mut url = UrlCrate::parse(input).unwrap();
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some(pair) = pairs.iter_mut().find(|(_, v)| v == token) {
        pair.1 = replacement.to_string();
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.into()
}

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("tmplurl", |b| {
        b.iter(|| ModifiableUrl::parse(black_box(WX_URL)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(WX_URL)).unwrap());
    });

    group.finish();
}

fn bench_replace_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_placeholder");

    group.bench_function("tmplurl", |b| {
        b.iter(|| {
            let mut url = ModifiableUrl::parse(black_box(WX_URL)).unwrap().unwrap();
            url.replace_first_matching_value("_POSTAL_CODE_", "55901 12345");
            String::from(url)
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| url_crate_replace(black_box(WX_URL), "_POSTAL_CODE_", "55901 12345"));
    });

    group.finish();
}

fn bench_serialize_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_cached");
    let mut url = ModifiableUrl::parse(WX_URL).unwrap().unwrap();
    url.add_param("q", "some value with spaces");

    group.bench_function("tmplurl", |b| {
        b.iter(|| black_box(url.serialize().len()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_replace_all,
    bench_serialize_cached
);

criterion_main!(benches);
