// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use clickguard::{CspPolicy, FramingAnalyzer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reqwest::header::{HeaderMap, HeaderValue};

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(*name, HeaderValue::from_static(*value));
    }
    map
}

fn classification_benchmark(c: &mut Criterion) {
    let analyzer = FramingAnalyzer::default();
    let cases = vec![
        headers(&[("x-frame-options", "DENY")]),
        headers(&[(
            "content-security-policy",
            "default-src 'self'; script-src 'self' cdn.example; frame-ancestors 'self'",
        )]),
        headers(&[("content-security-policy", "default-src 'self'")]),
        HeaderMap::new(),
    ];

    c.bench_function("classify_headers", |b| {
        b.iter(|| {
            for case in &cases {
                black_box(analyzer.classify(black_box(case)));
            }
        })
    });
}

fn csp_parse_benchmark(c: &mut Criterion) {
    let policy = "default-src 'self'; script-src 'self' 'nonce-abc' https://cdn.example; \
                  style-src 'self' 'unsafe-inline'; img-src * data:; frame-ancestors 'none'";

    c.bench_function("csp_parse", |b| {
        b.iter(|| black_box(CspPolicy::parse(black_box(policy))))
    });
}

criterion_group!(benches, classification_benchmark, csp_parse_benchmark);
criterion_main!(benches);
