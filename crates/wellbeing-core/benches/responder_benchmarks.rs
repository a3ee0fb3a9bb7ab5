//! Benchmarks for feedback classification and view resolution.
//!
//! Both run on every user action, so they should stay in the sub-microsecond
//! range even for long free-text entries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wellbeing_core::{FeedbackRequest, KeywordResponder, ViewRouter};

/// A long diary-style entry with the keyword near the end.
fn long_entry() -> String {
    let filler = "Went for a walk, had lunch with friends, read a few chapters. ";
    format!("{}Overall I felt a bit stressed in the evening.", filler.repeat(20))
}

fn bench_classify(c: &mut Criterion) {
    let responder = KeywordResponder::new();
    let entry = long_entry();

    c.bench_function("classify_overview_short", |b| {
        b.iter(|| responder.classify(FeedbackRequest::Overview(Some(black_box("I am happy")))))
    });

    c.bench_function("classify_overview_long", |b| {
        b.iter(|| responder.classify(FeedbackRequest::Overview(Some(black_box(entry.as_str())))))
    });

    c.bench_function("classify_chat_fallback", |b| {
        b.iter(|| responder.classify(FeedbackRequest::Chat(black_box("just checking in"))))
    });

    c.bench_function("classify_survey", |b| {
        b.iter(|| responder.classify(FeedbackRequest::Survey(black_box(6))))
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_known", |b| b.iter(|| ViewRouter::resolve(black_box("/ai"))));
    c.bench_function("resolve_unknown", |b| {
        b.iter(|| ViewRouter::resolve(black_box("/does/not/exist")))
    });
}

criterion_group!(benches, bench_classify, bench_resolve);
criterion_main!(benches);
