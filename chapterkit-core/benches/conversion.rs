//! Text pipeline benchmarks

use chapterkit_core::navigation::{inject_navigation, SamePartNavigator};
use chapterkit_core::text::{extract_title, normalize};
use chapterkit_core::{BookLayout, ChapterId};
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_draft() -> String {
    let mut draft = String::from("# Benchmark Chapter   \n\n\n\n");
    for i in 0..200 {
        draft.push_str(&format!("Paragraph {} with some trailing space.   \n\n\n", i));
    }
    draft
}

fn conversion_benchmark(c: &mut Criterion) {
    let draft = sample_draft();
    let layout = BookLayout::default();
    let id = ChapterId::new(2, 5);

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(std::hint::black_box(&draft)))
    });

    let cleaned = normalize(&draft);
    c.bench_function("pipeline", |b| {
        b.iter(|| {
            let title = extract_title(&cleaned).len();
            let doc = inject_navigation(&cleaned, id, &SamePartNavigator, &layout);
            std::hint::black_box((title, doc))
        })
    });
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
