// Criterion benchmarks for taivutus-fi.
//
// Uses the golden verb list under tests/golden/ so the numbers are stable
// between runs.
//
// Run:
//   cargo bench -p taivutus-fi

use criterion::{Criterion, criterion_group, criterion_main};
use taivutus_fi::Conjugator;
use taivutus_fi::morphology::{classify, derive_stems, gradate};

fn load_wordlist() -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/verbs.txt");
    std::fs::read_to_string(&path)
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let words = load_wordlist();
    c.bench_function("classify_wordlist", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(classify(word));
            }
        });
    });
}

fn bench_stems(c: &mut Criterion) {
    let words = load_wordlist();
    c.bench_function("derive_stems_wordlist", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(derive_stems(word));
            }
        });
    });
    c.bench_function("gradate_geminate", |b| {
        b.iter(|| std::hint::black_box(gradate(std::hint::black_box("nukk"))));
    });
}

fn bench_conjugate(c: &mut Criterion) {
    let conjugator = Conjugator::new();
    let words = load_wordlist();

    c.bench_function("conjugate_single", |b| {
        b.iter(|| std::hint::black_box(conjugator.conjugate(std::hint::black_box("ajatella"))));
    });

    c.bench_function("conjugate_all_wordlist", |b| {
        b.iter(|| std::hint::black_box(conjugator.conjugate_all(&words)));
    });

    let doc = conjugator.conjugate_all(&words);
    c.bench_function("document_to_json", |b| {
        b.iter(|| std::hint::black_box(doc.to_json_pretty()));
    });
}

criterion_group!(benches, bench_classify, bench_stems, bench_conjugate);
criterion_main!(benches);
