use criterion::{Criterion, criterion_group, criterion_main};
use markdown_prepass_text::{collapse_whitespace, is_punctuation, is_whitespace, prepare_line};

fn sample_lines() -> Vec<String> {
    (0..200)
        .map(|i| match i % 4 {
            0 => format!("## Heading {i} with some trailing spaces   "),
            1 => format!("\tindented code line {i} with a\tmid-line tab"),
            2 => format!("plain paragraph text number {i}, fairly typical length for prose"),
            _ => format!("> quoted line {i} with *emphasis* and `code`"),
        })
        .collect()
}

fn bench_prepare_line(c: &mut Criterion) {
    let lines = sample_lines();
    let mut group = c.benchmark_group("normalize");

    group.bench_function("prepare_line", |b| {
        b.iter(|| {
            for line in &lines {
                std::hint::black_box(prepare_line(std::hint::black_box(line)));
            }
        });
    });

    group.bench_function("collapse_whitespace", |b| {
        b.iter(|| {
            for line in &lines {
                std::hint::black_box(collapse_whitespace(std::hint::black_box(line)));
            }
        });
    });

    group.bench_function("classify_scan", |b| {
        b.iter(|| {
            let mut whitespace = 0usize;
            let mut punctuation = 0usize;
            for line in &lines {
                for ch in line.chars() {
                    if is_whitespace(ch) {
                        whitespace += 1;
                    } else if is_punctuation(ch) {
                        punctuation += 1;
                    }
                }
            }
            std::hint::black_box((whitespace, punctuation));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_prepare_line);
criterion_main!(benches);
