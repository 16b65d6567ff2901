//! Benchmarks for WebVTT document parsing
//!
//! Generates synthetic documents programmatically so no fixture files are
//! needed. Complexity controls how many cue settings and payload lines each
//! cue carries.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::{fmt::Write, hint::black_box};
use vtt_core::parser::{timestamp::scan_timestamp, Document, ParserConfig};

/// Synthetic WebVTT document generator
struct DocumentGenerator {
    /// Number of region definitions before the first cue
    regions_count: usize,
    /// Number of cues to generate
    cues_count: usize,
    /// Complexity level for generated cues
    complexity_level: ComplexityLevel,
}

/// Cue complexity levels
#[derive(Debug, Clone, Copy)]
enum ComplexityLevel {
    /// Timing line and a single payload line
    Simple,
    /// Identifier, a few settings and two payload lines
    Moderate,
    /// Every cue setting, markup and comments between cues
    Complex,
}

impl DocumentGenerator {
    /// Create generator for simple documents
    const fn simple(cues_count: usize) -> Self {
        Self {
            regions_count: 0,
            cues_count,
            complexity_level: ComplexityLevel::Simple,
        }
    }

    /// Create generator for moderate documents
    const fn moderate(cues_count: usize) -> Self {
        Self {
            regions_count: 2,
            cues_count,
            complexity_level: ComplexityLevel::Moderate,
        }
    }

    /// Create generator for complex documents
    const fn complex(cues_count: usize) -> Self {
        Self {
            regions_count: 8,
            cues_count,
            complexity_level: ComplexityLevel::Complex,
        }
    }

    /// Generate the complete document
    fn generate(&self) -> String {
        let mut doc = String::with_capacity(64 + self.regions_count * 96 + self.cues_count * 128);
        doc.push_str("WEBVTT - Benchmark\nKind: captions\nLanguage: en\n\n");

        for i in 0..self.regions_count {
            let _ = writeln!(
                doc,
                "REGION\nid:region{i}\nwidth:40%\nlines:3\nregionanchor:0%,100%\nviewportanchor:10%,90%\nscroll:up\n"
            );
        }
        if self.regions_count > 0 {
            doc.push_str("STYLE\n::cue {\n  color: white;\n}\n\n");
        }

        for i in 0..self.cues_count {
            self.write_cue(&mut doc, i);
        }

        doc
    }

    /// Append cue number `index`, three seconds after the previous one
    fn write_cue(&self, doc: &mut String, index: usize) {
        let start = Self::format_time(index * 3000);
        let end = Self::format_time(index * 3000 + 2500);

        let _ = match self.complexity_level {
            ComplexityLevel::Simple => {
                writeln!(doc, "{start} --> {end}\nCaption number {index}\n")
            }
            ComplexityLevel::Moderate => writeln!(
                doc,
                "cue-{index}\n{start} --> {end} align:start line:-2 region:region{}\n\
                 Caption number {index}\nsecond line\n",
                index % self.regions_count.max(1)
            ),
            ComplexityLevel::Complex => writeln!(
                doc,
                "NOTE cue {index}\n\ncue-{index}\n{start} --> {end} vertical:rl line:10%,end \
                 position:25%,line-left size:50% align:middle region:region{}\n\
                 <v Speaker>Caption <b>number</b> {index}</v>\n<i>second</i> line\n",
                index % self.regions_count.max(1)
            ),
        };
    }

    /// Format milliseconds as `hh:mm:ss.ttt`
    fn format_time(millis: usize) -> String {
        let hours = millis / 3_600_000;
        let minutes = (millis % 3_600_000) / 60_000;
        let seconds = (millis % 60_000) / 1000;
        let fraction = millis % 1000;
        format!("{hours:02}:{minutes:02}:{seconds:02}.{fraction:03}")
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000, 5000] {
        let documents = [
            ("simple", DocumentGenerator::simple(size).generate()),
            ("moderate", DocumentGenerator::moderate(size).generate()),
            ("complex", DocumentGenerator::complex(size).generate()),
        ];

        for (name, text) in &documents {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), text, |b, text| {
                b.iter(|| black_box(Document::parse(black_box(text))));
            });
        }
    }

    group.finish();
}

fn bench_reader_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_source");
    let text = DocumentGenerator::moderate(1000).generate();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("from_reader", |b| {
        b.iter(|| black_box(Document::from_reader(black_box(text.as_bytes()))));
    });
    group.bench_function("with_line_limit", |b| {
        b.iter(|| {
            let config = ParserConfig::default().with_max_lines(1_000_000);
            black_box(Document::parse_with_config(black_box(&text), config))
        });
    });

    group.finish();
}

fn bench_timestamps(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamps");

    for (name, text) in [
        ("short", "00:35.123"),
        ("long", "12345:59:59.999"),
        ("invalid", "00:60.000"),
    ] {
        group.bench_with_input(BenchmarkId::new("scan", name), text, |b, text| {
            b.iter(|| {
                let mut position = 0;
                black_box(scan_timestamp(black_box(text), &mut position, 1))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_reader_source, bench_timestamps);
criterion_main!(benches);
