use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zlog::fmt::{join_line, render_line};
use zlog::{CaptureOutput, Caller, ColorMode, Level, LevelLogger};

fn bench_filtered_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");

    let logger = LevelLogger::builder()
        .level(Level::Error)
        .output(CaptureOutput::new())
        .build();
    group.bench_function("global_threshold", |b| {
        b.iter(|| zlog::debugf!(logger: &logger, "value {}", black_box(42)));
    });

    let logger = LevelLogger::builder()
        .caller_level(Level::Silence, ["emit"])
        .caller_level(Level::Info, ["other::module"])
        .output(CaptureOutput::new())
        .build();
    group.bench_function("module_override", |b| {
        b.iter(|| zlog::errorf!(logger: &logger, "value {}", black_box(42)));
    });

    group.finish();
}

fn bench_emitted_call(c: &mut Criterion) {
    let output = CaptureOutput::new();
    let logger = LevelLogger::builder()
        .colors(ColorMode::Always)
        .output(output.clone())
        .build();

    c.bench_function("emitted_formatted", |b| {
        b.iter(|| {
            zlog::infof!(logger: &logger, "request {} took {}ms", black_box(7), black_box(12));
            let _ = output.take();
        });
    });
}

fn bench_caller_capture(c: &mut Criterion) {
    c.bench_function("caller!", |b| b.iter(|| black_box(zlog::caller!())));

    c.bench_function("Caller::new generic", |b| {
        b.iter(|| Caller::new(black_box("app::cache::Lru<alloc::string::String>::get")));
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("render_line", |b| {
        b.iter(|| render_line(black_box(Level::Warning), "net", "connect", "retrying", true));
    });

    let args: [&dyn std::fmt::Display; 3] = [&"cache", &"miss", &42];
    c.bench_function("join_line", |b| {
        b.iter(|| join_line(black_box(&args)));
    });
}

criterion_group!(
    benches,
    bench_filtered_call,
    bench_emitted_call,
    bench_caller_capture,
    bench_render
);
criterion_main!(benches);
