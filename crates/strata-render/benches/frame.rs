use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strata_calendar::{DayCounts, Source, fuse};
use strata_render::{FrameOptions, Palette, SvgOptions, render_frame, write_svg};

fn busy_year(end: NaiveDate, stride: i64) -> DayCounts {
    (0..365)
        .filter(|i| i % stride == 0)
        .map(|i| {
            let day = end - Duration::days(i);
            (day.format("%Y-%m-%d").to_string(), (i % 17) as u32 + 1)
        })
        .collect()
}

fn bench_full_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_year");
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let mut sources = HashMap::new();
    sources.insert(Source::GitHub, busy_year(end, 1));
    sources.insert(Source::Gitea, busy_year(end, 3));
    let opts = FrameOptions::default();

    group.bench_function("fuse_365", |b| {
        b.iter(|| black_box(fuse(&sources, end, 365).unwrap()))
    });
    let records = fuse(&sources, end, 365).unwrap();
    group.bench_function("render_frame_365", |b| {
        b.iter(|| black_box(render_frame(&records, &opts)))
    });
    let frame = render_frame(&records, &opts);
    group.bench_function("write_svg_365", |b| {
        b.iter(|| {
            black_box(write_svg(
                &frame,
                &records,
                &Palette::default(),
                &SvgOptions::default(),
            ))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_full_year);
criterion_main!(benches);
