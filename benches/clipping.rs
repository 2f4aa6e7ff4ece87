use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectclip::prelude::*;
use rectclip::scene::DEMO_SHAPES;

fn unit_window() -> ClipWindow {
    ClipWindow::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)).unwrap()
}

fn inside_segment() -> Segment {
    Segment::new(Vec2::new(-0.5, -0.25), Vec2::new(0.75, 0.5))
}

fn crossing_segment() -> Segment {
    Segment::new(Vec2::new(-3.0, -2.0), Vec2::new(3.0, 2.0))
}

fn outside_segment() -> Segment {
    Segment::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0))
}

fn benchmark_single_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_segment");
    let window = unit_window();

    let cohen_sutherland = CohenSutherland::new();
    let liang_barsky = LiangBarsky::new();

    for (name, segment) in [
        ("inside", inside_segment()),
        ("crossing", crossing_segment()),
        ("outside", outside_segment()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("cohen_sutherland", name),
            &segment,
            |b, segment| b.iter(|| cohen_sutherland.clip_segment(black_box(segment), &window)),
        );

        group.bench_with_input(
            BenchmarkId::new("liang_barsky", name),
            &segment,
            |b, segment| b.iter(|| liang_barsky.clip_segment(black_box(segment), &window)),
        );
    }

    group.finish();
}

fn benchmark_segment_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_grid");
    let window = ClipWindow::centered(Vec2::ZERO, 0.3).unwrap();

    // Fan of 400 segments through and around the window
    let segments: Vec<Segment> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 0.1 - 1.0;
                let y = row as f32 * 0.1 - 1.0;
                Segment::new(Vec2::new(x, y), Vec2::new(-y, x))
            })
        })
        .collect();

    for algorithm in [LineAlgorithm::CohenSutherland, LineAlgorithm::LiangBarsky] {
        let clipper = LineClipperDispatcher::new(algorithm);
        group.bench_function(format!("{algorithm}_400_segments"), |b| {
            b.iter(|| {
                segments
                    .iter()
                    .filter_map(|s| clipper.clip_segment(black_box(s), &window))
                    .count()
            });
        });
    }

    group.finish();
}

fn benchmark_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygons");
    let window = ClipWindow::centered(Vec2::ZERO, 0.3).unwrap();
    let clipper = SutherlandHodgman::new();

    for (index, vertices) in DEMO_SHAPES.iter().enumerate().filter(|(_, v)| v.len() > 2) {
        group.bench_with_input(
            BenchmarkId::new("sutherland_hodgman", format!("shape{index}_{}v", vertices.len())),
            vertices,
            |b, vertices| b.iter(|| clipper.clip_polygon(black_box(vertices), &window)),
        );
    }

    group.finish();
}

fn benchmark_demo_frame(c: &mut Criterion) {
    let mut engine = ClipEngine::new();
    engine.load_demo_scene();

    c.bench_function("demo_frame", |b| {
        let mut step = 0u32;
        b.iter(|| {
            step = (step + 1) % 1600;
            let window =
                ClipWindow::around_cursor(step as f64, 450.0, 1600, 900, DEFAULT_HALF_EXTENT)
                    .unwrap();
            engine.update(&window).len()
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_segment,
    benchmark_segment_grid,
    benchmark_polygons,
    benchmark_demo_frame
);
criterion_main!(benches);
