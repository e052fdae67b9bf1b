use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradient_text_testing::RecordingHost;
use gradient_text_view::{Color, GradientTextView, StyleState};

const TEXT_LENGTH_SAMPLES: &[usize] = &[8, 64, 512];

fn sample_text(len: usize) -> String {
    "Gradient".chars().cycle().take(len).collect()
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("enable_text_gradient");
    for &len in TEXT_LENGTH_SAMPLES {
        group.bench_with_input(BenchmarkId::new("chars", len), &len, |b, &len| {
            let text = sample_text(len);
            let mut view = GradientTextView::new(RecordingHost::with_text(&text));
            b.iter(|| {
                view.enable_text_gradient(Some(black_box(text.as_str())));
                view.host_mut().clear_calls();
            });
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("on_draw");
    for (label, enable_stroke) in [("fill", false), ("stroke_and_fill", true)] {
        group.bench_function(label, |b| {
            let style = StyleState {
                enable_stroke,
                stroke_width: 6.0,
                stroke_color: Color::BLACK,
                angle: 45,
                ..StyleState::default()
            };
            let mut view = GradientTextView::with_style(
                RecordingHost::with_text(&sample_text(64)),
                style,
            );
            b.iter(|| {
                view.on_draw();
                black_box(view.paint());
                view.host_mut().clear_calls();
            });
        });
    }
    group.finish();
}

criterion_group!(draw_pass, bench_gradient, bench_draw);
criterion_main!(draw_pass);
