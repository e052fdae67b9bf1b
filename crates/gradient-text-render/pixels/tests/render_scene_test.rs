use gradient_text_graphics::{DisplayMetrics, Point};
use gradient_text_render_pixels::{
    draw_scene, rasterize_text, CachedRusttypeTextMeasurer, CoverageMask, PixelsTextHost,
};
use gradient_text_view::{GradientTextView, PaintStyle};
use rusttype::Font;

const MARKUP: &str = r##"<GradientTextView
    android:text="HHHH"
    android:textSize="64px"
    app:startColor="#FFFF0000"
    app:endColor="#FF0000FF"
    app:angle="0"
    app:enableStroke="true"
    app:strokeTint="#FF00FF00"
    app:strokeSize="4px" />"##;
const WIDTH: u32 = 240;
const HEIGHT: u32 = 110;

fn test_measurer() -> CachedRusttypeTextMeasurer {
    let font = Font::try_from_bytes(include_bytes!("../../../../assets/DejaVuSans.ttf"))
        .expect("test font");
    CachedRusttypeTextMeasurer::new(font, 16)
}

fn pixel(frame: &[u8], x: i32, y: i32) -> [u8; 4] {
    let idx = ((y as u32 * WIDTH + x as u32) * 4) as usize;
    [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
}

/// Frame pixels with coverage of at least `threshold` in `mask`.
fn covered_pixels(mask: &CoverageMask, threshold: f32) -> Vec<(i32, i32)> {
    (0..mask.height as i32)
        .flat_map(|row| (0..mask.width as i32).map(move |col| (col, row)))
        .filter(|&(col, row)| mask.get(col, row) >= threshold)
        .map(|(col, row)| (mask.x + col, mask.y + row))
        .collect()
}

#[test]
fn markup_renders_stroke_under_gradient_fill() {
    let mut host = PixelsTextHost::new(test_measurer());
    host.set_origin(Point::new(12.0, 12.0));
    let mut view = GradientTextView::inflate(host, MARKUP, DisplayMetrics::default())
        .expect("markup parses");

    view.host_mut().begin_frame();
    view.on_draw();

    let host = view.host();
    let draws = host.scene().draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].paint.style, PaintStyle::Stroke);
    assert_eq!(draws[1].paint.style, PaintStyle::Fill);
    // Stroke padding of a 4px stroke is 2px on every side.
    assert_eq!(draws[1].origin, Point::new(14.0, 14.0));

    let mut frame = vec![255u8; (WIDTH * HEIGHT * 4) as usize];
    draw_scene(&mut frame, WIDTH, HEIGHT, host.scene(), host.measurer().font());

    let font = host.measurer().font();
    let fill = rasterize_text(&draws[1], font).expect("fill mask");
    let stroke = rasterize_text(&draws[0], font).expect("stroke mask");

    // Fully covered fill pixels show the gradient: start color on the left,
    // end color on the right.
    let solid = covered_pixels(&fill, 0.999);
    let leftmost = solid.iter().min_by_key(|(x, _)| *x).copied().expect("solid pixels");
    let rightmost = solid.iter().max_by_key(|(x, _)| *x).copied().expect("solid pixels");
    let [r, _, b, _] = pixel(&frame, leftmost.0, leftmost.1);
    assert!(r > 200 && b < 60, "left edge {r} {b}");
    let [r, _, b, _] = pixel(&frame, rightmost.0, rightmost.1);
    assert!(b > 200 && r < 60, "right edge {r} {b}");

    // Outside the glyphs the stroke band keeps its own color.
    let band = covered_pixels(&stroke, 0.999)
        .into_iter()
        .find(|&(x, y)| fill.get(x - fill.x, y - fill.y) == 0.0)
        .expect("stroke band outside fill");
    assert_eq!(pixel(&frame, band.0, band.1), [0, 255, 0, 255]);
}

#[test]
fn measured_size_fits_the_rendered_text() {
    let mut host = PixelsTextHost::new(test_measurer());
    host.set_origin(Point::new(12.0, 12.0));
    let mut view = GradientTextView::inflate(host, MARKUP, DisplayMetrics::default())
        .expect("markup parses");
    view.host_mut().begin_frame();
    view.on_draw();

    let host = view.host();
    let size = host.measure(view.paint());
    let font = host.measurer().font();
    for draw in host.scene().draws() {
        let mask = rasterize_text(draw, font).expect("mask");
        for (x, y) in covered_pixels(&mask, 0.5) {
            assert!(x as f32 >= 12.0 - 1.0 && (x as f32) < 12.0 + size.width + 1.0);
            assert!(y as f32 >= 12.0 - 1.0 && (y as f32) < 12.0 + size.height + 1.0);
        }
    }
}
