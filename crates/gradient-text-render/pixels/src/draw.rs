use rusttype::{point, Font, PositionedGlyph, Scale};

use gradient_text_graphics::{Color, Point};
use gradient_text_view::{PaintStyle, TextPaint};

use crate::scene::{Scene, TextDraw};

/// Horizontal shear per pixel of distance from the baseline for synthetic
/// italic.
const ITALIC_SKEW: f32 = 0.25;
/// Text size divided by this gives the extra horizontal smear of synthetic bold.
const BOLD_SMEAR_DIVISOR: f32 = 24.0;

/// Glyph coverage in `[0, 1]` for a rectangle of frame pixels starting at
/// (`x`, `y`).
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMask {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    data: Vec<f32>,
}

impl CoverageMask {
    pub fn new(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Coverage at mask-local coordinates; zero outside the mask.
    pub fn get(&self, col: i32, row: i32) -> f32 {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return 0.0;
        }
        self.data[row as usize * self.width + col as usize]
    }

    /// Raises coverage at mask-local coordinates to at least `value`.
    pub fn accumulate(&mut self, col: i32, row: i32, value: f32) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        let slot = &mut self.data[row as usize * self.width + col as usize];
        *slot = slot.max(value.clamp(0.0, 1.0));
    }

    pub fn dilate(&self, radius: i32) -> Self {
        self.filter(radius, f32::max, 0.0)
    }

    pub fn erode(&self, radius: i32) -> Self {
        self.filter(radius, f32::min, 1.0)
    }

    /// Band of width `2 * radius` centered on the glyph edges.
    pub fn outline(&self, radius: i32) -> Self {
        let grown = self.dilate(radius);
        let shrunk = self.erode(radius);
        let data = grown
            .data
            .iter()
            .zip(&shrunk.data)
            .map(|(outer, inner)| outer * (1.0 - inner))
            .collect();
        Self { data, ..grown }
    }

    fn filter(&self, radius: i32, combine: fn(f32, f32) -> f32, start: f32) -> Self {
        let offsets = disc_offsets(radius);
        let mut out = Self::new(self.x, self.y, self.width, self.height);
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let value = offsets
                    .iter()
                    .map(|(dx, dy)| self.get(col + dx, row + dy))
                    .fold(start, combine);
                out.data[row as usize * self.width + col as usize] = value;
            }
        }
        out
    }
}

fn disc_offsets(radius: i32) -> Vec<(i32, i32)> {
    let radius = radius.max(0);
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Rasterizes the glyph coverage of one draw pass, including synthetic
/// bold/italic and, for stroke passes, the outline band.
///
/// Returns `None` when no glyph has visible pixels.
pub fn rasterize_text(draw: &TextDraw, font: &Font<'_>) -> Option<CoverageMask> {
    let scale = Scale::uniform(draw.text_size);
    let v_metrics = font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;
    let style = draw.paint.typeface_style;

    let glyphs: Vec<(PositionedGlyph<'_>, f32)> = draw
        .text
        .split('\n')
        .enumerate()
        .flat_map(|(index, line)| {
            let baseline = draw.origin.y + v_metrics.ascent + index as f32 * line_height;
            font.layout(line, scale, point(draw.origin.x, baseline))
                .map(move |glyph| (glyph, baseline))
        })
        .collect();

    let italic = style.is_italic();
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (i32::MAX, i32::MAX, i32::MIN, i32::MIN);
    for (glyph, baseline) in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            // Rows below the baseline lean left, rows above it lean right.
            let (lean_left, lean_right) = if italic {
                (
                    italic_shear(*baseline, bb.max.y - 1),
                    italic_shear(*baseline, bb.min.y),
                )
            } else {
                (0, 0)
            };
            min_x = min_x.min(bb.min.x + lean_left.min(0));
            min_y = min_y.min(bb.min.y);
            max_x = max_x.max(bb.max.x + lean_right.max(0));
            max_y = max_y.max(bb.max.y);
        }
    }
    if min_x > max_x {
        return None;
    }

    let smear = if style.is_bold() {
        (draw.text_size / BOLD_SMEAR_DIVISOR).ceil() as i32
    } else {
        0
    };
    let stroke_radius = match draw.paint.style {
        PaintStyle::Stroke => ((draw.paint.stroke_width / 2.0).ceil() as i32).max(1),
        PaintStyle::Fill => 0,
    };
    let margin = stroke_radius + 1;
    let x0 = min_x - margin;
    let y0 = min_y - margin;
    let width = (max_x - min_x + smear + 2 * margin) as usize;
    let height = (max_y - min_y + 2 * margin) as usize;
    let mut mask = CoverageMask::new(x0, y0, width, height);

    for (glyph, baseline) in &glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = bb.min.x + gx as i32;
            let py = bb.min.y + gy as i32;
            let shear = if italic {
                italic_shear(*baseline, py)
            } else {
                0
            };
            for extra in 0..=smear {
                mask.accumulate(px + shear + extra - x0, py - y0, coverage);
            }
        });
    }

    if stroke_radius > 0 {
        mask = mask.outline(stroke_radius);
    }
    Some(mask)
}

fn italic_shear(baseline: f32, row: i32) -> i32 {
    ((baseline - row as f32) * ITALIC_SKEW).round() as i32
}

fn color_to_rgba(color: Color) -> [f32; 4] {
    [
        color.0.clamp(0.0, 1.0),
        color.1.clamp(0.0, 1.0),
        color.2.clamp(0.0, 1.0),
        color.3.clamp(0.0, 1.0),
    ]
}

/// Blends `mask` into an RGBA8 frame with the paint's shader, or its flat
/// color when no shader is attached.
///
/// Shader coordinates are relative to `origin`, the content box corner the
/// text was laid out from.
pub fn paint_mask(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mask: &CoverageMask,
    paint: &TextPaint,
    origin: Point,
) {
    let brush = paint.brush();
    for row in 0..mask.height as i32 {
        for col in 0..mask.width as i32 {
            let coverage = mask.get(col, row);
            if coverage <= 0.0 {
                continue;
            }
            let px = mask.x + col;
            let py = mask.y + row;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                continue;
            }
            let color = brush.color_at(Point::new(
                px as f32 + 0.5 - origin.x,
                py as f32 + 0.5 - origin.y,
            ));
            let rgba = color_to_rgba(color);
            let alpha = rgba[3] * coverage;
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            let Some(existing) = frame.get_mut(idx..idx + 4) else {
                continue;
            };
            for i in 0..3 {
                let dst = existing[i] as f32 / 255.0;
                let blended = (rgba[i] * alpha) + dst * (1.0 - alpha);
                existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
            let dst_alpha = existing[3] as f32 / 255.0;
            let out_alpha = alpha + dst_alpha * (1.0 - alpha);
            existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
}

/// Rasterizes every recorded pass, in order, into an RGBA8 frame.
pub fn draw_scene(frame: &mut [u8], width: u32, height: u32, scene: &Scene, font: &Font<'_>) {
    for draw in scene.draws() {
        match rasterize_text(draw, font) {
            Some(mask) => paint_mask(frame, width, height, &mask, &draw.paint, draw.origin),
            None => log::trace!("nothing to rasterize for {:?}", draw.text),
        }
    }
}
