//! Brush definitions for painting (solid colors, linear gradients)

use crate::color::Color;
use crate::geometry::Point;

/// How a gradient fills the plane beyond its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    /// Hold the nearest endpoint's color.
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

impl TileMode {
    fn apply(self, t: f32) -> f32 {
        match self {
            TileMode::Clamp => t.clamp(0.0, 1.0),
            TileMode::Repeat => t - t.floor(),
            TileMode::Mirror => {
                let wrapped = t.rem_euclid(2.0);
                if wrapped > 1.0 {
                    2.0 - wrapped
                } else {
                    wrapped
                }
            }
        }
    }
}

/// A gradient along the axis from `start` to `end`.
///
/// `positions`, when present, holds one offset in `[0, 1]` per color. `None`
/// spreads the colors evenly along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub colors: Vec<Color>,
    pub positions: Option<Vec<f32>>,
    pub tile_mode: TileMode,
}

impl LinearGradient {
    pub fn new(
        start: Point,
        end: Point,
        colors: Vec<Color>,
        positions: Option<Vec<f32>>,
        tile_mode: TileMode,
    ) -> Self {
        Self {
            start,
            end,
            colors,
            positions,
            tile_mode,
        }
    }

    /// Projects `point` onto the gradient axis and returns the interpolated color.
    ///
    /// A zero-length axis paints every point with the last color.
    pub fn color_at(&self, point: Point) -> Color {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let length_sq = dx * dx + dy * dy;
        let t = if length_sq <= f32::EPSILON {
            1.0
        } else {
            ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / length_sq
        };
        self.color_at_offset(self.tile_mode.apply(t))
    }

    fn color_at_offset(&self, t: f32) -> Color {
        let colors = &self.colors;
        match colors.len() {
            0 => return Color::TRANSPARENT,
            1 => return colors[0],
            _ => {}
        }

        let positions = match &self.positions {
            Some(positions) if positions.len() == colors.len() => positions,
            _ => return interpolate_even(colors, t),
        };

        if t <= positions[0] {
            return colors[0];
        }
        for index in 0..positions.len() - 1 {
            let (lo, hi) = (positions[index], positions[index + 1]);
            if t <= hi {
                let span = hi - lo;
                let frac = if span <= f32::EPSILON {
                    1.0
                } else {
                    (t - lo) / span
                };
                return colors[index].lerp(colors[index + 1], frac);
            }
        }
        colors[colors.len() - 1]
    }
}

fn interpolate_even(colors: &[Color], t: f32) -> Color {
    let segments = (colors.len() - 1) as f32;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let index = scaled.floor() as usize;
    if index >= colors.len() - 1 {
        return colors[colors.len() - 1];
    }
    colors[index].lerp(colors[index + 1], scaled - index as f32)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Brush {
    /// Color of the brush at `point`, in the brush's own coordinate space.
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::LinearGradient(gradient) => gradient.color_at(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(tile_mode: TileMode) -> LinearGradient {
        LinearGradient::new(
            Point::ZERO,
            Point::new(100.0, 0.0),
            vec![Color::BLACK, Color::WHITE],
            None,
            tile_mode,
        )
    }

    #[test]
    fn clamp_holds_endpoint_colors() {
        let gradient = horizontal(TileMode::Clamp);
        assert_eq!(gradient.color_at(Point::new(-50.0, 0.0)), Color::BLACK);
        assert_eq!(gradient.color_at(Point::new(250.0, 0.0)), Color::WHITE);
    }

    #[test]
    fn midpoint_is_even_blend() {
        let gradient = horizontal(TileMode::Clamp);
        let mid = gradient.color_at(Point::new(50.0, 10.0));
        assert!((mid.r() - 0.5).abs() < 1e-5);
        assert!((mid.a() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn repeat_and_mirror_wrap() {
        let repeat = horizontal(TileMode::Repeat);
        let c = repeat.color_at(Point::new(125.0, 0.0));
        assert!((c.r() - 0.25).abs() < 1e-5);

        let mirror = horizontal(TileMode::Mirror);
        let c = mirror.color_at(Point::new(125.0, 0.0));
        assert!((c.r() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn explicit_positions_shift_the_blend() {
        let gradient = LinearGradient::new(
            Point::ZERO,
            Point::new(100.0, 0.0),
            vec![Color::BLACK, Color::WHITE],
            Some(vec![0.5, 1.0]),
            TileMode::Clamp,
        );
        assert_eq!(gradient.color_at(Point::new(25.0, 0.0)), Color::BLACK);
        let c = gradient.color_at(Point::new(75.0, 0.0));
        assert!((c.r() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn degenerate_axis_paints_last_color() {
        let gradient = LinearGradient::new(
            Point::ZERO,
            Point::ZERO,
            vec![Color::RED, Color::BLUE],
            None,
            TileMode::Clamp,
        );
        assert_eq!(gradient.color_at(Point::new(3.0, 4.0)), Color::BLUE);
    }
}
