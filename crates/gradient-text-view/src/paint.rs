use gradient_text_graphics::{Brush, Color, LinearGradient, TypefaceStyle};

/// Whether glyphs are filled or only outlined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Fill strategy attached to a paint in place of its flat color.
#[derive(Clone, Debug, PartialEq)]
pub enum Shader {
    Linear(LinearGradient),
}

impl Shader {
    pub fn as_linear(&self) -> Option<&LinearGradient> {
        match self {
            Shader::Linear(gradient) => Some(gradient),
        }
    }
}

/// Paint state shared by every draw pass of a text widget.
///
/// A draw routine takes it by `&mut`, changes what a pass needs and restores
/// the fields the next pass depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPaint {
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub color: Color,
    pub shader: Option<Shader>,
    pub typeface_style: TypefaceStyle,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            color: Color::BLACK,
            shader: None,
            typeface_style: TypefaceStyle::Normal,
        }
    }
}

impl TextPaint {
    /// The brush a host should paint glyph coverage with: the shader when one
    /// is attached, the flat color otherwise.
    pub fn brush(&self) -> Brush {
        match &self.shader {
            Some(Shader::Linear(gradient)) => Brush::LinearGradient(gradient.clone()),
            None => Brush::Solid(self.color),
        }
    }

    pub fn linear_gradient(&self) -> Option<&LinearGradient> {
        self.shader.as_ref().and_then(Shader::as_linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_text_graphics::{Point, TileMode};

    #[test]
    fn brush_prefers_shader_over_color() {
        let mut paint = TextPaint {
            color: Color::RED,
            ..TextPaint::default()
        };
        assert_eq!(paint.brush(), Brush::Solid(Color::RED));

        let gradient = LinearGradient::new(
            Point::ZERO,
            Point::new(10.0, 0.0),
            vec![Color::BLACK, Color::WHITE],
            None,
            TileMode::Clamp,
        );
        paint.shader = Some(Shader::Linear(gradient.clone()));
        assert_eq!(paint.brush(), Brush::LinearGradient(gradient.clone()));
        assert_eq!(paint.linear_gradient(), Some(&gradient));
        assert_eq!(paint.brush().color_at(Point::new(20.0, 0.0)), Color::WHITE);
    }
}
