use gradient_text_graphics::{Color, TypefaceStyle};

use crate::attrs::{AttributeSet, GradientTextAttr};

pub const DEFAULT_START_COLOR: Color = Color::from_argb(0xFFD29F2C);
pub const DEFAULT_END_COLOR: Color = Color::from_argb(0xFFEBD355);
pub const DEFAULT_STROKE_COLOR: Color = Color::WHITE;

/// Styling state owned by a gradient text widget.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleState {
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_gradient: bool,
    /// Parsed from configuration, not consulted when drawing.
    pub is_custom_color: bool,
    pub start_color: Color,
    pub end_color: Color,
    /// Gradient direction in degrees. Any value is accepted.
    pub angle: i32,
    pub enable_stroke: bool,
    pub stroke_color: Color,
    /// Outline width in pixels.
    pub stroke_width: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            is_bold: false,
            is_italic: false,
            is_gradient: true,
            is_custom_color: false,
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
            angle: 0,
            enable_stroke: false,
            stroke_color: DEFAULT_STROKE_COLOR,
            stroke_width: 0.0,
        }
    }
}

impl StyleState {
    /// Reads every styleable attribute, falling back to the defaults above.
    pub fn from_attributes(attrs: &AttributeSet) -> Self {
        let styled = attrs.obtain_styled();
        let defaults = Self::default();
        let state = Self {
            is_bold: styled.get_boolean(GradientTextAttr::IsBold, defaults.is_bold),
            is_italic: styled.get_boolean(GradientTextAttr::IsItalic, defaults.is_italic),
            is_gradient: styled.get_boolean(GradientTextAttr::IsGradient, defaults.is_gradient),
            is_custom_color: styled
                .get_boolean(GradientTextAttr::IsCustomColor, defaults.is_custom_color),
            start_color: styled.get_color(GradientTextAttr::StartColor, defaults.start_color),
            end_color: styled.get_color(GradientTextAttr::EndColor, defaults.end_color),
            angle: styled.get_int(GradientTextAttr::Angle, defaults.angle),
            enable_stroke: styled
                .get_boolean(GradientTextAttr::EnableStroke, defaults.enable_stroke),
            stroke_color: styled.get_color(GradientTextAttr::StrokeTint, defaults.stroke_color),
            stroke_width: styled.get_dimension(GradientTextAttr::StrokeSize, defaults.stroke_width),
        };
        styled.recycle();
        state
    }

    pub fn typeface_style(&self) -> TypefaceStyle {
        typeface_style(self.is_bold, self.is_italic)
    }
}

/// Typeface style for a bold/italic flag pair.
pub fn typeface_style(bold: bool, italic: bool) -> TypefaceStyle {
    match (bold, italic) {
        (true, true) => TypefaceStyle::BoldItalic,
        (true, false) => TypefaceStyle::Bold,
        (false, true) => TypefaceStyle::Italic,
        (false, false) => TypefaceStyle::Normal,
    }
}
