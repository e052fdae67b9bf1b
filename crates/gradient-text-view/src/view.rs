use gradient_text_graphics::{Color, DisplayMetrics, EdgeInsets, LinearGradient, Point, TileMode};

use crate::attrs::{parse_dimension, AttributeSet};
use crate::host::TextHost;
use crate::markup::{parse_markup, MarkupError};
use crate::paint::{PaintStyle, Shader, TextPaint};
use crate::style::StyleState;

/// Text label that fills its glyphs with a two-color linear gradient and can
/// outline them with a solid stroke.
///
/// Rendering is delegated to the wrapped [`TextHost`]; the view only decides
/// how the shared [`TextPaint`] is configured for each pass.
pub struct GradientTextView<H: TextHost> {
    host: H,
    paint: TextPaint,
    style: StyleState,
}

impl<H: TextHost> GradientTextView<H> {
    /// Creates a view with every attribute at its default.
    pub fn new(host: H) -> Self {
        Self::with_style(host, StyleState::default())
    }

    /// Creates a view from declarative attributes.
    pub fn with_attributes(host: H, attrs: &AttributeSet) -> Self {
        Self::with_style(host, StyleState::from_attributes(attrs))
    }

    /// Creates a view from an explicit style.
    ///
    /// The typeface style is applied right away and, when the gradient is
    /// enabled, the shader is computed from whatever text the host holds.
    pub fn with_style(host: H, style: StyleState) -> Self {
        let mut view = Self {
            host,
            paint: TextPaint::default(),
            style,
        };
        view.apply_typeface();
        if view.style.is_gradient {
            view.enable_host_text_gradient();
        }
        view
    }

    /// Parses a markup element and creates a view from its attributes.
    ///
    /// `text` and `textSize` (in any namespace) are forwarded to the host
    /// before the styling attributes are applied.
    ///
    /// Example: `GradientTextView::inflate(host, r#"<GradientTextView android:text="Hi" app:angle="90"/>"#, metrics)`
    pub fn inflate(mut host: H, markup: &str, metrics: DisplayMetrics) -> Result<Self, MarkupError> {
        let element = parse_markup(markup)?;
        let attrs = AttributeSet::from_element(&element, metrics);
        if let Some(text) = attrs.get("text") {
            host.set_text(Some(text.to_string()));
        }
        if let Some(raw) = attrs.get("textSize") {
            match parse_dimension(raw, &metrics) {
                Some(size) => host.set_text_size(size),
                None => log::warn!("ignoring malformed textSize {raw:?}"),
            }
        }
        Ok(Self::with_attributes(host, &attrs))
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Direct access to the style fields. Changes made here take effect on
    /// the next gradient computation or draw; nothing is invalidated.
    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    pub fn paint_mut(&mut self) -> &mut TextPaint {
        &mut self.paint
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn set_bold(&mut self, enabled: bool) {
        self.style.is_bold = enabled;
        self.apply_typeface();
        self.host.request_layout();
    }

    pub fn set_italic(&mut self, enabled: bool) {
        self.style.is_italic = enabled;
        self.apply_typeface();
        self.host.request_layout();
    }

    /// Toggles the gradient fill.
    ///
    /// Enabling recomputes the shader. Disabling leaves an attached shader in
    /// place. A layout pass is requested either way.
    pub fn set_gradient_enabled(&mut self, enabled: bool) {
        self.style.is_gradient = enabled;
        if self.style.is_gradient {
            self.enable_host_text_gradient();
        }
        self.host.request_layout();
    }

    pub fn set_gradient_colors(&mut self, start: Color, end: Color) {
        self.style.start_color = start;
        self.style.end_color = end;
        self.host.invalidate();
    }

    pub fn set_angle(&mut self, degrees: i32) {
        self.style.angle = degrees;
        self.host.invalidate();
    }

    pub fn set_stroke(&mut self, enabled: bool, color: Color, width: f32) {
        self.style.enable_stroke = enabled;
        self.style.stroke_color = color;
        self.style.stroke_width = width;
        self.host.invalidate();
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.host.set_text(text);
        if self.style.is_gradient {
            self.enable_host_text_gradient();
        }
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.host.set_text_size(size);
        if self.style.is_gradient {
            self.enable_host_text_gradient();
        }
    }

    /// Draws one frame.
    ///
    /// With the stroke enabled this runs two host passes: an outline pass with
    /// a solid stroke paint and a fill pass with the gradient reattached.
    pub fn on_draw(&mut self) {
        if self.style.enable_stroke {
            let padding = stroke_padding(self.style.stroke_width) as f32;
            self.host.set_padding(EdgeInsets::uniform(padding));

            let fill_color = self.paint.color;
            self.paint.style = PaintStyle::Stroke;
            self.paint.stroke_width = self.style.stroke_width;
            self.paint.color = self.style.stroke_color;
            self.paint.shader = None;
            log::debug!(
                "stroke pass: width {} padding {padding}",
                self.style.stroke_width
            );
            self.host.draw_text(&self.paint);

            self.paint.style = PaintStyle::Fill;
            self.paint.color = fill_color;
            if self.style.is_gradient {
                self.enable_host_text_gradient();
            }
        }

        self.host.draw_text(&self.paint);
    }

    /// Attaches a gradient shader sized to `text`.
    ///
    /// Does nothing for `None` or empty text.
    pub fn enable_text_gradient(&mut self, text: Option<&str>) {
        let width = match text {
            Some(text) if !text.is_empty() => self.host.measure_text(text, &self.paint),
            _ => return,
        };
        self.attach_gradient(width);
    }

    fn enable_host_text_gradient(&mut self) {
        let width = match self.host.text() {
            Some(text) if !text.is_empty() => self.host.measure_text(text, &self.paint),
            _ => return,
        };
        self.attach_gradient(width);
    }

    fn attach_gradient(&mut self, width: f32) {
        let end = gradient_end_point(width, self.host.text_size(), self.style.angle);
        log::debug!(
            "gradient recomputed: width {width} angle {} end ({}, {})",
            self.style.angle,
            end.x,
            end.y
        );
        self.paint.shader = Some(Shader::Linear(LinearGradient::new(
            Point::ZERO,
            end,
            vec![self.style.start_color, self.style.end_color],
            None,
            TileMode::Clamp,
        )));
        self.apply_typeface();
        self.host.invalidate();
    }

    fn apply_typeface(&mut self) {
        self.paint.typeface_style = self.style.typeface_style();
    }
}

/// End point of a gradient starting at the origin: the text width scaled by
/// the cosine of the angle horizontally, the text size by its sine vertically.
pub fn gradient_end_point(text_width: f32, text_size: f32, angle_degrees: i32) -> Point {
    let radians = f64::from(angle_degrees).to_radians();
    Point::new(
        (f64::from(text_width) * radians.cos()) as f32,
        (f64::from(text_size) * radians.sin()) as f32,
    )
}

/// Uniform padding that keeps a stroke of `stroke_width` inside the content
/// box: the integer part of the width, halved.
pub fn stroke_padding(stroke_width: f32) -> i32 {
    stroke_width as i32 / 2
}
