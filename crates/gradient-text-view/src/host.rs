use gradient_text_graphics::EdgeInsets;

use crate::paint::TextPaint;

/// Capabilities a host text widget supplies to [`crate::GradientTextView`].
///
/// The host owns the text content, the text size and the content padding, and
/// performs the actual glyph rasterization in [`TextHost::draw_text`].
pub trait TextHost {
    fn text(&self) -> Option<&str>;

    fn set_text(&mut self, text: Option<String>);

    /// Text size in pixels.
    fn text_size(&self) -> f32;

    fn set_text_size(&mut self, size: f32);

    /// Advance width of `text` in pixels when drawn with `paint`.
    fn measure_text(&self, text: &str, paint: &TextPaint) -> f32;

    fn padding(&self) -> EdgeInsets;

    /// Changes the content box. Hosts usually follow up with a layout pass.
    fn set_padding(&mut self, padding: EdgeInsets);

    /// Base glyph drawing routine: renders the current text with `paint`.
    fn draw_text(&mut self, paint: &TextPaint);

    fn request_layout(&mut self);

    /// Requests a redraw without a layout pass.
    fn invalidate(&mut self);
}
