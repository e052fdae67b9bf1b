use gradient_text_graphics::TypefaceStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

/// Measures text for a host. Implementations are shared between hosts, so they
/// must be thread-safe even though drawing happens on one thread.
pub trait TextMeasurer: Send + Sync + 'static {
    fn measure(&self, text: &str, text_size: f32, style: TypefaceStyle) -> TextMetrics;
}

/// Fallback measurer: every character advances by a fixed fraction of the
/// text size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    advance_ratio: f32,
}

impl MonospacedTextMeasurer {
    const DEFAULT_ADVANCE_RATIO: f32 = 0.5;
    const LINE_HEIGHT_RATIO: f32 = 1.25;

    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    pub fn char_width(&self, text_size: f32) -> f32 {
        text_size * self.advance_ratio
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, text_size: f32, _style: TypefaceStyle) -> TextMetrics {
        // Split by newlines to handle multiline
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);
        let char_width = self.char_width(text_size);
        let line_height = text_size * Self::LINE_HEIGHT_RATIO;

        // Width is the max width of any line
        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * char_width)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospaced_width_counts_chars_of_longest_line() {
        let measurer = MonospacedTextMeasurer::default();
        let metrics = measurer.measure("ab\nabcd", 20.0, TypefaceStyle::Normal);
        assert_eq!(metrics.width, 40.0);
        assert_eq!(metrics.line_count, 2);
        assert_eq!(metrics.height, 50.0);
    }

    #[test]
    fn empty_text_has_one_empty_line() {
        let measurer = MonospacedTextMeasurer::new(1.0);
        let metrics = measurer.measure("", 10.0, TypefaceStyle::Bold);
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.line_count, 1);
    }
}
