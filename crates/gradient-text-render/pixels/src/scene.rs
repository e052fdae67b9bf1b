use gradient_text_graphics::Point;
use gradient_text_view::TextPaint;

/// One base draw pass: the text, where its content box starts and the paint
/// the pass was issued with.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub origin: Point,
    pub text_size: f32,
    pub paint: TextPaint,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    draws: Vec<TextDraw>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }

    pub fn push(&mut self, draw: TextDraw) {
        self.draws.push(draw);
    }

    pub fn draws(&self) -> &[TextDraw] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}
