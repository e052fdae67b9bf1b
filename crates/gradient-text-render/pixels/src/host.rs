use gradient_text_graphics::{EdgeInsets, Point, Size};
use gradient_text_view::{TextHost, TextMeasurer, TextPaint};

use crate::measure::CachedRusttypeTextMeasurer;
use crate::scene::{Scene, TextDraw};

const DEFAULT_TEXT_SIZE: f32 = 24.0;

/// [`TextHost`] that records draw passes into a [`Scene`] for
/// [`crate::draw_scene`].
///
/// Layout and redraw requests are latched as flags; the embedding loop takes
/// them once per frame.
pub struct PixelsTextHost<M: TextMeasurer = CachedRusttypeTextMeasurer> {
    text: Option<String>,
    text_size: f32,
    padding: EdgeInsets,
    origin: Point,
    measurer: M,
    scene: Scene,
    layout_requested: bool,
    redraw_requested: bool,
}

impl<M: TextMeasurer> PixelsTextHost<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            text: None,
            text_size: DEFAULT_TEXT_SIZE,
            padding: EdgeInsets::default(),
            origin: Point::ZERO,
            measurer,
            scene: Scene::new(),
            layout_requested: false,
            redraw_requested: false,
        }
    }

    /// Places the widget's top-left corner in frame coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.redraw_requested = true;
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Clears the scene before the widget draws the next frame.
    pub fn begin_frame(&mut self) {
        self.scene.clear();
    }

    /// Size of the widget: measured text plus padding.
    pub fn measure(&self, paint: &TextPaint) -> Size {
        let metrics = self.measurer.measure(
            self.text.as_deref().unwrap_or(""),
            self.text_size,
            paint.typeface_style,
        );
        Size::new(
            metrics.width + self.padding.horizontal_sum(),
            metrics.height + self.padding.vertical_sum(),
        )
    }

    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl<M: TextMeasurer> TextHost for PixelsTextHost<M> {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: Option<String>) {
        if self.text != text {
            self.text = text;
            self.layout_requested = true;
            self.redraw_requested = true;
        }
    }

    fn text_size(&self) -> f32 {
        self.text_size
    }

    fn set_text_size(&mut self, size: f32) {
        if self.text_size != size {
            self.text_size = size;
            self.layout_requested = true;
            self.redraw_requested = true;
        }
    }

    fn measure_text(&self, text: &str, paint: &TextPaint) -> f32 {
        self.measurer
            .measure(text, self.text_size, paint.typeface_style)
            .width
    }

    fn padding(&self) -> EdgeInsets {
        self.padding
    }

    fn set_padding(&mut self, padding: EdgeInsets) {
        if self.padding != padding {
            self.padding = padding;
            self.layout_requested = true;
        }
    }

    fn draw_text(&mut self, paint: &TextPaint) {
        let Some(text) = self.text.as_deref().filter(|text| !text.is_empty()) else {
            return;
        };
        self.scene.push(TextDraw {
            text: text.to_string(),
            origin: Point::new(
                self.origin.x + self.padding.left,
                self.origin.y + self.padding.top,
            ),
            text_size: self.text_size,
            paint: paint.clone(),
        });
    }

    fn request_layout(&mut self) {
        self.layout_requested = true;
        self.redraw_requested = true;
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }
}
