use std::cell::Cell;

use gradient_text_graphics::EdgeInsets;
use gradient_text_view::{MonospacedTextMeasurer, TextHost, TextMeasurer, TextPaint};

/// A host call observed by [`RecordingHost`], in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    SetText(Option<String>),
    SetTextSize(f32),
    SetPadding(EdgeInsets),
    /// A base draw pass with the paint as it was at the time of the call.
    Draw(TextPaint),
    RequestLayout,
    Invalidate,
}

/// [`TextHost`] test double that measures with a monospaced advance and records
/// every mutating call.
#[derive(Debug)]
pub struct RecordingHost {
    text: Option<String>,
    text_size: f32,
    padding: EdgeInsets,
    measurer: MonospacedTextMeasurer,
    calls: Vec<HostCall>,
    measure_count: Cell<usize>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub const DEFAULT_TEXT_SIZE: f32 = 20.0;

    pub fn new() -> Self {
        Self {
            text: None,
            text_size: Self::DEFAULT_TEXT_SIZE,
            padding: EdgeInsets::default(),
            measurer: MonospacedTextMeasurer::default(),
            calls: Vec::new(),
            measure_count: Cell::new(0),
        }
    }

    /// Starts with `text` already set, without recording a call.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::new()
        }
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.measure_count.set(0);
    }

    /// Paints passed to every draw pass so far.
    pub fn draws(&self) -> Vec<&TextPaint> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Draw(paint) => Some(paint),
                _ => None,
            })
            .collect()
    }

    pub fn layout_requests(&self) -> usize {
        self.count(|call| matches!(call, HostCall::RequestLayout))
    }

    pub fn invalidations(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Invalidate))
    }

    pub fn measure_count(&self) -> usize {
        self.measure_count.get()
    }

    fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl TextHost for RecordingHost {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: Option<String>) {
        self.calls.push(HostCall::SetText(text.clone()));
        self.text = text;
    }

    fn text_size(&self) -> f32 {
        self.text_size
    }

    fn set_text_size(&mut self, size: f32) {
        self.calls.push(HostCall::SetTextSize(size));
        self.text_size = size;
    }

    fn measure_text(&self, text: &str, paint: &TextPaint) -> f32 {
        self.measure_count.set(self.measure_count.get() + 1);
        self.measurer
            .measure(text, self.text_size, paint.typeface_style)
            .width
    }

    fn padding(&self) -> EdgeInsets {
        self.padding
    }

    fn set_padding(&mut self, padding: EdgeInsets) {
        self.calls.push(HostCall::SetPadding(padding));
        self.padding = padding;
    }

    fn draw_text(&mut self, paint: &TextPaint) {
        self.calls.push(HostCall::Draw(paint.clone()));
    }

    fn request_layout(&mut self) {
        self.calls.push(HostCall::RequestLayout);
    }

    fn invalidate(&mut self) {
        self.calls.push(HostCall::Invalidate);
    }
}
