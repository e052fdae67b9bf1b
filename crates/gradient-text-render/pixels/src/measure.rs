use lru::LruCache;
use rusttype::{point, Font, Scale};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use gradient_text_graphics::TypefaceStyle;
use gradient_text_view::{TextMeasurer, TextMetrics};

#[derive(Debug)]
pub enum FontError {
    InvalidFontData,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidFontData => write!(f, "font data could not be parsed"),
        }
    }
}

impl std::error::Error for FontError {}

#[derive(Clone)]
struct TextKey {
    text: Arc<str>,
}

impl PartialEq for TextKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.text, &other.text) || *self.text == *other.text
    }
}

impl Eq for TextKey {}

impl Hash for TextKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for TextKey {
    fn borrow(&self) -> &str {
        &self.text
    }
}

/// Metrics of one text at the sizes it was measured at most recently, keyed by
/// the bits of the size. Oldest first.
type SizedMetrics = Vec<(u32, TextMetrics)>;

/// Sizes remembered per text before the oldest is dropped.
const SIZES_PER_TEXT: usize = 4;

struct TextMetricsCache {
    map: LruCache<TextKey, SizedMetrics>,
}

impl TextMetricsCache {
    fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: LruCache::new(size),
        }
    }

    fn get_or_measure<F>(&mut self, text: &str, text_size: f32, measure: F) -> TextMetrics
    where
        F: FnOnce(&str) -> TextMetrics,
    {
        let size_bits = text_size.to_bits();
        if let Some(sized) = self.map.get_mut(text) {
            if let Some((_, metrics)) = sized.iter().find(|(bits, _)| *bits == size_bits) {
                log::trace!("text metrics cache hit for {text:?} at {text_size}px");
                return *metrics;
            }
            let metrics = measure(text);
            if sized.len() == SIZES_PER_TEXT {
                sized.remove(0);
            }
            sized.push((size_bits, metrics));
            return metrics;
        }
        let metrics = measure(text);
        self.map.put(
            TextKey {
                text: Arc::from(text),
            },
            vec![(size_bits, metrics)],
        );
        metrics
    }
}

/// Measures text with a `rusttype` font and keeps the most recent results in
/// an LRU cache keyed by text, with a few sizes per text.
///
/// Synthetic bold and italic do not change advances, so the typeface style is
/// not part of the key.
pub struct CachedRusttypeTextMeasurer {
    font: Font<'static>,
    cache: Mutex<TextMetricsCache>,
}

impl CachedRusttypeTextMeasurer {
    pub fn from_bytes(bytes: Vec<u8>, capacity: usize) -> Result<Self, FontError> {
        let font = Font::try_from_vec(bytes).ok_or(FontError::InvalidFontData)?;
        Ok(Self::new(font, capacity))
    }

    pub fn new(font: Font<'static>, capacity: usize) -> Self {
        Self {
            font,
            cache: Mutex::new(TextMetricsCache::new(capacity)),
        }
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    fn measure_uncached(&self, text: &str, text_size: f32) -> TextMetrics {
        let scale = Scale::uniform(text_size);
        let v_metrics = self.font.v_metrics(scale);
        let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| line_width(&self.font, line, scale))
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: lines.len() as f32 * line_height,
            line_height,
            line_count: lines.len(),
        }
    }
}

pub(crate) fn line_width(font: &Font<'_>, line: &str, scale: Scale) -> f32 {
    font.layout(line, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

impl TextMeasurer for CachedRusttypeTextMeasurer {
    fn measure(&self, text: &str, text_size: f32, _style: TypefaceStyle) -> TextMetrics {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_measure(text, text_size, |text| self.measure_uncached(text, text_size))
    }
}
