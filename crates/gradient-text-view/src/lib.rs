//! Gradient text label
//!
//! [`GradientTextView`] layers gradient fill, outline stroke and bold/italic
//! styling on top of a host text widget. The host is anything implementing
//! [`TextHost`]: it measures text, draws glyphs with a [`TextPaint`] and
//! receives layout/redraw requests.

mod attrs;
mod host;
mod markup;
mod paint;
mod style;
mod text;
mod view;

pub use attrs::*;
pub use host::*;
pub use markup::*;
pub use paint::*;
pub use style::*;
pub use text::*;
pub use view::*;

pub use gradient_text_graphics::{
    Brush, Color, DisplayMetrics, Dp, EdgeInsets, LinearGradient, Point, Size, Sp, TileMode,
    TypefaceStyle,
};
