//! CPU pixel host for the gradient text widget
//!
//! [`PixelsTextHost`] records every base draw pass of a
//! [`gradient_text_view::GradientTextView`] into a [`Scene`];
//! [`draw_scene`] rasterizes that scene into an RGBA8 frame with `rusttype`.

mod draw;
mod host;
mod measure;
pub mod scene;

pub use draw::{draw_scene, paint_mask, rasterize_text, CoverageMask};
pub use host::PixelsTextHost;
pub use measure::{CachedRusttypeTextMeasurer, FontError};
pub use scene::{Scene, TextDraw};
