//! Testing utilities for the gradient text widget

mod recording_host;

pub use recording_host::*;
