//! Unit types: Dp, Sp and the display metrics that resolve them to pixels

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

/// Screen metrics used to resolve dimension values to pixels.
///
/// `scaled_density` is `density * font_scale`; `xdpi` is the horizontal
/// physical density used by the absolute units (`pt`, `in`, `mm`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    pub density: f32,
    pub scaled_density: f32,
    pub xdpi: f32,
}

impl DisplayMetrics {
    pub const fn new(density: f32, scaled_density: f32) -> Self {
        Self {
            density,
            scaled_density,
            xdpi: 160.0 * density,
        }
    }

    pub fn dp_to_px(&self, dp: Dp) -> f32 {
        dp.0 * self.density
    }

    pub fn sp_to_px(&self, sp: Sp) -> f32 {
        sp.0 * self.scaled_density
    }

    /// Typographic points, 1/72 inch.
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.xdpi / 72.0
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
