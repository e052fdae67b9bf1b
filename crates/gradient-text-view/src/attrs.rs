//! Styleable attributes and the scoped handle used to read them.

use std::cell::Cell;

use gradient_text_graphics::{Color, DisplayMetrics, Dp, Sp};

use crate::markup::Element;

/// Attributes the gradient text widget reads from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientTextAttr {
    IsBold,
    IsItalic,
    IsGradient,
    IsCustomColor,
    StartColor,
    EndColor,
    Angle,
    EnableStroke,
    StrokeTint,
    StrokeSize,
}

impl GradientTextAttr {
    /// Name of the attribute in markup, without namespace prefix.
    pub fn name(self) -> &'static str {
        match self {
            GradientTextAttr::IsBold => "isBold",
            GradientTextAttr::IsItalic => "isItalic",
            GradientTextAttr::IsGradient => "isGradient",
            GradientTextAttr::IsCustomColor => "isCustomColor",
            GradientTextAttr::StartColor => "startColor",
            GradientTextAttr::EndColor => "endColor",
            GradientTextAttr::Angle => "angle",
            GradientTextAttr::EnableStroke => "enableStroke",
            GradientTextAttr::StrokeTint => "strokeTint",
            GradientTextAttr::StrokeSize => "strokeSize",
        }
    }
}

/// Raw attribute values as written in configuration, plus the display metrics
/// used to resolve dimensions.
///
/// Names are stored without their namespace prefix (`app:angle` becomes
/// `angle`). Values are read through [`AttributeSet::obtain_styled`].
#[derive(Debug, Default)]
pub struct AttributeSet {
    values: Vec<(String, String)>,
    metrics: DisplayMetrics,
    outstanding: Cell<usize>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: DisplayMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn from_element(element: &Element, metrics: DisplayMetrics) -> Self {
        let mut set = Self::with_metrics(metrics);
        for (name, value) in &element.attributes {
            set.insert(name, value);
        }
        set
    }

    /// Builder form of [`AttributeSet::insert`].
    ///
    /// Example: `AttributeSet::new().with("app:angle", "45")`
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Stores `value` under `name`, replacing an earlier value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = strip_namespace(name);
        let value = value.into();
        match self.values.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = strip_namespace(name);
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Acquires a read handle. The handle is released when it is recycled or
    /// dropped, whichever comes first.
    pub fn obtain_styled(&self) -> StyledAttributes<'_> {
        self.outstanding.set(self.outstanding.get() + 1);
        StyledAttributes { set: self }
    }

    /// Number of handles obtained and not yet released.
    pub fn outstanding_handles(&self) -> usize {
        self.outstanding.get()
    }

    fn release(&self) {
        self.outstanding.set(self.outstanding.get().saturating_sub(1));
    }
}

fn strip_namespace(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Typed, scoped view over an [`AttributeSet`].
///
/// Every getter falls back to the supplied default when the attribute is
/// missing or its value does not parse.
#[derive(Debug)]
pub struct StyledAttributes<'a> {
    set: &'a AttributeSet,
}

impl StyledAttributes<'_> {
    pub fn get_boolean(&self, attr: GradientTextAttr, default: bool) -> bool {
        self.read(attr, default, parse_boolean)
    }

    pub fn get_color(&self, attr: GradientTextAttr, default: Color) -> Color {
        self.read(attr, default, |raw| parse_color(raw).map(Color::from_argb))
    }

    pub fn get_int(&self, attr: GradientTextAttr, default: i32) -> i32 {
        self.read(attr, default, parse_int)
    }

    /// Dimension resolved to pixels.
    pub fn get_dimension(&self, attr: GradientTextAttr, default: f32) -> f32 {
        let metrics = self.set.metrics;
        self.read(attr, default, |raw| parse_dimension(raw, &metrics))
    }

    /// Releases the handle.
    pub fn recycle(self) {}

    fn read<T>(&self, attr: GradientTextAttr, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
        let Some(raw) = self.set.get(attr.name()) else {
            return default;
        };
        match parse(raw) {
            Some(value) => value,
            None => {
                log::warn!(
                    "ignoring malformed value {raw:?} for attribute {}",
                    attr.name()
                );
                default
            }
        }
    }
}

impl Drop for StyledAttributes<'_> {
    fn drop(&mut self) {
        self.set.release();
    }
}

pub fn parse_boolean(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses a decimal integer or a `0x` hexadecimal literal. Hex literals wrap
/// into `i32`, so `0xFFFFFFFF` is `-1`.
pub fn parse_int(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok().map(|value| value as i32),
        None => raw.parse().ok(),
    }
}

/// Parses `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` or an integer literal into a
/// packed `0xAARRGGBB` value. Forms without alpha are opaque.
pub fn parse_color(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let Some(hex) = raw.strip_prefix('#') else {
        return parse_int(raw).map(|value| value as u32);
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let expand = |nibble: u32| (nibble & 0xF) * 0x11;
    match hex.len() {
        3 => Some(
            0xFF00_0000 | (expand(value >> 8) << 16) | (expand(value >> 4) << 8) | expand(value),
        ),
        4 => Some(
            (expand(value >> 12) << 24)
                | (expand(value >> 8) << 16)
                | (expand(value >> 4) << 8)
                | expand(value),
        ),
        6 => Some(0xFF00_0000 | value),
        8 => Some(value),
        _ => None,
    }
}

/// Parses a dimension such as `12`, `4.5px`, `2dp`, `14sp` and resolves it to
/// pixels.
pub fn parse_dimension(raw: &str, metrics: &DisplayMetrics) -> Option<f32> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    let value: f32 = number.trim().parse().ok()?;
    let px = match unit {
        "" | "px" => value,
        "dp" | "dip" => metrics.dp_to_px(Dp(value)),
        "sp" => metrics.sp_to_px(Sp(value)),
        "pt" => metrics.pt_to_px(value),
        "in" => value * metrics.xdpi,
        "mm" => value * metrics.xdpi / 25.4,
        _ => return None,
    };
    Some(px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_prefix_is_stripped() {
        let attrs = AttributeSet::new().with("app:angle", "45");
        assert_eq!(attrs.get("angle"), Some("45"));
        assert_eq!(attrs.get("custom:angle"), Some("45"));
    }

    #[test]
    fn later_insert_replaces_value() {
        let mut attrs = AttributeSet::new().with("isBold", "false");
        attrs.insert("app:isBold", "true");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("isBold"), Some("true"));
    }

    #[test]
    fn handle_released_on_recycle() {
        let attrs = AttributeSet::new();
        let styled = attrs.obtain_styled();
        assert_eq!(attrs.outstanding_handles(), 1);
        styled.recycle();
        assert_eq!(attrs.outstanding_handles(), 0);
    }

    #[test]
    fn handle_released_on_unwind() {
        let attrs = AttributeSet::new().with("angle", "90");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let styled = attrs.obtain_styled();
            let angle = styled.get_int(GradientTextAttr::Angle, 0);
            assert_eq!(angle, 90);
            panic!("reading failed");
        }));
        assert!(result.is_err());
        assert_eq!(attrs.outstanding_handles(), 0);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let attrs = AttributeSet::new()
            .with("isBold", "yes")
            .with("angle", "ninety")
            .with("startColor", "#12345")
            .with("strokeSize", "3furlongs");
        let styled = attrs.obtain_styled();
        assert!(!styled.get_boolean(GradientTextAttr::IsBold, false));
        assert_eq!(styled.get_int(GradientTextAttr::Angle, 7), 7);
        assert_eq!(
            styled.get_color(GradientTextAttr::StartColor, Color::RED),
            Color::RED
        );
        assert_eq!(styled.get_dimension(GradientTextAttr::StrokeSize, 1.5), 1.5);
    }

    #[test]
    fn color_literal_forms() {
        assert_eq!(parse_color("#D29F2C"), Some(0xFFD29F2C));
        assert_eq!(parse_color("#80D29F2C"), Some(0x80D29F2C));
        assert_eq!(parse_color("#F0A"), Some(0xFFFF00AA));
        assert_eq!(parse_color("#8F0A"), Some(0x88FF00AA));
        assert_eq!(parse_color("0xFFFFFFFF"), Some(0xFFFFFFFF));
        assert_eq!(parse_color("-1"), Some(0xFFFFFFFF));
        assert_eq!(parse_color("#GG0000"), None);
        assert_eq!(parse_color("gold"), None);
    }

    #[test]
    fn int_literal_forms() {
        assert_eq!(parse_int(" -30 "), Some(-30));
        assert_eq!(parse_int("0x10"), Some(16));
        assert_eq!(parse_int("4.5"), None);
    }

    #[test]
    fn dimensions_resolve_with_density() {
        let metrics = DisplayMetrics::new(2.0, 3.0);
        assert_eq!(parse_dimension("10", &metrics), Some(10.0));
        assert_eq!(parse_dimension("10px", &metrics), Some(10.0));
        assert_eq!(parse_dimension("4dp", &metrics), Some(8.0));
        assert_eq!(parse_dimension("4dip", &metrics), Some(8.0));
        assert_eq!(parse_dimension("4sp", &metrics), Some(12.0));
        assert_eq!(parse_dimension("1in", &metrics), Some(320.0));
        assert_eq!(parse_dimension("2em", &metrics), None);
    }
}
