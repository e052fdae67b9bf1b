//! Typography data structures (typeface styles)

/// Style applied to a typeface: the four weight/slant combinations a text
/// label can request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypefaceStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl TypefaceStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, TypefaceStyle::Bold | TypefaceStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, TypefaceStyle::Italic | TypefaceStyle::BoldItalic)
    }
}
