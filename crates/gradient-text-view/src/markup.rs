//! Declarative markup for a single widget element.
//!
//! Accepts one element, self-closing or with an empty body:
//!
//! ```text
//! <GradientTextView android:text="Gold" app:angle="45" app:strokeSize="2dp" />
//! ```

use std::fmt;

/// A parsed element: tag name plus attributes in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupError {
    UnexpectedEnd,
    UnexpectedChar { found: char, offset: usize },
    DuplicateAttribute { name: String },
    UnterminatedValue { offset: usize },
    InvalidEntity { offset: usize },
    MismatchedClosingTag { expected: String, found: String },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::UnexpectedEnd => write!(f, "unexpected end of markup"),
            MarkupError::UnexpectedChar { found, offset } => {
                write!(f, "unexpected character {found:?} at offset {offset}")
            }
            MarkupError::DuplicateAttribute { name } => {
                write!(f, "attribute {name} specified more than once")
            }
            MarkupError::UnterminatedValue { offset } => {
                write!(f, "attribute value starting at offset {offset} is not terminated")
            }
            MarkupError::InvalidEntity { offset } => {
                write!(f, "invalid character entity at offset {offset}")
            }
            MarkupError::MismatchedClosingTag { expected, found } => {
                write!(f, "closing tag </{found}> does not match <{expected}>")
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Parses a single markup element.
pub fn parse_markup(input: &str) -> Result<Element, MarkupError> {
    let mut parser = Parser { input, pos: 0 };
    parser.skip_whitespace();
    parser.expect('<')?;
    let tag = parser.name()?;
    let mut attributes: Vec<(String, String)> = Vec::new();

    loop {
        let had_space = parser.skip_whitespace();
        match parser.peek() {
            None => return Err(MarkupError::UnexpectedEnd),
            Some('/') => {
                parser.bump();
                parser.expect('>')?;
                break;
            }
            Some('>') => {
                parser.bump();
                parser.closing_tag(&tag)?;
                break;
            }
            Some(found) if !had_space => {
                return Err(MarkupError::UnexpectedChar {
                    found,
                    offset: parser.pos,
                })
            }
            Some(_) => {
                let name = parser.name()?;
                parser.skip_whitespace();
                parser.expect('=')?;
                parser.skip_whitespace();
                let value = parser.quoted_value()?;
                if attributes.iter().any(|(key, _)| *key == name) {
                    return Err(MarkupError::DuplicateAttribute { name });
                }
                attributes.push((name, value));
            }
        }
    }

    parser.skip_whitespace();
    if let Some(found) = parser.peek() {
        return Err(MarkupError::UnexpectedChar {
            found,
            offset: parser.pos,
        });
    }
    Ok(Element { tag, attributes })
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
        self.pos > start
    }

    fn expect(&mut self, expected: char) -> Result<(), MarkupError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(MarkupError::UnexpectedChar {
                found,
                offset: self.pos,
            }),
            None => Err(MarkupError::UnexpectedEnd),
        }
    }

    fn name(&mut self) -> Result<String, MarkupError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.bump();
            }
            Some(found) => {
                return Err(MarkupError::UnexpectedChar {
                    found,
                    offset: self.pos,
                })
            }
            None => return Err(MarkupError::UnexpectedEnd),
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
        {
            self.bump();
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn quoted_value(&mut self) -> Result<String, MarkupError> {
        let quote = match self.peek() {
            Some(c @ ('"' | '\'')) => c,
            Some(found) => {
                return Err(MarkupError::UnexpectedChar {
                    found,
                    offset: self.pos,
                })
            }
            None => return Err(MarkupError::UnexpectedEnd),
        };
        let start = self.pos;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(MarkupError::UnterminatedValue { offset: start }),
                Some(c) if c == quote => return Ok(value),
                Some('&') => value.push(self.entity()?),
                Some(c) => value.push(c),
            }
        }
    }

    // Called with the leading '&' already consumed.
    fn entity(&mut self) -> Result<char, MarkupError> {
        let offset = self.pos - 1;
        let rest = &self.input[self.pos..];
        let end = rest
            .find(';')
            .ok_or(MarkupError::InvalidEntity { offset })?;
        let decoded = match &rest[..end] {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => return Err(MarkupError::InvalidEntity { offset }),
        };
        self.pos += end + 1;
        Ok(decoded)
    }

    fn closing_tag(&mut self, tag: &str) -> Result<(), MarkupError> {
        self.skip_whitespace();
        self.expect('<')?;
        self.expect('/')?;
        let found = self.name()?;
        self.skip_whitespace();
        self.expect('>')?;
        if found != tag {
            return Err(MarkupError::MismatchedClosingTag {
                expected: tag.to_string(),
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_self_closing_element() {
        let element = parse_markup(
            r#"<GradientTextView android:text="Gold &amp; Silver" app:angle='45' />"#,
        )
        .expect("parse");
        assert_eq!(element.tag, "GradientTextView");
        assert_eq!(element.attribute("android:text"), Some("Gold & Silver"));
        assert_eq!(element.attribute("app:angle"), Some("45"));
    }

    #[test]
    fn parses_empty_body_element() {
        let element =
            parse_markup("<Label isBold=\"true\">\n</Label>").expect("parse");
        assert_eq!(element.tag, "Label");
        assert_eq!(element.attributes.len(), 1);
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let err = parse_markup(r#"<Label a="1" a="2"/>"#).unwrap_err();
        assert_eq!(
            err,
            MarkupError::DuplicateAttribute {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn rejects_unterminated_value() {
        let err = parse_markup(r#"<Label a="1/>"#).unwrap_err();
        assert_eq!(err, MarkupError::UnterminatedValue { offset: 9 });
    }

    #[test]
    fn rejects_mismatched_closing_tag() {
        let err = parse_markup("<Label></Other>").unwrap_err();
        assert!(matches!(err, MarkupError::MismatchedClosingTag { .. }));
    }

    #[test]
    fn rejects_missing_whitespace_between_attributes() {
        let err = parse_markup(r#"<Label a="1"b="2"/>"#).unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnexpectedChar {
                found: 'b',
                offset: 12
            }
        );
    }

    #[test]
    fn rejects_trailing_content_and_truncation() {
        assert!(matches!(
            parse_markup("<Label/> extra"),
            Err(MarkupError::UnexpectedChar { found: 'e', .. })
        ));
        assert_eq!(parse_markup("<Label a=\"1\""), Err(MarkupError::UnexpectedEnd));
        assert!(matches!(
            parse_markup(r#"<Label a="&bogus;"/>"#),
            Err(MarkupError::InvalidEntity { .. })
        ));
    }
}
