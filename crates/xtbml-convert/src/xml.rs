//! Forward-only token cursor over an XML byte buffer.
//!
//! Wraps the `quick-xml` pull reader and reduces its events to the few shapes
//! the extractors care about: start tags (with local names and attributes),
//! end tags, and the direct character data of an element. Names are compared
//! case-insensitively and namespace prefixes are dropped.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ConvertError, Result};

/// A start tag with its local name and decoded attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartTag {
    name: String,
    attributes: Vec<(String, String)>,
}

impl StartTag {
    /// Case-insensitive comparison against a local element name.
    pub(crate) fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Value of the first attribute whose local name matches, ignoring case.
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Start(StartTag),
    End(String),
    /// Text, comments, declarations and anything else the extractors skip.
    Other,
}

impl Token {
    /// True for an end tag with the given local name, ignoring case.
    pub(crate) fn is_end(&self, name: &str) -> bool {
        matches!(self, Token::End(end) if end.eq_ignore_ascii_case(name))
    }
}

pub(crate) struct XmlCursor<'a> {
    reader: Reader<&'a [u8]>,
    open: usize,
}

impl<'a> XmlCursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        // `<Y t="1"/>` must look exactly like `<Y t="1"></Y>`.
        config.expand_empty_elements = true;
        config.check_end_names = true;
        Self { reader, open: 0 }
    }

    /// Next token, or `None` at the end of a complete document.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>> {
        match self.read()? {
            Event::Start(start) => {
                self.open += 1;
                Ok(Some(Token::Start(self.start_tag(&start)?)))
            }
            Event::End(end) => {
                self.open = self.open.saturating_sub(1);
                Ok(Some(Token::End(
                    String::from_utf8_lossy(end.local_name().as_ref()).into_owned(),
                )))
            }
            Event::Eof => Ok(None),
            _ => Ok(Some(Token::Other)),
        }
    }

    /// Next direct child start tag of the element just opened, or `None`
    /// once that element's end tag has been consumed.
    ///
    /// The caller must consume each returned child completely (with
    /// [`element_text`](Self::element_text), [`skip_element`](Self::skip_element)
    /// or its own `next_child` loop) before asking for the next one.
    pub(crate) fn next_child(&mut self) -> Result<Option<StartTag>> {
        loop {
            match self.read()? {
                Event::Start(start) => {
                    self.open += 1;
                    return Ok(Some(self.start_tag(&start)?));
                }
                Event::End(_) => {
                    self.open = self.open.saturating_sub(1);
                    return Ok(None);
                }
                Event::Eof => return Err(self.unexpected_eof()),
                _ => {}
            }
        }
    }

    /// Direct character data of the element just opened, untrimmed.
    ///
    /// Text of nested child elements is skipped. Consumes through the
    /// element's end tag.
    pub(crate) fn element_text(&mut self) -> Result<String> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.read()? {
                Event::Start(_) => {
                    self.open += 1;
                    depth += 1;
                }
                Event::End(_) => {
                    self.open = self.open.saturating_sub(1);
                    if depth == 0 {
                        return Ok(text);
                    }
                    depth -= 1;
                }
                Event::Text(chunk) if depth == 0 => {
                    let decoded = chunk.decode().map_err(|err| self.malformed(err))?;
                    text.push_str(&decoded);
                }
                Event::CData(chunk) if depth == 0 => {
                    let decoded = chunk.decode().map_err(|err| self.malformed(err))?;
                    text.push_str(&decoded);
                }
                Event::GeneralRef(reference) if depth == 0 => {
                    let name = String::from_utf8_lossy(&reference);
                    let resolved = resolve_reference(&name).ok_or_else(|| {
                        self.malformed(format_args!("unknown entity reference '&{name};'"))
                    })?;
                    text.push_str(&resolved);
                }
                Event::Eof => return Err(self.unexpected_eof()),
                _ => {}
            }
        }
    }

    /// Discard the element just opened, including all of its descendants.
    pub(crate) fn skip_element(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.read()? {
                Event::Start(_) => {
                    self.open += 1;
                    depth += 1;
                }
                Event::End(_) => {
                    self.open = self.open.saturating_sub(1);
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Eof => return Err(self.unexpected_eof()),
                _ => {}
            }
        }
    }

    fn read(&mut self) -> Result<Event<'a>> {
        let event = self
            .reader
            .read_event()
            .map_err(|err| ConvertError::malformed(self.reader.error_position(), err))?;
        if matches!(event, Event::Eof) && self.open > 0 {
            return Err(self.unexpected_eof());
        }
        Ok(event)
    }

    fn start_tag(&self, start: &BytesStart<'_>) -> Result<StartTag> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|err| self.malformed(err))?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|err| self.malformed(err))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(StartTag { name, attributes })
    }

    fn malformed(&self, message: impl std::fmt::Display) -> ConvertError {
        ConvertError::malformed(self.reader.buffer_position(), message)
    }

    fn unexpected_eof(&self) -> ConvertError {
        self.malformed(format_args!(
            "unexpected end of input with {} unclosed element(s)",
            self.open
        ))
    }
}

/// Resolve a character reference (`#38`, `#x26`) or one of the five
/// predefined XML entities.
fn resolve_reference(name: &str) -> Option<Cow<'static, str>> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse().ok()?,
        };
        return char::from_u32(value).map(|ch| Cow::Owned(ch.to_string()));
    }
    resolve_predefined_entity(name).map(Cow::Borrowed)
}
