//! Decoding of the document-level `<ContentClassification>` block.

use xtbml_model::{Classification, ClassifiedValue};

use crate::error::{ConvertError, Result};
use crate::xml::{StartTag, Token, XmlCursor};

pub(crate) const CLASSIFICATION: &str = "ContentClassification";

/// Decode the children of a `<ContentClassification>` element whose start
/// tag was just read. Consumes through the element's end tag.
pub(crate) fn decode_classification(cursor: &mut XmlCursor<'_>) -> Result<Classification> {
    let mut class = Classification::default();
    let mut keywords = Vec::new();

    while let Some(child) = cursor.next_child()? {
        if child.is("TableIdentity") {
            class.table_identity = trimmed_text(cursor)?;
        } else if child.is("ProviderDomain") {
            class.provider_domain = trimmed_text(cursor)?;
        } else if child.is("ProviderName") {
            class.provider_name = trimmed_text(cursor)?;
        } else if child.is("TableReference") {
            class.table_reference = trimmed_text(cursor)?;
        } else if child.is("ContentType") {
            class.content_type = classified_value(cursor, &child)?;
        } else if child.is("TableName") {
            class.table_name = trimmed_text(cursor)?;
        } else if child.is("TableDescription") {
            class.table_description = trimmed_text(cursor)?;
        } else if child.is("Comments") {
            class.comments = trimmed_text(cursor)?;
        } else if child.is("KeyWord") {
            keywords.push(trimmed_text(cursor)?);
        } else {
            cursor.skip_element()?;
        }
    }

    if class.table_name.is_empty() {
        return Err(ConvertError::MissingTableName);
    }
    keywords.retain(|keyword| !keyword.is_empty());
    class.keywords = keywords;
    Ok(class)
}

/// Extract the first `<ContentClassification>` block of a document.
///
/// Fails with [`ConvertError::MissingTableName`] when the block has no table
/// name, and also when the document has no block at all: either way there is
/// no name to identify the table by.
pub fn parse_classification(input: &[u8]) -> Result<Classification> {
    let mut cursor = XmlCursor::new(input);
    while let Some(token) = cursor.next_token()? {
        if let Token::Start(tag) = token
            && tag.is(CLASSIFICATION)
        {
            return decode_classification(&mut cursor);
        }
    }
    Err(ConvertError::MissingTableName)
}

pub(crate) fn trimmed_text(cursor: &mut XmlCursor<'_>) -> Result<String> {
    Ok(cursor.element_text()?.trim().to_string())
}

/// Text plus `tc` attribute of an element such as `<ContentType tc="85">`.
pub(crate) fn classified_value(
    cursor: &mut XmlCursor<'_>,
    start: &StartTag,
) -> Result<ClassifiedValue> {
    let code = start.attr("tc").unwrap_or_default().to_string();
    let label = cursor.element_text()?;
    Ok(ClassifiedValue::new(code, label))
}
