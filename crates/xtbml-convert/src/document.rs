//! Single-pass assembly of the intermediate document model.

use xtbml_model::{Classification, RatePoint, TableMeta};

use crate::classification::{CLASSIFICATION, decode_classification};
use crate::error::{ConvertError, Result};
use crate::rates::RateParser;
use crate::table_meta::{METADATA, TABLE, TableMetaCollector, decode_table_meta};
use crate::version::{ROOT, UNKNOWN_VERSION, version_from_root};
use crate::xml::{Token, XmlCursor};

/// Everything extracted from one XTbML document, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub version: String,
    pub classification: Classification,
    /// One entry per `<Table>`, blank for tables without metadata.
    pub table_metas: Vec<TableMeta>,
    /// Rate points in document order.
    pub rates: Vec<RatePoint>,
}

/// Decode a document with one forward scan over its tokens.
///
/// Each token goes to the rate parser first, then to the version, table,
/// classification and metadata handling. The first error aborts the scan.
/// After the scan, a document without rate data fails with
/// [`ConvertError::NoRateData`], then one without a classification with
/// [`ConvertError::MissingClassification`].
pub fn parse_document(input: &[u8]) -> Result<Document> {
    let mut cursor = XmlCursor::new(input);
    let mut rates = RateParser::new();
    let mut metas = TableMetaCollector::default();
    let mut version: Option<String> = None;
    let mut classification: Option<Classification> = None;

    while let Some(token) = cursor.next_token()? {
        rates.consume(&mut cursor, &token)?;

        let Token::Start(tag) = token else {
            continue;
        };
        if tag.is(ROOT) {
            if version.is_none() {
                version = version_from_root(&tag).map(str::to_string);
            }
        } else if tag.is(TABLE) {
            metas.open_table();
        } else if tag.is(CLASSIFICATION) {
            if classification.is_some() {
                cursor.skip_element()?;
            } else {
                classification = Some(decode_classification(&mut cursor)?);
            }
        } else if tag.is(METADATA) {
            let meta = decode_table_meta(&mut cursor)?;
            metas.assign(meta);
        }
    }

    let rates = rates.finish()?;
    let classification = classification.ok_or(ConvertError::MissingClassification)?;

    Ok(Document {
        version: version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        classification,
        table_metas: metas.finish(),
        rates,
    })
}
