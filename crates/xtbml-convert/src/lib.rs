//! XTbML to JSON conversion engine.
//!
//! Converts an XTbML document (actuarial rate tables in XML) into the
//! normalized JSON payload described by [`xtbml_model::ConvertedDocument`].
//! Conversion is a pure function of the input bytes: one forward scan builds
//! a [`Document`], which [`build_payload`] groups by table and serializes.
//!
//! # Example
//!
//! ```
//! let xml = br#"<XTbML version="1.0">
//!   <ContentClassification><TableName>RP-2000</TableName></ContentClassification>
//!   <Table><Values><Axis><Y t="40">0.01</Y></Axis></Values></Table>
//! </XTbML>"#;
//!
//! let payload = xtbml_convert::convert_document(xml)?;
//! assert_eq!(payload.identifier, "rp_2000");
//! assert_eq!(payload.tables[0].rates[0].rate, Some(0.01));
//! # Ok::<(), xtbml_convert::ConvertError>(())
//! ```

mod classification;
mod document;
mod error;
mod identifier;
mod payload;
mod rates;
mod table_meta;
mod version;
mod xml;

use std::io::Read;

use xtbml_model::ConvertedDocument;

// === Error Types ===
pub use error::{ConvertError, ErrorKind, Result};

// === Single-pass Assembly ===
pub use document::{Document, parse_document};
pub use payload::{build_payload, to_json};

// === Individual Extractors ===
pub use classification::parse_classification;
pub use identifier::normalize_identifier;
pub use rates::{RateParser, parse_rates};
pub use table_meta::parse_table_metas;
pub use version::{UNKNOWN_VERSION, infer_version};

/// Convert an XTbML document into its normalized payload.
pub fn convert_document(input: &[u8]) -> Result<ConvertedDocument> {
    parse_document(input).map(build_payload)
}

/// Convert an XTbML document into indented JSON bytes.
///
/// Converting the same bytes twice yields identical output.
pub fn convert(input: &[u8]) -> Result<Vec<u8>> {
    to_json(&convert_document(input)?)
}

/// Read a whole XTbML document from `reader` and convert it.
pub fn convert_reader<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    convert(&input)
}
