//! Data model for XTbML rate tables.
//!
//! The types here serve two roles: the intermediate model produced while
//! decoding a document (`Classification`, `TableMeta`, `RatePoint`) and the
//! normalized JSON payload written by the converter (`ConvertedDocument`,
//! `TablePayload`, `RateEntry`). Every type round-trips through serde so the
//! JSON can be read back for display.

pub mod classification;
pub mod payload;
pub mod table;

pub use classification::{Classification, ClassifiedValue};
pub use payload::{ConvertedDocument, RateEntry, TablePayload};
pub use table::{AxisDefinition, RatePoint, TableMeta};
