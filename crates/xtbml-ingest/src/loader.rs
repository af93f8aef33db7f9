//! Reading converted JSON tables back for display.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use xtbml_model::ConvertedDocument;

use crate::discovery::list_json_files;
use crate::error::{IngestError, Result};

/// The minimal data needed to list and search converted tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub table_identity: String,
    pub identifier: String,
    pub name: String,
    pub provider: String,
    pub summary: String,
    pub file_path: PathBuf,
    pub keywords: Vec<String>,
}

impl TableSummary {
    fn from_document(document: ConvertedDocument, path: &Path) -> Self {
        let class = document.classification.unwrap_or_default();
        Self {
            table_identity: class.table_identity,
            identifier: document.identifier,
            name: class.table_name,
            provider: class.provider_name,
            summary: class.table_description,
            file_path: path.to_path_buf(),
            keywords: class.keywords,
        }
    }

    /// Numeric table identity, with non-numeric identities sorting as 0.
    fn identity_number(&self) -> u64 {
        self.table_identity.trim().parse().unwrap_or(0)
    }

    /// Lowercased text that search tokens are matched against.
    fn search_text(&self) -> String {
        let keywords = self.keywords.join(" ");
        [
            self.name.as_str(),
            self.identifier.as_str(),
            self.table_identity.as_str(),
            self.provider.as_str(),
            self.summary.as_str(),
            keywords.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Read a converted JSON file.
pub fn load_document(path: &Path) -> Result<ConvertedDocument> {
    let raw = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_slice(&raw).map_err(|e| IngestError::JsonDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a single table summary from a JSON file.
pub fn load_summary(path: &Path) -> Result<TableSummary> {
    let document = load_document(path)?;
    Ok(TableSummary::from_document(document, path))
}

/// Load summaries for every `.json` file in `dir`.
///
/// Sorted by numeric table identity, then by name.
pub fn load_summaries(dir: &Path) -> Result<Vec<TableSummary>> {
    let mut summaries = list_json_files(dir)?
        .iter()
        .map(|path| load_summary(path))
        .collect::<Result<Vec<_>>>()?;

    summaries.sort_by(|a, b| {
        a.identity_number()
            .cmp(&b.identity_number())
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!(count = summaries.len(), dir = %dir.display(), "loaded table summaries");
    Ok(summaries)
}

/// Summaries whose text contains every whitespace-separated query token.
///
/// Matching is case-insensitive over name, identifier, identity, provider,
/// description and keywords. An empty query keeps everything.
pub fn filter_summaries(items: &[TableSummary], query: &str) -> Vec<TableSummary> {
    let query = query.trim().to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            let text = item.search_text();
            tokens.iter().all(|token| text.contains(token))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(identity: &str, name: &str, keywords: &[&str]) -> TableSummary {
        TableSummary {
            table_identity: identity.to_string(),
            name: name.to_string(),
            provider: "Society of Actuaries".to_string(),
            keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
            ..TableSummary::default()
        }
    }

    #[test]
    fn empty_query_returns_everything() {
        let items = vec![summary("1", "A", &[]), summary("2", "B", &[])];
        assert_eq!(filter_summaries(&items, "   "), items);
    }

    #[test]
    fn all_tokens_must_match() {
        let items = vec![
            summary("1", "2001 CSO Male", &["Aggregate"]),
            summary("2", "2001 CSO Female", &["Aggregate"]),
            summary("3", "RP-2000", &["Annuity"]),
        ];
        let names: Vec<_> = filter_summaries(&items, "cso MALE")
            .into_iter()
            .map(|item| item.name)
            .collect();
        // "female" contains "male"
        assert_eq!(names, vec!["2001 CSO Male", "2001 CSO Female"]);

        let names: Vec<_> = filter_summaries(&items, "annuity")
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["RP-2000"]);
        assert!(filter_summaries(&items, "cso annuity").is_empty());
    }

    #[test]
    fn identity_number_defaults_to_zero() {
        assert_eq!(summary(" 42 ", "", &[]).identity_number(), 42);
        assert_eq!(summary("abc", "", &[]).identity_number(), 0);
    }
}
