use serde::{Deserialize, Serialize};
use std::fmt;

/// A text label paired with the `tc` code attribute of the same element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedValue {
    pub code: String,
    pub label: String,
}

impl ClassifiedValue {
    /// Build a value, trimming surrounding whitespace from both parts.
    pub fn new(code: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            code: code.as_ref().trim().to_string(),
            label: label.as_ref().trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.label.is_empty()
    }
}

impl fmt::Display for ClassifiedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.is_empty(), self.label.is_empty()) {
            (true, _) => write!(f, "{}", self.label),
            (false, true) => write!(f, "{}", self.code),
            (false, false) => write!(f, "{} ({})", self.label, self.code),
        }
    }
}

/// Document-level metadata from the `<ContentClassification>` block.
///
/// A valid document always carries exactly one of these with a non-empty
/// `table_name`; later duplicates in the same document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Classification {
    pub table_identity: String,
    pub provider_domain: String,
    pub provider_name: String,
    pub table_reference: String,
    pub content_type: ClassifiedValue,
    pub table_name: String,
    pub table_description: String,
    pub comments: String,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_value_trims_parts() {
        let value = ClassifiedValue::new(" 85 ", "\n CSO / CET \t");
        assert_eq!(value.code, "85");
        assert_eq!(value.label, "CSO / CET");
        assert!(!value.is_empty());
    }

    #[test]
    fn classified_value_display() {
        assert_eq!(ClassifiedValue::new("1", "Age").to_string(), "Age (1)");
        assert_eq!(ClassifiedValue::new("", "Age").to_string(), "Age");
        assert_eq!(ClassifiedValue::new("1", "").to_string(), "1");
        assert_eq!(ClassifiedValue::default().to_string(), "");
    }
}
