//! Version attribute of the `<XTbML>` root element.

use crate::xml::{StartTag, Token, XmlCursor};

pub(crate) const ROOT: &str = "XTbML";

/// Sentinel reported when no version can be determined.
pub const UNKNOWN_VERSION: &str = "unknown";

/// The root's `version` attribute, unless it is absent or empty.
pub(crate) fn version_from_root(root: &StartTag) -> Option<&str> {
    root.attr("version").filter(|value| !value.is_empty())
}

/// Read the version of an XTbML document.
///
/// Scans forward to the first `<XTbML>` element (matched case-insensitively).
/// Never fails: if the root is missing, or the input cannot be decoded before
/// it is reached, the result is [`UNKNOWN_VERSION`].
pub fn infer_version(input: &[u8]) -> String {
    let mut cursor = XmlCursor::new(input);
    while let Ok(Some(token)) = cursor.next_token() {
        if let Token::Start(tag) = token
            && tag.is(ROOT)
        {
            return version_from_root(&tag)
                .unwrap_or(UNKNOWN_VERSION)
                .to_string();
        }
    }
    UNKNOWN_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_version_attribute() {
        let xml = br#"<?xml version="1.0" encoding="utf-8"?><XTbML version="1.3"></XTbML>"#;
        assert_eq!(infer_version(xml), "1.3");
    }

    #[test]
    fn root_match_ignores_case() {
        assert_eq!(infer_version(br#"<xtbml Version="2.0"/>"#), "2.0");
    }

    #[test]
    fn missing_attribute_falls_back() {
        assert_eq!(infer_version(b"<XTbML></XTbML>"), UNKNOWN_VERSION);
        assert_eq!(infer_version(br#"<XTbML version=""></XTbML>"#), UNKNOWN_VERSION);
    }

    #[test]
    fn missing_root_falls_back() {
        assert_eq!(infer_version(br#"<Other version="9"/>"#), UNKNOWN_VERSION);
        assert_eq!(infer_version(b""), UNKNOWN_VERSION);
        assert_eq!(infer_version(b"<Broken"), UNKNOWN_VERSION);
    }

    #[test]
    fn nested_root_is_still_found() {
        let xml = br#"<Envelope><XTbML version="1.1"/></Envelope>"#;
        assert_eq!(infer_version(xml), "1.1");
    }
}
