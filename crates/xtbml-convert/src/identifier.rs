//! Slug generation for the `identifier` field of converted documents.

const SEPARATOR: char = '_';

/// Convert a human-readable table name into a predictable slug.
///
/// Letters and digits are lowercased and kept, runs of whitespace, `_`, `-`
/// and `/` become a single underscore, and all other punctuation is dropped.
/// The result never starts or ends with an underscore.
///
/// ```
/// use xtbml_convert::normalize_identifier;
///
/// assert_eq!(normalize_identifier("2012 IAM Basic-Table"), "2012_iam_basic_table");
/// assert_eq!(normalize_identifier("  --RP-2000-- "), "rp_2000");
/// ```
pub fn normalize_identifier(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_separator = false;

    for ch in input.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            last_separator = false;
        } else if is_separator(ch) && !last_separator && !out.is_empty() {
            out.push(SEPARATOR);
            last_separator = true;
        }
    }

    out.trim_matches(SEPARATOR).replace("__", "_")
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '_' | '-' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_punctuation() {
        assert_eq!(
            normalize_identifier("2012 IAM Basic-Table"),
            "2012_iam_basic_table"
        );
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(normalize_identifier("  --RP-2000-- "), "rp_2000");
    }

    #[test]
    fn drops_other_punctuation() {
        assert_eq!(
            normalize_identifier("2001 CSO (Male), ANB: 1.5%"),
            "2001_cso_male_anb_15"
        );
        assert_eq!(normalize_identifier("A / B_c"), "a_b_c");
    }

    #[test]
    fn punctuation_between_separators_does_not_double() {
        assert_eq!(normalize_identifier("a - (b)"), "a_b");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize_identifier("Mortalité Générale"), "mortalité_générale");
    }

    #[test]
    fn empty_and_separator_only_inputs() {
        assert_eq!(normalize_identifier(""), "");
        assert_eq!(normalize_identifier(" -_/ "), "");
        assert_eq!(normalize_identifier("!!!"), "");
    }
}
