//! Labels applied to created issues.

/// Ordered list of issue labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Parses a comma-separated label list.
    ///
    /// Surrounding whitespace is trimmed and blank entries are skipped, so an
    /// empty string yields an empty set.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list_keeps_order() {
        assert_eq!(LabelSet::parse("a,b,c").as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_parse_empty_is_empty_set() {
        let labels = LabelSet::parse("");
        assert!(labels.is_empty());
        assert_eq!(labels.to_vec(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        assert_eq!(
            LabelSet::parse(" docs , ,needs triage,").as_slice(),
            ["docs", "needs triage"]
        );
    }
}
