//! Search queries as the user typed them.

use serde::{Deserialize, Serialize};

/// A comma-separated list of terms.
///
/// The raw text is forwarded to the service untouched; the service does
/// the splitting. [`SearchQuery::terms`] exists for display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    raw: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The text exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Trimmed, non-empty terms.
    pub fn terms(&self) -> Vec<&str> {
        split_terms(&self.raw)
    }

    /// True when no term survives trimming.
    pub fn is_blank(&self) -> bool {
        self.terms().is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SearchQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Boolean search over three comma-separated term lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdvancedQuery {
    /// Every term must occur.
    pub all: String,

    /// At least one term must occur.
    pub any: String,

    /// None of the terms may occur.
    pub none: String,
}

impl AdvancedQuery {
    pub fn new(all: impl Into<String>, any: impl Into<String>, none: impl Into<String>) -> Self {
        Self {
            all: all.into(),
            any: any.into(),
            none: none.into(),
        }
    }

    /// Query parameters in the service's naming.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("and", self.all.as_str()),
            ("or", self.any.as_str()),
            ("not", self.none.as_str()),
        ]
    }

    pub fn is_blank(&self) -> bool {
        split_terms(&self.all).is_empty()
            && split_terms(&self.any).is_empty()
            && split_terms(&self.none).is_empty()
    }
}

fn split_terms(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_is_preserved() {
        let query = SearchQuery::new("aa,bb");
        assert_eq!(query.as_str(), "aa,bb");

        let query = SearchQuery::from(" solo , rocha,");
        assert_eq!(query.as_str(), " solo , rocha,");
    }

    #[test]
    fn test_terms_for_display() {
        let query = SearchQuery::new(" solo , rocha,,argila ");
        assert_eq!(query.terms(), vec!["solo", "rocha", "argila"]);
    }

    #[test]
    fn test_blank_query() {
        assert!(SearchQuery::new("").is_blank());
        assert!(SearchQuery::new(" , ,").is_blank());
        assert!(!SearchQuery::new("x").is_blank());
    }

    #[test]
    fn test_advanced_params() {
        let query = AdvancedQuery::new("solo,rocha", "argila", "");
        assert_eq!(
            query.params(),
            [("and", "solo,rocha"), ("or", "argila"), ("not", "")]
        );
        assert!(!query.is_blank());
        assert!(AdvancedQuery::default().is_blank());
    }

    #[test]
    fn test_query_serializes_as_string() {
        let json = serde_json::to_string(&SearchQuery::new("a,b")).unwrap();
        assert_eq!(json, "\"a,b\"");
    }
}
