//! Mapping of searches onto service endpoints.

use deepdoc_core::{AdvancedQuery, Config, SearchQuery};
use url::Url;

use crate::error::Result;

/// One search the user can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Documents containing every comma-separated term.
    Term(SearchQuery),
    /// Documents in a category.
    Category(SearchQuery),
    /// Documents carrying a tag.
    Tag(SearchQuery),
    /// Boolean search over three term lists.
    Advanced(AdvancedQuery),
}

impl SearchRequest {
    pub fn term(query: impl Into<SearchQuery>) -> Self {
        Self::Term(query.into())
    }

    /// Endpoint path relative to the service origin.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Term(_) => "/search/term",
            Self::Category(_) => "/search/category",
            Self::Tag(_) => "/search/tag",
            Self::Advanced(_) => "/search/advanced",
        }
    }

    /// Unencoded query parameters.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Term(query) | Self::Category(query) | Self::Tag(query) => {
                vec![("query", query.as_str())]
            }
            Self::Advanced(query) => query.params().to_vec(),
        }
    }

    /// Full request URL with percent-encoded parameters.
    pub fn url(&self, config: &Config) -> Result<Url> {
        Ok(config.service_url(self.path(), &self.params())?)
    }
}
