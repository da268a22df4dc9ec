//! HTTP access to the search service.

use deepdoc_core::{AdvancedQuery, Config, SearchResponse};
use gloo_net::http::Request;

use crate::{
    error::{ClientError, Result},
    request::SearchRequest,
};

/// Issues searches against the configured service.
///
/// One unauthenticated GET per call. There is no retry and no timeout;
/// failures are returned to the caller as they happen.
#[derive(Debug, Clone)]
pub struct ArticleService {
    config: Config,
}

impl ArticleService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Documents containing the comma-separated terms.
    pub async fn search_by_term(&self, query: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::Term(query.into())).await
    }

    /// Documents in a category.
    pub async fn search_by_category(&self, query: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::Category(query.into())).await
    }

    /// Documents carrying a tag.
    pub async fn search_by_tag(&self, query: &str) -> Result<SearchResponse> {
        self.search(&SearchRequest::Tag(query.into())).await
    }

    pub async fn search_advanced(&self, query: &AdvancedQuery) -> Result<SearchResponse> {
        self.search(&SearchRequest::Advanced(query.clone())).await
    }

    /// Send a request and decode the response body.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = request.url(&self.config)?;
        log::debug!("GET {url}");

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status(),
                url: url.into(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let decoded = SearchResponse::from_json(&body)?;
        log::debug!("{} returned {} articles", request.path(), decoded.results.len());
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_uses_given_config() {
        let config = Config::from_toml_str(
            r#"
[service]
base_url = "http://search.internal:5000"
"#,
        )
        .expect("config");

        let service = ArticleService::new(config);
        assert_eq!(service.config().service.base_url, "http://search.internal:5000");
    }

    #[test]
    fn test_response_body_decoding() {
        let body = serde_json::json!({
            "results": [{
                "path": "docs/a.pdf",
                "title": "A",
                "occurrences": "{\"solo\": 2}",
                "categories": "{}"
            }]
        })
        .to_string();

        let decoded = SearchResponse::from_json(&body).expect("decode");
        assert_eq!(decoded.results[0].occurrences.total(), 2);

        let err: ClientError = SearchResponse::from_json("{\"results\": 3}")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
