//! Render-ready projections of the state.
//!
//! Components only format strings from these; every ordering rule lives
//! here where it can be tested without a browser.

use crate::{AppState, Article, Config};

/// Shown when a search completed without matches.
pub const NONE_FOUND_MESSAGE: &str = "Nenhum documento encontrado";

/// What the results region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No search has completed yet; render nothing.
    Placeholder,
    /// A search completed with zero matches.
    NoneFound,
    /// One entry per article, in service order.
    Items(Vec<ArticleView>),
}

impl ListView {
    pub fn from_state(state: &AppState, config: &Config) -> Self {
        match state.articles() {
            None => Self::Placeholder,
            Some([]) => Self::NoneFound,
            Some(articles) => Self::Items(
                articles
                    .iter()
                    .map(|article| ArticleView::new(article, config))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    /// List key; the document path is unique within a result set.
    pub key: String,
    pub title: String,
    pub viewer_url: String,
    /// `(term, count)` in the order the service listed them.
    pub terms: Vec<(String, u32)>,
    pub categories: Vec<CategoryRow>,
    pub score: Option<u64>,
}

impl ArticleView {
    pub fn new(article: &Article, config: &Config) -> Self {
        Self {
            key: article.path.clone(),
            title: article.title.clone(),
            viewer_url: config.viewer_url(&article.path),
            terms: article
                .occurrences
                .iter()
                .map(|t| (t.term.clone(), t.count))
                .collect(),
            categories: article
                .categories
                .iter()
                .map(|category| CategoryRow {
                    name: category.name.clone(),
                    tags: category
                        .tags_by_count()
                        .into_iter()
                        .map(|tag| format!("{} ({})", tag.name, tag.count))
                        .collect(),
                })
                .collect(),
            score: article.score,
        }
    }
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub name: String,
    /// Tag chip labels, highest count first.
    pub tags: Vec<String>,
}
