//! Application state for one browser session.

use crate::{action::SearchTicket, article::Article};

/// Everything the views render from.
///
/// `articles` is `None` until the first search completes. A successful
/// search replaces the whole sequence; nothing is merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    articles: Option<Vec<Article>>,
    pending: Option<SearchTicket>,
    error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current results; `None` means no search has completed yet.
    pub fn articles(&self) -> Option<&[Article]> {
        self.articles.as_deref()
    }

    /// Latest outstanding request, if any.
    pub fn pending(&self) -> Option<SearchTicket> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Message of the last failed search, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn is_current(&self, ticket: SearchTicket) -> bool {
        self.pending == Some(ticket)
    }

    pub(crate) fn begin(&mut self, ticket: SearchTicket) {
        self.pending = Some(ticket);
    }

    pub(crate) fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = Some(articles);
        self.error = None;
        self.pending = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.pending = None;
    }
}
