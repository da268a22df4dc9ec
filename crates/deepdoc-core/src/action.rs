//! Actions accepted by the search state.

use crate::article::Article;

/// Identifies one search request. Tickets are handed out in increasing
/// order, so a larger ticket always belongs to a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn first() -> Self {
        Self(1)
    }

    /// The ticket issued after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// App mounted. Resets to "not yet searched"; does not fetch.
    Initialize,
    /// A request was sent.
    SearchStarted(SearchTicket),
    /// A request returned articles.
    SearchSucceeded {
        ticket: SearchTicket,
        articles: Vec<Article>,
    },
    /// A request failed before producing articles.
    SearchFailed {
        ticket: SearchTicket,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let first = SearchTicket::first();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
    }
}
