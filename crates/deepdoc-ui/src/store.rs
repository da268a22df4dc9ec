//! Reactive wrapper around the search state.

use deepdoc_client::{ArticleService, SearchRequest};
use deepdoc_core::{Action, AppState, Config, SearchResponse, SearchTicket, update};
use leptos::{prelude::*, task::spawn_local};

/// Search state plus the service that feeds it.
///
/// Provided once by the app shell and read by components through
/// [`Store::expect`]. All changes go through [`Store::dispatch`].
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
    next_ticket: StoredValue<SearchTicket>,
    service: StoredValue<ArticleService>,
}

impl Store {
    pub fn new(service: ArticleService) -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
            next_ticket: StoredValue::new(SearchTicket::first()),
            service: StoredValue::new(service),
        }
    }

    /// Create a store and place it in the current context.
    pub fn provide(service: ArticleService) -> Self {
        let store = Self::new(service);
        provide_context(store);
        store
    }

    /// The store provided by an ancestor.
    ///
    /// # Panics
    ///
    /// Panics when no ancestor called [`Store::provide`].
    pub fn expect() -> Self {
        expect_context::<Store>()
    }

    pub fn state(&self) -> ReadSignal<AppState> {
        self.state.read_only()
    }

    pub fn config(&self) -> Config {
        self.service.with_value(|service| service.config().clone())
    }

    /// Apply an action to the state.
    pub fn dispatch(&self, action: Action) {
        self.state.update(|state| {
            *state = update(std::mem::take(state), action);
        });
    }

    /// Send a search and apply its outcome when it resolves.
    pub fn search(&self, request: SearchRequest) {
        let ticket = self.begin_search();
        let service = self.service.get_value();
        let store = *self;

        spawn_local(async move {
            let outcome = service.search(&request).await;
            store.finish_search(ticket, outcome);
        });
    }

    /// Issue a ticket and mark it outstanding.
    pub fn begin_search(&self) -> SearchTicket {
        let ticket = self.next_ticket.get_value();
        self.next_ticket.set_value(ticket.next());
        self.dispatch(Action::SearchStarted(ticket));
        ticket
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn finish_search(
        &self,
        ticket: SearchTicket,
        outcome: deepdoc_client::Result<SearchResponse>,
    ) {
        let action = match outcome {
            Ok(response) => {
                log::info!("search #{} found {} articles", ticket.value(), response.results.len());
                Action::SearchSucceeded {
                    ticket,
                    articles: response.results,
                }
            }
            Err(err) => {
                log::warn!("search #{} failed: {err}", ticket.value());
                Action::SearchFailed {
                    ticket,
                    message: err.to_string(),
                }
            }
        };

        self.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use deepdoc_client::ClientError;

    use super::*;

    fn store() -> Store {
        Store::new(ArticleService::new(Config::default()))
    }

    fn response(json: &str) -> SearchResponse {
        SearchResponse::from_json(json).expect("decode")
    }

    #[test]
    fn test_initialize_leaves_nothing_to_render() {
        let store = store();
        store.dispatch(Action::Initialize);

        let state = store.state().get_untracked();
        assert!(state.articles().is_none());
        assert!(!state.is_pending());
    }

    #[test]
    fn test_tickets_are_issued_in_order() {
        let store = store();
        let first = store.begin_search();
        let second = store.begin_search();

        assert!(second > first);
        assert_eq!(store.state().get_untracked().pending(), Some(second));
    }

    #[test]
    fn test_finish_search_replaces_results() {
        let store = store();
        let ticket = store.begin_search();
        store.finish_search(
            ticket,
            Ok(response(
                r#"{"results": [{"path": "a.pdf", "title": "A", "occurrences": "{}", "categories": "{}"}]}"#,
            )),
        );

        let state = store.state().get_untracked();
        assert_eq!(state.articles().map(|a| a.len()), Some(1));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_failed_search_keeps_results_and_reports() {
        let store = store();
        let ticket = store.begin_search();
        store.finish_search(
            ticket,
            Ok(response(
                r#"{"results": [{"path": "a.pdf", "title": "A", "occurrences": "{}", "categories": "{}"}]}"#,
            )),
        );

        let ticket = store.begin_search();
        store.finish_search(
            ticket,
            Err(ClientError::Network("connection refused".to_string())),
        );

        let state = store.state().get_untracked();
        assert_eq!(state.articles().map(|a| a[0].path.clone()), Some("a.pdf".to_string()));
        assert_eq!(state.error(), Some("Network error: connection refused"));
    }

    #[test]
    fn test_late_response_does_not_overwrite_newer() {
        let store = store();
        let older = store.begin_search();
        let newer = store.begin_search();

        store.finish_search(
            newer,
            Ok(response(
                r#"{"results": [{"path": "new.pdf", "title": "N", "occurrences": "{}", "categories": "{}"}]}"#,
            )),
        );
        store.finish_search(older, Ok(response(r#"{"results": []}"#)));

        let state = store.state().get_untracked();
        assert_eq!(state.articles().map(|a| a[0].path.clone()), Some("new.pdf".to_string()));
    }
}
