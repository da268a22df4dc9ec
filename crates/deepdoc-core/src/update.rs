use crate::{Action, AppState};

/// Pure update function: applies an action to the state.
///
/// Outcomes are only applied for the newest outstanding ticket, so a slow
/// response can never overwrite the results of a later search.
pub fn update(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Initialize => {
            state = AppState::new();
        }
        Action::SearchStarted(ticket) => {
            state.begin(ticket);
        }
        Action::SearchSucceeded { ticket, articles } => {
            if state.is_current(ticket) {
                state.replace_articles(articles);
            }
        }
        Action::SearchFailed { ticket, message } => {
            if state.is_current(ticket) {
                state.fail(message);
            }
        }
    }

    state
}
