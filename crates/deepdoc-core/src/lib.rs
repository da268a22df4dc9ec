//! DeepDoc Core Library
//!
//! Article model, search state, configuration and error handling for the
//! DeepDoc search client. Nothing in here touches the browser, so the
//! whole crate is tested natively.

pub mod action;
pub mod article;
pub mod config;
pub mod error;
pub mod query;
pub mod state;
pub mod update;
pub mod view_model;

pub use action::{Action, SearchTicket};
pub use article::{Article, Categories, Category, Occurrences, SearchResponse, Tag, TermCount};
pub use config::Config;
pub use error::{CoreError, Result};
pub use query::{AdvancedQuery, SearchQuery};
pub use state::AppState;
pub use update::update;
pub use view_model::{ArticleView, CategoryRow, ListView, NONE_FOUND_MESSAGE};
