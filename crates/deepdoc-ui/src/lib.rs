//! DeepDoc UI Components
//!
//! Leptos components for the DeepDoc search page.
//!
//! # Components
//!
//! ## Search
//! - [`SearchForm`] - Comma-separated term search
//! - [`AdvancedSearchForm`] - All / any / none term lists
//! - [`SearchError`] - Last search failure, if any
//!
//! ## Results
//! - [`ArticleList`] - Placeholder, "none found" message, or one item per article
//! - [`ArticleItem`] - Title link, term chips and the category table
//! - [`CollapsiblePanel`] - Show/hide toggle around its children
//!
//! ## Navigation
//! - [`NavBar`] - Logo and divider
//!
//! Every component reads the [`Store`] from context.
//!
//! # Example
//!
//! ```ignore
//! use deepdoc_client::ArticleService;
//! use deepdoc_core::Config;
//! use deepdoc_ui::{ArticleList, SearchForm, Store};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     Store::provide(ArticleService::new(Config::compiled()));
//!
//!     view! {
//!         <SearchForm />
//!         <ArticleList />
//!     }
//! }
//! ```

pub mod article;
pub mod navigation;
pub mod panel;
pub mod search;
pub mod store;

pub use article::{ArticleItem, ArticleList};
pub use navigation::NavBar;
pub use panel::CollapsiblePanel;
pub use search::{AdvancedSearchForm, SearchError, SearchForm};
pub use store::Store;
