//! DeepDoc Search Client
//!
//! Browser-side wrapper around the DeepDoc search service.
//!
//! # Endpoints
//!
//! - `GET /search/term?query=<terms>`
//! - `GET /search/category?query=<category>`
//! - `GET /search/tag?query=<tag>`
//! - `GET /search/advanced?and=<terms>&or=<terms>&not=<terms>`
//!
//! Every endpoint answers `{ "results": [Article, ...] }`.
//!
//! # Example
//!
//! ```ignore
//! use deepdoc_client::ArticleService;
//! use deepdoc_core::Config;
//!
//! let service = ArticleService::new(Config::compiled());
//! let response = service.search_by_term("solo,argila").await?;
//! ```

pub mod error;
pub mod request;
pub mod service;

pub use error::{ClientError, Result};
pub use request::SearchRequest;
pub use service::ArticleService;
