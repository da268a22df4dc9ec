use deepdoc_client::ArticleService;
use deepdoc_core::{Action, Config};
use deepdoc_ui::{AdvancedSearchForm, ArticleList, NavBar, SearchError, SearchForm, Store};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = Config::compiled();
    log::debug!("search service at {}", config.service.base_url);
    let store = Store::provide(ArticleService::new(config));

    // Runs once: dispatch never subscribes to the state.
    Effect::new(move |_| store.dispatch(Action::Initialize));

    view! {
      <Title text="DeepDoc" />

      <Router>
        <main class="pageBody">
          <Routes fallback=|| "Página não encontrada.".into_view()>
            <Route path=StaticSegment("") view=SearchPage />
          </Routes>
        </main>
      </Router>
    }
}

/// Renders the search page: header, forms, failure banner and results.
#[component]
fn SearchPage() -> impl IntoView {
    view! {
      <NavBar />
      <SearchForm />
      <AdvancedSearchForm />
      <SearchError />
      <ArticleList />
    }
}
