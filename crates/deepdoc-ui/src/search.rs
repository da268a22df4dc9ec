//! Search forms and the failure banner.

use deepdoc_client::SearchRequest;
use deepdoc_core::AdvancedQuery;
use leptos::prelude::*;
use web_sys::SubmitEvent;

use crate::{panel::CollapsiblePanel, store::Store};

/// Placeholder of the term input.
pub const SEARCH_PLACEHOLDER: &str = "Insira os termos de busca, separados por ','";

/// Request sent for the text in the term input. The text is forwarded as
/// typed; the service splits on commas.
pub fn term_submission(raw: &str) -> SearchRequest {
    SearchRequest::term(raw)
}

/// Request sent by the advanced form, or `None` when every field is blank.
pub fn advanced_submission(all: &str, any: &str, none: &str) -> Option<SearchRequest> {
    let query = AdvancedQuery::new(all, any, none);
    (!query.is_blank()).then_some(SearchRequest::Advanced(query))
}

/// Term search form.
#[component]
pub fn SearchForm() -> impl IntoView {
    let store = Store::expect();
    let query = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.search(term_submission(&query.get_untracked()));
    };

    let busy = move || store.state().with(|state| state.is_pending());

    view! {
      <form class="search" on:submit=on_submit>
        <input
          node_ref=input_ref
          name="article"
          type="text"
          class="searchBar"
          placeholder=SEARCH_PLACEHOLDER
          prop:value=move || query.get()
          on:input=move |ev| {
            query.set(event_target_value(&ev));
          }
        />
        <button
          type="submit"
          class="searchButton"
          class:busy=busy
          aria-busy=move || busy().to_string()
          aria-label="Buscar"
        >
          <span class="searchIcon" aria-hidden="true"></span>
        </button>
      </form>
    }
}

/// Boolean search over three term lists, folded away by default.
#[component]
pub fn AdvancedSearchForm() -> impl IntoView {
    let store = Store::expect();
    let all = RwSignal::new(String::new());
    let any = RwSignal::new(String::new());
    let none = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match advanced_submission(&all.get_untracked(), &any.get_untracked(), &none.get_untracked()) {
            Some(request) => store.search(request),
            None => log::debug!("ignoring empty advanced search"),
        }
    };

    let field = move |label: &'static str, name: &'static str, value: RwSignal<String>| {
        view! {
          <label class="advancedField">
            <span class="advancedLabel">{label}</span>
            <input
              name=name
              type="text"
              class="searchBar"
              prop:value=move || value.get()
              on:input=move |ev| {
                value.set(event_target_value(&ev));
              }
            />
          </label>
        }
    };

    view! {
      <CollapsiblePanel
        show_label="Busca avançada"
        hide_label="Ocultar busca avançada"
        on_toggle=Callback::new(|open: bool| log::debug!("advanced search expanded: {open}"))
      >
        <form class="advancedSearch" on:submit=on_submit>
          {field("Todos os termos", "and", all)}
          {field("Qualquer um dos termos", "or", any)}
          {field("Nenhum dos termos", "not", none)}
          <button type="submit" class="searchButton advanced">"Buscar"</button>
        </form>
      </CollapsiblePanel>
    }
}

/// Message of the last failed search.
#[component]
pub fn SearchError() -> impl IntoView {
    let store = Store::expect();
    let error = Memo::new(move |_| store.state().with(|state| state.error().map(str::to_owned)));

    view! {
      <Show when=move || error.with(Option::is_some)>
        <div class="searchError" role="alert">
          "Não foi possível concluir a busca: "
          {move || error.get().unwrap_or_default()}
        </div>
      </Show>
    }
}
