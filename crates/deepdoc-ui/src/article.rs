//! Result list and result item components.

use deepdoc_core::{ArticleView, ListView, NONE_FOUND_MESSAGE};
use leptos::prelude::*;

use crate::{panel::CollapsiblePanel, store::Store};

/// Results region.
///
/// Renders nothing before the first search, a "none found" message for an
/// empty result set, and otherwise one [`ArticleItem`] per article keyed by
/// its path.
#[component]
pub fn ArticleList() -> impl IntoView {
    let store = Store::expect();
    let config = store.config();
    let list = Memo::new(move |_| store.state().with(|state| ListView::from_state(state, &config)));

    move || match list.get() {
        ListView::Placeholder => view! { <div></div> }.into_any(),
        ListView::NoneFound => view! {
          <div class="results">
            <h3 class="title noneFound">{NONE_FOUND_MESSAGE}</h3>
          </div>
        }
        .into_any(),
        ListView::Items(items) => view! {
          <div class="results">
            <For
              each=move || items.clone()
              key=|item| item.key.clone()
              children=move |item| {
                view! { <ArticleItem item=item /> }
              }
            />
          </div>
        }
        .into_any(),
    }
}

/// One matched document.
#[component]
pub fn ArticleItem(
    /// The article to display.
    item: ArticleView,
) -> impl IntoView {
    let ArticleView {
        title,
        viewer_url,
        terms,
        categories,
        score,
        ..
    } = item;
    let categories = StoredValue::new(categories);

    view! {
      <div class="article">
        <h3>
          <a class="title" href=viewer_url target="_blank" rel="noopener noreferrer">
            {title}
          </a>
        </h3>
        <div class="occurrences">
          <span class="keyWords">"Palavras-chave: "</span>
          {terms
            .into_iter()
            .map(|(term, count)| {
              view! {
                <span class="term">{term}</span>
                " "
                <span class="occurrencesChip">{count}</span>
              }
            })
            .collect_view()}
          {score.map(|score| view! { <span class="score" title="Total de ocorrências">{score}</span> })}
        </div>
        <CollapsiblePanel>
          <table class="categories">
            <tbody>
              {categories
                .get_value()
                .into_iter()
                .map(|row| {
                  view! {
                    <tr>
                      <td class="categoryChip">{row.name}</td>
                      <td>
                        {row
                          .tags
                          .into_iter()
                          .map(|tag| view! { <span class="tagChip">{tag}</span> })
                          .collect_view()}
                      </td>
                    </tr>
                  }
                })
                .collect_view()}
            </tbody>
          </table>
        </CollapsiblePanel>
        <div class="smallGrayBar"></div>
      </div>
    }
}
