//! Show/hide panel used for the category table and the advanced form.

use leptos::prelude::*;

/// Button label while collapsed.
pub const SHOW_CATEGORIES: &str = "Ver categorias";

/// Button label while expanded.
pub const HIDE_CATEGORIES: &str = "Esconder categorias";

/// Flip `expanded` and return the new value.
pub fn toggle(expanded: RwSignal<bool>) -> bool {
    expanded.update(|open| *open = !*open);
    expanded.get_untracked()
}

/// Click handler body: flip `expanded` and report the new value to `on_toggle`.
pub fn toggle_and_notify(expanded: RwSignal<bool>, on_toggle: Option<Callback<bool>>) {
    let open = toggle(expanded);
    if let Some(on_toggle) = on_toggle {
        on_toggle.run(open);
    }
}

/// Collapsible panel.
///
/// Starts collapsed. The content is only rendered while expanded.
#[component]
pub fn CollapsiblePanel(
    /// Label of the button while collapsed.
    #[prop(default = SHOW_CATEGORIES)]
    show_label: &'static str,
    /// Label of the button while expanded.
    #[prop(default = HIDE_CATEGORIES)]
    hide_label: &'static str,
    /// Called with the new visibility after every toggle.
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
    /// Panel content.
    children: ChildrenFn,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let on_click = move |_| toggle_and_notify(expanded, on_toggle);

    view! {
      <div class="collapsible">
        <button
          class="viewCategories"
          type="button"
          aria-expanded=move || expanded.get().to_string()
          on:click=on_click
        >
          {move || if expanded.get() { hide_label } else { show_label }}
          <span class="caret" class:open=move || expanded.get() aria-hidden="true"></span>
        </button>
        <Show when=move || expanded.get()>
          <div class="collapsible-content">{children()}</div>
        </Show>
      </div>
    }
}
