//! Site header.

use leptos::prelude::*;

/// Alt text of the logo image.
pub const LOGO_ALT: &str = "logomarca da ferramenta deepdoc";

/// Logo and divider shown above the search form.
#[component]
pub fn NavBar(
    /// Logo image URL.
    #[prop(default = "/img/logo-deepdoc.svg")]
    logo_src: &'static str,
) -> impl IntoView {
    view! {
      <header class="deepdoc-nav">
        <img src=logo_src alt=LOGO_ALT class="logo" />
        <div class="grayBar"></div>
      </header>
    }
}
