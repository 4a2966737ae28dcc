//! Header component.

use leptos::prelude::*;

/// Primary navigation entries as `(label, href)`.
pub const NAV_LINKS: [(&str, &str); 2] = [("Docs", "/docs"), ("API", "/api")];

/// Site header with logo and primary navigation.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="logo" href="/">
                <span class="logo-text">"Sitekit"</span>
            </a>
            <nav class="site-nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| view! { <a href=href>{label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}
