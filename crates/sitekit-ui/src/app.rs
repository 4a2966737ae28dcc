//! Main application component and routing.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Layout;
use crate::config::load_layout_config;
use crate::theme::{generate_background_css, generate_css_variables};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let config = load_layout_config();
    let background_css =
        generate_background_css(&config.background_class, &config.full_background_class);
    provide_context(config);

    view! {
        <style>{generate_css_variables()}</style>
        <style>{background_css}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/docs") view=DocsPage />
                    <Route path=path!("/api") view=ApiPage />
                </Routes>
            </Layout>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Sitekit"</h1>
            <p>"Fast, typed documentation sites built with Rust and WebAssembly."</p>
            <a href="/docs">"Get started"</a>
        </section>
    }
}

#[component]
fn DocsPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Documentation"</h1>
            <p>"Pick a topic from the navigation to begin."</p>
        </section>
    }
}

#[component]
fn ApiPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"API Reference"</h1>
            <p>"Components, hooks, and configuration exposed by Sitekit."</p>
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Page not found"</h1>
            <a href="/">"Back home"</a>
        </section>
    }
}
