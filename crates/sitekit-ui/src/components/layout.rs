//! Layout component for the application structure.
//!
//! Wraps every page in a styled container: a full-height flex column holding
//! the [`Header`] and an overflow-clipped content area. The container picks
//! up the full-height background variant on the root route only.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use sitekit_core::LayoutConfig;

use super::Header;

/// The routed layout. Reads the current path from the router.
///
/// Must be rendered inside a `Router`.
#[component]
pub fn Layout(
    /// Page content.
    children: Children,
) -> impl IntoView {
    let location = use_location();

    view! {
        <LayoutFrame path=location.pathname>
            {children()}
        </LayoutFrame>
    }
}

/// The layout markup for an explicit route path.
///
/// Class tokens come from the [`LayoutConfig`] in context, or the default
/// configuration when none is provided.
#[component]
pub fn LayoutFrame(
    /// Current route path.
    #[prop(into)]
    path: Signal<String>,
    /// Content rendered below the header.
    children: Children,
) -> impl IntoView {
    let config = use_context::<LayoutConfig>().unwrap_or_default();
    let frame_class = config.frame_classes();
    let content_class = config.content_classes();
    let container_class = container_class(path, config);

    view! {
        <div class=move || container_class.get()>
            <div class=frame_class>
                <Header />
                <div class=content_class>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Container class for `path`, recomposed whenever the route changes.
pub fn container_class(path: Signal<String>, config: LayoutConfig) -> Signal<String> {
    Signal::derive(move || path.with(|path| config.container_classes(path)))
}
