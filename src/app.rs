//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{home::HomePage, products::ProductsPage};

/// Root application component.
///
/// Provides the record store configuration and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::from_env());

    view! {
        <Title text="To-Do App"/>

        <Router>
            <nav class="app-nav">
                <A href="/">"Tasks"</A>
                <A href="/products">"Products"</A>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Record store configuration from context.
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
