//! To-do page: creation form above the editable list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the only shared client state, a `PageData` re-fetch trigger.
//! The list resource tracks it, and the form, rows and editor bump it after a
//! confirmed write, so every mutation is observed through a fresh fetch.

use leptos::prelude::*;

use crate::app::use_config;
use crate::components::todo_form::TodoForm;
use crate::components::todo_list::TodoList;
use crate::net::api::ApiClient;
use crate::state::collection::fetch_todos;
use crate::state::page::PageData;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = PageData::new();
    provide_context(page);

    let config = use_config();
    let todos = LocalResource::new(move || {
        page.track();
        let api = ApiClient::new(&config);
        async move { fetch_todos(&api).await }
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"To-Do App"</h1>
                <p class="home-page__subtitle">
                    "Manage your tasks. Add, complete, and organize your to-dos."
                </p>
            </header>
            <section class="panel">
                <h2 class="panel__title">"Add New Task"</h2>
                <TodoForm/>
            </section>
            <section class="panel">
                <h2 class="panel__title">"Your Tasks"</h2>
                <TodoList todos=todos/>
            </section>
        </div>
    }
}
