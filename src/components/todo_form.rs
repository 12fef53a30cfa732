//! Creation form for new tasks.

use leptos::prelude::*;

use crate::app::use_config;
use crate::net::api::ApiClient;
use crate::net::store::RecordStore;
use crate::state::create_form::CreateForm;
use crate::state::page::PageData;

/// Task input plus submit button. On success the input is cleared and the
/// page re-fetches; on failure the error is shown above the input and the
/// text is kept for a retry.
#[component]
pub fn TodoForm() -> impl IntoView {
    let page = expect_context::<PageData>();
    let config = use_config();
    let form = RwSignal::new(CreateForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(CreateForm::begin_submit).flatten() else {
            return;
        };
        let api = ApiClient::new(&config);
        leptos::task::spawn_local(async move {
            let result = api.create_todo(&request).await;
            if form.try_update(|f| f.finish_submit(result)).unwrap_or(false) {
                page.refresh();
            }
        });
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <form class="todo-form" on:submit=on_submit>
            <Show when=move || form.with(|f| f.error.is_some())>
                <div class="form-error">{move || form.with(|f| f.error.clone())}</div>
            </Show>
            <label class="todo-form__label" for="task">
                "Task Description"
            </label>
            <input
                class="todo-form__input"
                type="text"
                id="task"
                name="task"
                required=true
                placeholder="Enter your task here..."
                prop:value=move || form.with(|f| f.task.clone())
                on:input=move |ev| form.update(|f| f.set_task(event_target_value(&ev)))
            />
            <div class="todo-form__actions">
                <button
                    class="btn btn--primary"
                    class:btn--busy=submitting
                    type="submit"
                    disabled=submitting
                >
                    {move || if submitting() { "Adding..." } else { "Add Task" }}
                </button>
            </div>
        </form>
    }
}
