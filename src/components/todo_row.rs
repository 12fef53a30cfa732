//! One record in the to-do list: toggle, edit and delete controls.
//!
//! DESIGN
//! ======
//! The checkbox reflects the last fetch only. Clicking it sends the inverted
//! record and waits for the page re-fetch; a failed toggle leaves the box as
//! it was and shows the error under the row.

#[cfg(test)]
#[path = "todo_row_test.rs"]
mod todo_row_test;

use leptos::prelude::*;

use crate::app::use_config;
use crate::net::api::ApiClient;
use crate::net::types::Todo;
use crate::state::editor::EditorState;
use crate::state::page::PageData;
use crate::state::row::{RowMutation, RowState, settle};

/// Inline `animation-delay` so rows appear one after another, 0.1s apart.
fn appear_delay_style(index: usize) -> String {
    format!("animation-delay: {}.{}s", index / 10, index % 10)
}

#[component]
pub fn TodoRow(todo: Todo, index: usize, editor: RwSignal<EditorState>) -> impl IntoView {
    let page = expect_context::<PageData>();
    let config = use_config();
    let row = RwSignal::new(RowState::default());

    let run = Callback::new(move |mutation: RowMutation| {
        let Some(mutation) = row.try_update(|r| r.begin(mutation)).flatten() else {
            return;
        };
        let api = ApiClient::new(&config);
        leptos::task::spawn_local(async move {
            let result = mutation.send(&api).await;
            if settle(row, &mutation, result) {
                page.refresh();
            }
        });
    });

    let completed = todo.completed;
    let pending = move || row.with(|r| r.pending);
    let toggle = RowMutation::toggle(&todo);
    let delete = RowMutation::delete(&todo);
    let edit_target = todo.clone();

    view! {
        <div
            class="todo-row"
            class:todo-row--odd=index % 2 == 1
            class:todo-row--done=completed
            style=appear_delay_style(index)
        >
            <div class="todo-row__main">
                <button
                    class="checkbox-toggle"
                    class:task-complete=completed
                    disabled=pending
                    on:click=move |_| run.run(toggle.clone())
                >
                    <input type="checkbox" prop:checked=completed readonly=true tabindex="-1"/>
                    <span class="checkmark"></span>
                </button>
                <span class="todo-row__task" class:todo-row__task--done=completed>
                    {todo.task}
                </span>
            </div>
            <div class="todo-row__actions">
                <button
                    class="todo-row__edit"
                    on:click=move |_| editor.update(|s| s.open(edit_target.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="todo-row__delete"
                    disabled=pending
                    on:click=move |_| run.run(delete.clone())
                >
                    "Delete"
                </button>
            </div>
            <Show when=move || row.with(|r| r.error.is_some())>
                <p class="todo-row__error">{move || row.with(|r| r.error.clone())}</p>
            </Show>
        </div>
    }
}
