//! The editable to-do list and its single editing slot.

use leptos::prelude::*;

use crate::components::todo_editor::TodoEditor;
use crate::components::todo_row::TodoRow;
use crate::net::types::Todo;
use crate::state::editor::EditorState;

pub const EMPTY_LIST_MESSAGE: &str = "No tasks found. Add a new task to get started!";

/// Renders the last fetched collection. The editor slot lives outside the
/// re-rendered rows, so at most one editor is open per list.
#[component]
pub fn TodoList(todos: LocalResource<Vec<Todo>>) -> impl IntoView {
    let editor = RwSignal::new(EditorState::default());

    view! {
        <div class="todo-list">
            <Transition fallback=|| view! { <p class="todo-list__loading">"Loading tasks..."</p> }>
                {move || todos.get().map(|items| render_rows(items, editor))}
            </Transition>
            <Show when=move || editor.with(EditorState::is_open)>
                <TodoEditor editor=editor/>
            </Show>
        </div>
    }
}

fn render_rows(items: Vec<Todo>, editor: RwSignal<EditorState>) -> AnyView {
    if items.is_empty() {
        return view! { <p class="todo-list__empty">{EMPTY_LIST_MESSAGE}</p> }.into_any();
    }
    view! {
        <div class="todo-list__rows">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, todo)| view! { <TodoRow todo=todo index=index editor=editor/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
