//! Modal dialog for editing one task's text.

use leptos::prelude::*;

use crate::app::use_config;
use crate::net::api::ApiClient;
use crate::net::store::RecordStore;
use crate::state::editor::{EditorState, KeyCommand};
use crate::state::page::PageData;

/// Dialog shown while the list's editing slot is open. Escape cancels, Enter
/// saves; clicking the backdrop cancels as well.
#[component]
pub fn TodoEditor(editor: RwSignal<EditorState>) -> impl IntoView {
    let page = expect_context::<PageData>();
    let config = use_config();

    let save = Callback::new(move |()| {
        let Some(update) = editor.try_update(EditorState::begin_save).flatten() else {
            return;
        };
        let api = ApiClient::new(&config);
        leptos::task::spawn_local(async move {
            let result = api.update_todo(&update).await;
            if editor.try_update(|s| s.finish_save(update.id, result)).unwrap_or(false) {
                page.refresh();
            }
        });
    });
    let cancel = Callback::new(move |()| editor.update(EditorState::cancel));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        match editor.with_untracked(|s| s.key_command(&ev.key())) {
            KeyCommand::Cancel => {
                ev.prevent_default();
                cancel.run(());
            }
            KeyCommand::Save => {
                ev.prevent_default();
                save.run(());
            }
            KeyCommand::None => {}
        }
    };

    let saving = move || editor.with(EditorState::is_saving);

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div class="dialog dialog--todo-editor" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Task"</h2>
                <Show when=move || editor.with(|s| s.error().is_some())>
                    <div class="form-error">{move || editor.with(EditorState::error)}</div>
                </Show>
                <label class="dialog__label" for="edit-task">
                    "Task Description"
                </label>
                <input
                    class="dialog__input"
                    type="text"
                    id="edit-task"
                    placeholder="Edit your task here..."
                    autofocus=true
                    prop:value=move || editor.with(EditorState::draft)
                    on:input=move |ev| editor.update(|s| s.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <div class="dialog__actions">
                    <button class="btn" type="button" disabled=saving on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        class:btn--busy=saving
                        type="button"
                        disabled=saving
                        on:click=move |_| save.run(())
                    >
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
