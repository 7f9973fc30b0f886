//! Preview grid for the staged selection
//!
//! Pure projection of the selection signal, keyed by each file's
//! stable id. Removal reports the id, never a render-time index.

use leptos::prelude::*;

use crate::preview::PreviewFile;

#[component]
pub fn FileGrid<F>(files: Signal<Vec<PreviewFile>>, on_remove: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="filesGrid" class="files-grid">
            <For
                each=move || files.get()
                key=|file| file.id.clone()
                children=move |file| {
                    let on_remove = on_remove.clone();
                    let file_id = file.id.clone();
                    view! {
                        <div class="file-item">
                            <img
                                src=file.preview_url.clone()
                                alt=file.name.clone()
                                class="file-image"
                            />
                            <button
                                class="file-remove"
                                on:click=move |_| on_remove(file_id.clone())
                            >
                                "✕"
                            </button>
                            <div class="file-info">
                                <p class="file-name">{file.name.clone()}</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
