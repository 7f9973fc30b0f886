//! Upload drop zone
//!
//! Collects offered files from drag-and-drop or the file picker and
//! hands them to the owner; admission rules live with the selection.

use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList};

#[component]
pub fn UploadArea<F>(on_files_offered: F) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (is_dragging, set_is_dragging) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let offer = {
        let on_files_offered = on_files_offered.clone();
        move |files: FileList| {
            let mut batch = Vec::new();
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    batch.push(file);
                }
            }
            on_files_offered(batch);
        }
    };

    let on_drop = {
        let offer = offer.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragging.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    offer(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = {
        let offer = offer.clone();
        move |_| {
            if let Some(input) = input_ref.get() {
                if let Some(files) = input.files() {
                    offer(files);
                }
                // Reset so the same file can be re-selected
                input.set_value("");
            }
        }
    };

    view! {
        <div
            id="uploadArea"
            class="upload-area"
            class:dragging=move || is_dragging.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop photos here, or click to browse"</p>
            <p class="text-muted">"Images only, up to 10MB each"</p>
            <input
                type="file"
                id="fileInput"
                accept="image/*"
                multiple
                style="display: none"
                node_ref=input_ref
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
