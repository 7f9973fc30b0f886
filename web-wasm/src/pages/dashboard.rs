//! Dashboard page: stage photos for a report
//!
//! Owns the upload selection for the session. Submission is simulated:
//! a success toast, then the selection resets after a short delay. No
//! bytes leave the browser.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::File;

use communityfix_common::upload::Selection;

use crate::components::{file_grid::FileGrid, upload_area::UploadArea};
use crate::preview::PreviewFile;
use crate::toast::use_toaster;

const SUBMIT_RESET_MS: u32 = 1_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toaster = use_toaster();
    let selection = RwSignal::new(Selection::<PreviewFile>::new());

    let on_files_offered = move |batch: Vec<File>| {
        let staged: Vec<PreviewFile> = batch.iter().map(PreviewFile::from_file).collect();

        let Some(outcome) = selection.try_update(|s| s.admit(staged)) else {
            return;
        };

        match outcome {
            Ok(admitted) => {
                if !admitted.non_images.is_empty() {
                    toaster.notify("Invalid files detected", "Only image files are allowed");
                }
                for file in admitted.non_images {
                    file.release();
                }
            }
            Err(rejected) => {
                if !rejected.non_images.is_empty() {
                    toaster.notify("Invalid files detected", "Only image files are allowed");
                }
                toaster.notify("File too large", "One or more files exceed the 10MB limit");
                for file in rejected.images.into_iter().chain(rejected.non_images) {
                    file.release();
                }
            }
        }
    };

    // Resolve the index from the id at click time; render-time indices
    // go stale once the selection mutates.
    let on_remove = move |id: String| {
        let removed = selection.try_update(|s| {
            let index = s.items().iter().position(|f| f.id == id);
            index.and_then(|i| s.remove_at(i))
        });
        if let Some(Some(file)) = removed {
            file.release();
        }
    };

    let release_all = move || {
        if let Some(removed) = selection.try_update(|s| s.clear()) {
            for file in removed {
                file.release();
            }
        }
    };

    let on_clear = move |_| release_all();

    let on_submit = move |_| {
        let count = selection.with(|s| s.len());
        if count == 0 {
            toaster.notify("No files selected", "Please select at least one image to upload");
            return;
        }

        toaster.notify(
            "Report submitted!",
            &format!("{count} image(s) uploaded successfully"),
        );

        // Simulated acknowledgment; reset once the toast has landed.
        Timeout::new(SUBMIT_RESET_MS, move || release_all()).forget();
    };

    let files = Signal::derive(move || selection.with(|s| s.items().to_vec()));
    let count = move || selection.with(|s| s.len());

    view! {
        <section class="dashboard">
            <h2>"Report with Photos"</h2>
            <p class="text-muted">"Attach photos of the problem you want to report."</p>

            <UploadArea on_files_offered=on_files_offered />

            <Show when=move || { count() > 0 }>
                <div id="filesContainer" class="files-container">
                    <div class="files-header">
                        <span id="fileCount">{count}</span>
                        <span>" file(s) selected"</span>
                        <button
                            id="clearAllBtn"
                            class="btn btn-secondary btn-small"
                            on:click=on_clear
                        >
                            "Clear all"
                        </button>
                    </div>
                    <FileGrid files=files on_remove=on_remove />
                    <button id="submitBtn" class="btn btn-primary" on:click=on_submit>
                        "Submit report"
                    </button>
                </div>
            </Show>
        </section>
    }
}
