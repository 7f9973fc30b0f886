//! Toast notification surface
//!
//! One toast element per page. [`Toaster::notify`] swaps the content in
//! and arms a dismiss timer. Timers are fire-and-forget with no
//! cancellation: a second notification before dismissal lets both
//! timers run, the later one winning.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
}

/// Handle for raising notifications, provided as context by the app
/// shell so any page can reach it.
#[derive(Clone, Copy)]
pub struct Toaster {
    message: WriteSignal<Option<ToastMessage>>,
}

impl Toaster {
    pub fn new(message: WriteSignal<Option<ToastMessage>>) -> Self {
        Self { message }
    }

    /// Shows a transient notification that auto-dismisses after 3s.
    pub fn notify(&self, title: &str, description: &str) {
        self.message.set(Some(ToastMessage {
            title: title.to_string(),
            description: description.to_string(),
        }));

        let message = self.message;
        Timeout::new(TOAST_DISMISS_MS, move || message.set(None)).forget();
    }
}

/// The shared toaster, panicking if the app shell forgot to provide it.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toast(message: ReadSignal<Option<ToastMessage>>) -> impl IntoView {
    view! {
        <div id="toast" class="toast" class:show=move || message.get().is_some()>
            {move || message.get().map(|m| view! {
                <div class="toast-title">{m.title}</div>
                <div class="toast-description">{m.description}</div>
            })}
        </div>
    }
}
