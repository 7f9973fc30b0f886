//! Site header with the account dropdown

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::nav;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Clicking anywhere outside the trigger closes the menu. The
    // listener lives for the page, like the rest of the shell.
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_menu_open.set(false);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    view! {
        <header class="header">
            <a class="logo" href="dashboard.html">"CommunityFix"</a>
            <nav class="nav-links">
                <a href="dashboard.html">"Dashboard"</a>
                <a href="manual-complaint.html">"Report a Problem"</a>
                <a href="my-reports.html">"My Reports"</a>
                <a href="support.html">"Support"</a>
            </nav>
            <div class="dropdown" class:active=move || menu_open.get()>
                <button
                    class="dropdown-trigger"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_menu_open.update(|open| *open = !*open);
                    }
                >
                    "Account"
                </button>
                <div class="dropdown-menu">
                    <a href="my-reports.html">"My Reports"</a>
                    <button on:click=move |_| nav::redirect("index.html")>"Log out"</button>
                </div>
            </div>
        </header>
    }
}
