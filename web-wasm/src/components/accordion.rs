//! Single-active accordion

use leptos::prelude::*;

#[component]
pub fn Accordion(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    // One item open at a time; clicking the open item closes it.
    let (active, set_active) = signal(None::<usize>);

    view! {
        <div class="accordion">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, (question, answer))| {
                    view! {
                        <div class="accordion-item" class:active=move || active.get() == Some(index)>
                            <button
                                class="accordion-trigger"
                                on:click=move |_| {
                                    set_active.update(|a| {
                                        *a = if *a == Some(index) { None } else { Some(index) };
                                    });
                                }
                            >
                                {question}
                            </button>
                            <div class="accordion-content">
                                <p>{answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
