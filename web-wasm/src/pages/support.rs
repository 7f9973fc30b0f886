//! Support page: FAQ accordion and contact details

use leptos::prelude::*;

use crate::components::accordion::Accordion;

const FAQ: &[(&str, &str)] = &[
    (
        "How long does it take to resolve a complaint?",
        "Most complaints are reviewed within 2-3 working days. Resolution \
         time depends on the department handling your issue.",
    ),
    (
        "Can I attach photos to my complaint?",
        "Yes. Use the dashboard to attach up to 10MB per image. Only image \
         files are accepted.",
    ),
    (
        "What if my issue doesn't fit any department?",
        "Choose \"Others\" in the department dropdown and name the \
         department yourself.",
    ),
    (
        "Where are my reports stored?",
        "Reports are kept on this device in your browser. Clearing site \
         data removes them.",
    ),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <section class="support">
            <h2>"Support"</h2>
            <p class="text-muted">"Frequently asked questions"</p>

            <Accordion items=FAQ.to_vec() />

            <div class="contact">
                <h3>"Still need help?"</h3>
                <p>"Write to us at support@communityfix.example"</p>
            </div>
        </section>
    }
}
