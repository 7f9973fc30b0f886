//! Application shell: page dispatch and the shared toast surface

use leptos::prelude::*;

use crate::components::header::Header;
use crate::nav::{current_page, Page};
use crate::pages::{
    auth::AuthPage, dashboard::DashboardPage, manual_form::ManualComplaintPage,
    my_reports::MyReportsPage, support::SupportPage,
};
use crate::toast::{Toast, ToastMessage, Toaster};

#[component]
pub fn App() -> impl IntoView {
    let (toast, set_toast) = signal(None::<ToastMessage>);
    provide_context(Toaster::new(set_toast));

    let page = current_page();

    view! {
        <div class="container">
            <Show when=move || page != Page::Auth>
                <Header />
            </Show>
            {match page {
                Page::Auth => view! { <AuthPage /> }.into_any(),
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::ManualComplaint => view! { <ManualComplaintPage /> }.into_any(),
                Page::MyReports => view! { <MyReportsPage /> }.into_any(),
                Page::Support => view! { <SupportPage /> }.into_any(),
            }}
            <Toast message=toast />
        </div>
    }
}
