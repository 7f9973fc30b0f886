//! Auth page: login / register tabs
//!
//! Client-side only: non-empty validation, a simulated success delay,
//! then a redirect to the dashboard. No credentials are stored or
//! transmitted.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use crate::nav;
use crate::toast::use_toaster;

const LOGIN_DELAY_MS: u32 = 600;
const REGISTER_DELAY_MS: u32 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::Login);

    view! {
        <section class="auth">
            <h1 class="logo">"CommunityFix"</h1>

            <div class="tabs">
                <button
                    class="tab-trigger"
                    class:active=move || active_tab.get() == Tab::Login
                    on:click=move |_| set_active_tab.set(Tab::Login)
                >
                    "Login"
                </button>
                <button
                    class="tab-trigger"
                    class:active=move || active_tab.get() == Tab::Register
                    on:click=move |_| set_active_tab.set(Tab::Register)
                >
                    "Register"
                </button>
            </div>

            <div class="tab-content" class:active=move || active_tab.get() == Tab::Login>
                <LoginForm />
            </div>
            <div class="tab-content" class:active=move || active_tab.get() == Tab::Register>
                <RegisterForm />
            </div>
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.trim().is_empty() {
            toaster.notify("Validation error", "Please enter email and password");
            set_submitting.set(false);
            return;
        }

        Timeout::new(LOGIN_DELAY_MS, move || {
            toaster.notify("Welcome back!", "You've successfully logged in.");
            nav::redirect("dashboard.html");
        })
        .forget();
    };

    view! {
        <form id="loginForm" on:submit=on_submit>
            <div class="form-group">
                <label for="login-email">"Email"</label>
                <input
                    type="email"
                    id="login-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="login-password">"Password"</label>
                <input
                    type="password"
                    id="login-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                class:loading=move || submitting.get()
                disabled=move || submitting.get()
            >
                "Log in"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let toaster = use_toaster();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let all_filled = !username.get_untracked().trim().is_empty()
            && !email.get_untracked().trim().is_empty()
            && !password.get_untracked().trim().is_empty();
        if !all_filled {
            toaster.notify("Validation error", "Please fill all fields");
            set_submitting.set(false);
            return;
        }

        Timeout::new(REGISTER_DELAY_MS, move || {
            toaster.notify(
                "Account created!",
                "Welcome to CommunityFix. You can now start reporting issues.",
            );
            nav::redirect("dashboard.html");
        })
        .forget();
    };

    view! {
        <form id="registerForm" on:submit=on_submit>
            <div class="form-group">
                <label for="register-username">"Username"</label>
                <input
                    type="text"
                    id="register-username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="register-email">"Email"</label>
                <input
                    type="email"
                    id="register-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="register-password">"Password"</label>
                <input
                    type="password"
                    id="register-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                class:loading=move || submitting.get()
                disabled=move || submitting.get()
            >
                "Create account"
            </button>
        </form>
    }
}
