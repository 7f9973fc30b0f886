//! Manual complaint form
//!
//! Validates in form order, resolves the department, persists the
//! report, then confirms and redirects to My Reports. The submit
//! button holds a loading state across the simulated latency.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use communityfix_common::report::{ReportDraft, DEPARTMENTS, OTHERS_DEPARTMENT};

use crate::nav;
use crate::storage;
use crate::toast::use_toaster;

const CONFIRM_DELAY_MS: u32 = 600;
const REDIRECT_DELAY_MS: u32 = 600;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[component]
pub fn ManualComplaintPage() -> impl IntoView {
    let toaster = use_toaster();

    let (problem, set_problem) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (other_department, set_other_department) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let shows_other = move || department.get() == OTHERS_DEPARTMENT;

    let on_department_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if value != OTHERS_DEPARTMENT {
            set_other_department.set(String::new());
        }
        set_department.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let draft = ReportDraft {
            problem: problem.get_untracked(),
            department: department.get_untracked(),
            other_department: other_department.get_untracked(),
            location: location.get_untracked(),
        };

        let report = match draft.resolve(now_ms(), &now_iso()) {
            Ok(report) => report,
            Err(err) => {
                toaster.notify("Validation error", &err.to_string());
                set_submitting.set(false);
                return;
            }
        };

        storage::report_store().save_report(report);

        Timeout::new(CONFIRM_DELAY_MS, move || {
            toaster.notify(
                "Report submitted!",
                "Your manual complaint was submitted successfully.",
            );
            set_problem.set(String::new());
            set_department.set(String::new());
            set_other_department.set(String::new());
            set_location.set(String::new());
            set_submitting.set(false);

            // Let the user see their report in the list.
            Timeout::new(REDIRECT_DELAY_MS, || nav::redirect("my-reports.html")).forget();
        })
        .forget();
    };

    view! {
        <section class="manual-complaint">
            <h2>"File a Complaint"</h2>

            <form id="manualForm" on:submit=on_submit>
                <div class="form-group">
                    <label for="problem">"Describe the problem"</label>
                    <textarea
                        id="problem"
                        placeholder="What's wrong?"
                        prop:value=move || problem.get()
                        on:input=move |ev| set_problem.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="department">"Department"</label>
                    <select
                        id="department"
                        prop:value=move || department.get()
                        on:change=on_department_change
                    >
                        <option value="">"Select a department"</option>
                        {DEPARTMENTS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Show when=shows_other>
                    <div class="form-group" id="otherDeptGroup">
                        <label for="otherDept">"Which department?"</label>
                        <input
                            type="text"
                            id="otherDept"
                            placeholder="e.g. Sanitation"
                            prop:value=move || other_department.get()
                            on:input=move |ev| set_other_department.set(event_target_value(&ev))
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <label for="locationText">"Location"</label>
                    <input
                        type="text"
                        id="locationText"
                        placeholder="Street, landmark, or area"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    class:loading=move || submitting.get()
                    disabled=move || submitting.get()
                >
                    "Submit complaint"
                </button>
            </form>
        </section>
    }
}
