//! My Reports page: stored complaints, newest first

use leptos::prelude::*;

use crate::storage;

#[component]
pub fn MyReportsPage() -> impl IntoView {
    // Loaded once at mount; navigation reloads the page.
    let reports = storage::report_store().list_reports();

    let body = if reports.is_empty() {
        view! {
            <p class="text-muted">
                "No reports yet. Submit your first complaint to see it here."
            </p>
        }
        .into_any()
    } else {
        view! {
            <div class="reports-list">
                {reports
                    .into_iter()
                    .map(|report| {
                        view! {
                            <div class="report-card">
                                <div class="report-header">
                                    <span class="report-id">{report.id}</span>
                                    <span class="report-status">{report.status}</span>
                                </div>
                                <p class="report-problem">{report.problem}</p>
                                <div class="report-meta">
                                    <span>{report.department}</span>
                                    <span>{report.location}</span>
                                    <span>{report.date}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="reports">
            <h2>"My Reports"</h2>
            {body}
        </section>
    }
}
