//! Page dispatch and the navigation primitive
//!
//! The site is multi-page: every HTML shell loads the same bundle and
//! the app picks its page component from the current pathname.

/// Pages served by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Auth,
    Dashboard,
    ManualComplaint,
    MyReports,
    Support,
}

impl Page {
    /// Maps a location pathname onto a page, defaulting to Auth.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('/').next().unwrap_or("") {
            "dashboard.html" => Page::Dashboard,
            "manual-complaint.html" => Page::ManualComplaint,
            "my-reports.html" => Page::MyReports,
            "support.html" => Page::Support,
            _ => Page::Auth,
        }
    }
}

/// Current page, resolved from `window.location` at mount time.
pub fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

/// Redirects the current view to the named page.
pub fn redirect(page: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(page) {
            log::error!("navigation to {page} failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pages_resolve_from_full_paths() {
        assert_eq!(Page::from_path("/app/dashboard.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/manual-complaint.html"), Page::ManualComplaint);
        assert_eq!(Page::from_path("my-reports.html"), Page::MyReports);
        assert_eq!(Page::from_path("/support.html"), Page::Support);
    }

    #[test]
    fn unknown_paths_fall_back_to_auth() {
        assert_eq!(Page::from_path("/"), Page::Auth);
        assert_eq!(Page::from_path("/index.html"), Page::Auth);
        assert_eq!(Page::from_path(""), Page::Auth);
    }
}
