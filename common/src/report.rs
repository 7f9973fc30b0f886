//! Report records and manual-form draft validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel department value meaning "user supplies free text".
pub const OTHERS_DEPARTMENT: &str = "others";

/// Enumerated department choices offered by the manual form, as
/// `(value, label)` pairs in display order.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("roads", "Roads & Infrastructure"),
    ("water", "Water Supply"),
    ("waste", "Waste Management"),
    ("electricity", "Electricity"),
    ("parks", "Parks & Recreation"),
    (OTHERS_DEPARTMENT, "Others"),
];

/// A persisted complaint record.
///
/// Serialized camelCase to match the stored JSON layout; `kind` goes on
/// the wire as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub problem: String,
    /// Resolved department label. Never the literal `"others"`: when the
    /// user picked that option this holds their free-text entry instead.
    pub department: String,
    /// The original dropdown selection, preserved even when overridden.
    pub raw_department_value: String,
    pub location: String,
    /// ISO-8601 creation timestamp.
    pub date: String,
    pub status: String,
}

/// Why a draft failed validation. Display strings double as the
/// user-facing toast messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please describe the problem")]
    EmptyProblem,

    #[error("Please choose a department")]
    MissingDepartment,

    #[error("Please specify the department under \"Others\"")]
    MissingOtherDepartment,

    #[error("Please enter a location")]
    EmptyLocation,
}

/// Raw manual-form input, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub problem: String,
    pub department: String,
    pub other_department: String,
    pub location: String,
}

impl ReportDraft {
    /// Validates the draft and resolves it into a [`Report`].
    ///
    /// Checks run in form order (problem, department, other-department,
    /// location) and the first failure wins. `timestamp_ms` feeds the
    /// generated id and `date_iso` the creation date; both come from the
    /// host clock so resolution stays deterministic under test.
    pub fn resolve(&self, timestamp_ms: u64, date_iso: &str) -> Result<Report, DraftError> {
        let problem = self.problem.trim();
        if problem.is_empty() {
            return Err(DraftError::EmptyProblem);
        }

        let department = self.department.trim();
        if department.is_empty() {
            return Err(DraftError::MissingDepartment);
        }

        let other = self.other_department.trim();
        if department == OTHERS_DEPARTMENT && other.is_empty() {
            return Err(DraftError::MissingOtherDepartment);
        }

        let location = self.location.trim();
        if location.is_empty() {
            return Err(DraftError::EmptyLocation);
        }

        let resolved = if department == OTHERS_DEPARTMENT {
            other
        } else {
            department
        };

        Ok(Report {
            id: format!("rpt_{timestamp_ms}"),
            kind: "manual".to_string(),
            problem: problem.to_string(),
            department: resolved.to_string(),
            raw_department_value: department.to_string(),
            location: location.to_string(),
            date: date_iso.to_string(),
            status: "Submitted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReportDraft {
        ReportDraft {
            problem: "Streetlight out on 5th Ave".to_string(),
            department: "electricity".to_string(),
            other_department: String::new(),
            location: "5th Ave & Main St".to_string(),
        }
    }

    #[test]
    fn resolves_enumerated_department() {
        let report = draft().resolve(1_700_000_000_000, "2023-11-14T22:13:20.000Z").unwrap();

        assert_eq!(report.id, "rpt_1700000000000");
        assert_eq!(report.kind, "manual");
        assert_eq!(report.department, "electricity");
        assert_eq!(report.raw_department_value, "electricity");
        assert_eq!(report.status, "Submitted");
        assert_eq!(report.date, "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn others_resolves_to_free_text() {
        let mut d = draft();
        d.department = "others".to_string();
        d.other_department = "Sanitation".to_string();

        let report = d.resolve(1, "2024-01-01T00:00:00.000Z").unwrap();
        assert_eq!(report.department, "Sanitation");
        assert_eq!(report.raw_department_value, "others");
    }

    #[test]
    fn empty_problem_rejected_first() {
        // Everything empty: the problem check must win.
        let d = ReportDraft::default();
        assert_eq!(d.resolve(1, "").unwrap_err(), DraftError::EmptyProblem);
    }

    #[test]
    fn missing_department_rejected() {
        let mut d = draft();
        d.department = "  ".to_string();
        assert_eq!(d.resolve(1, "").unwrap_err(), DraftError::MissingDepartment);
    }

    #[test]
    fn others_without_text_rejected() {
        let mut d = draft();
        d.department = "others".to_string();
        d.other_department = String::new();
        assert_eq!(d.resolve(1, "").unwrap_err(), DraftError::MissingOtherDepartment);
    }

    #[test]
    fn empty_location_rejected() {
        let mut d = draft();
        d.location = "\t".to_string();
        assert_eq!(d.resolve(1, "").unwrap_err(), DraftError::EmptyLocation);
    }

    #[test]
    fn whitespace_is_trimmed_from_fields() {
        let mut d = draft();
        d.problem = "  pothole  ".to_string();
        d.location = " riverside park ".to_string();

        let report = d.resolve(1, "").unwrap();
        assert_eq!(report.problem, "pothole");
        assert_eq!(report.location, "riverside park");
    }

    #[test]
    fn wire_format_uses_camel_case_and_type() {
        let report = draft().resolve(42, "2024-01-01T00:00:00.000Z").unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"type\":\"manual\""));
        assert!(json.contains("\"rawDepartmentValue\":\"electricity\""));
        assert!(!json.contains("\"kind\""));

        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn error_messages_match_toasts() {
        assert_eq!(
            DraftError::MissingOtherDepartment.to_string(),
            "Please specify the department under \"Others\""
        );
        assert_eq!(DraftError::EmptyLocation.to_string(), "Please enter a location");
    }
}
