//! CommunityFix Common Library
//!
//! Domain logic shared with the web front end: report records and
//! draft validation, the storage-backed report store, and the upload
//! selection state machine. No browser dependency; everything here
//! runs under plain `cargo test`.

pub mod report;
pub mod store;
pub mod upload;

pub use report::{DraftError, Report, ReportDraft, DEPARTMENTS, OTHERS_DEPARTMENT};
pub use store::{ReportStore, StorageBackend, StorageError, REPORTS_KEY};
pub use upload::{Admitted, BatchTooLarge, FileMeta, Selection, MAX_UPLOAD_BYTES};
