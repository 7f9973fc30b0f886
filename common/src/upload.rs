//! Upload selection state: admission rules and mutations
//!
//! Pure state machine for the files staged on the dashboard. Rendering
//! lives in the web crate; everything here is synchronous and testable
//! without a browser.
//!
//! Admission policy, deliberately asymmetric:
//! - non-image candidates are filtered out per file and handed back;
//! - an oversized image aborts the ENTIRE batch, valid images included.

/// Per-file size ceiling: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Metadata the admission rules need from a candidate file.
pub trait FileMeta {
    fn file_name(&self) -> &str;
    fn content_type(&self) -> &str;
    fn size_bytes(&self) -> u64;
}

/// Outcome of a successful admission call.
#[derive(Debug)]
pub struct Admitted<T> {
    /// How many images were appended to the selection.
    pub accepted: usize,
    /// Non-image candidates, handed back so the caller can release any
    /// preview resources tied to them.
    pub non_images: Vec<T>,
}

/// At least one image exceeded [`MAX_UPLOAD_BYTES`]; nothing from the
/// call was admitted and every candidate is handed back.
#[derive(Debug)]
pub struct BatchTooLarge<T> {
    /// Image candidates from the call, oversized ones included.
    pub images: Vec<T>,
    /// Non-image candidates from the same call.
    pub non_images: Vec<T>,
}

/// Ordered list of files staged for a report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<T> {
    items: Vec<T>,
}

impl<T: FileMeta> Selection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Validates `candidates` and appends the admitted images to the
    /// existing selection, preserving prior entries.
    ///
    /// Type rejection filters per file; a size violation refuses the
    /// whole batch and leaves the selection untouched.
    pub fn admit(&mut self, candidates: Vec<T>) -> Result<Admitted<T>, BatchTooLarge<T>> {
        let (images, non_images): (Vec<T>, Vec<T>) = candidates
            .into_iter()
            .partition(|f| f.content_type().starts_with("image/"));

        if images.iter().any(|f| f.size_bytes() > MAX_UPLOAD_BYTES) {
            return Err(BatchTooLarge { images, non_images });
        }

        let accepted = images.len();
        self.items.extend(images);
        Ok(Admitted { accepted, non_images })
    }

    /// Removes and returns the file at `index`, if in range.
    ///
    /// Callers resolving a click must derive `index` from the item's
    /// identity at call time; render-time indices go stale as soon as
    /// the selection mutates.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Empties the selection unconditionally, returning the removed
    /// files for resource release.
    pub fn clear(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    /// Current selection, in admission order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
