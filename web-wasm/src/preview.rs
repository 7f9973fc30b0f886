//! Staged upload files and their preview object URLs

use communityfix_common::upload::FileMeta;
use web_sys::Url;

/// A file staged for upload, with an object URL for its thumbnail.
///
/// Only metadata is kept after admission; the bytes stay in the
/// browser's blob store behind the object URL and are never
/// transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    pub id: String,
    pub name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub preview_url: String,
}

impl PreviewFile {
    pub fn from_file(file: &web_sys::File) -> Self {
        let name = file.name();
        let preview_url = Url::create_object_url_with_blob(file).unwrap_or_default();
        Self {
            id: format!("{}-{}", name, js_sys::Date::now()),
            name,
            content_type: file.type_(),
            size_bytes: file.size() as u64,
            preview_url,
        }
    }

    /// Releases the object URL backing the thumbnail. Must be called on
    /// every path where the file leaves the selection, or the blob
    /// store grows for the life of the page.
    pub fn release(self) {
        if !self.preview_url.is_empty() {
            let _ = Url::revoke_object_url(&self.preview_url);
        }
    }
}

impl FileMeta for PreviewFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
