//! Merge session lifecycle and the file intake boundary.
//!
//! A session owns the deduplicating store for one merge run: created empty,
//! fed any number of files, rendered once at the end, dropped with its
//! state. The only hard rejection happens here, before parsing: a file
//! whose name does not look like a bookmark export never reaches the
//! extractor.

use crate::extract::extract_links;
use crate::netscape;
use crate::store::MergeStore;
use thiserror::Error;
use tracing::debug;

/// Extension accepted at the intake boundary.
pub const BOOKMARK_EXT: &str = ".html";

/// Rejection produced at the intake boundary.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The file name does not carry the bookmark-export extension.
    #[error("invalid file type: {name} (expected a {BOOKMARK_EXT} bookmark export)")]
    InvalidFileType { name: String },
}

/// Per-file result of a successful intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Name of the ingested file.
    pub file: String,
    /// Anchors found in the document.
    pub found: usize,
    /// Links newly added to the store.
    pub accepted: usize,
    /// Links dropped as duplicates of already-seen URLs.
    pub duplicates: usize,
}

/// One merge run: an owned store plus the intake rules around it.
#[derive(Debug, Default)]
pub struct MergeSession {
    store: MergeStore,
}

impl MergeSession {
    /// Start a session with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a file name against the accepted extension.
    pub fn accepts(name: &str) -> bool {
        name.ends_with(BOOKMARK_EXT)
    }

    /// Extract and fold one file into the session.
    ///
    /// Rejects non-`.html` names before parsing; the session is untouched
    /// on rejection and later files are unaffected. Extraction is
    /// tolerant, so a malformed document simply contributes fewer (or
    /// zero) links.
    pub fn ingest_file(&mut self, name: &str, html: &str) -> Result<FileReport, IntakeError> {
        if !Self::accepts(name) {
            return Err(IntakeError::InvalidFileType {
                name: name.to_string(),
            });
        }

        let entries = extract_links(html);
        let found = entries.len();
        let outcome = self.store.ingest(entries);
        debug!(
            file = name,
            found,
            accepted = outcome.accepted,
            "ingested file"
        );

        Ok(FileReport {
            file: name.to_string(),
            found,
            accepted: outcome.accepted,
            duplicates: outcome.duplicates,
        })
    }

    /// Read access to the accumulated state.
    pub fn store(&self) -> &MergeStore {
        &self.store
    }

    /// Render the merged bookmark document.
    pub fn render(&self) -> String {
        netscape::render(&self.store)
    }
}
