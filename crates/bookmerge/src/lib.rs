//! Bookmark export parsing and merging.
//!
//! Takes any number of browser bookmark exports (Netscape bookmark HTML),
//! extracts their links, deduplicates URLs across all of them, groups the
//! survivors by link label, and renders a single merged export in the same
//! format.
//!
//! - [`extract`]: tolerant anchor extraction from export HTML.
//! - [`store`]: the session-wide dedup/group accumulator.
//! - [`netscape`]: rendering back into the interchange format.
//! - [`session`]: merge-run lifecycle and the file intake boundary.

pub mod extract;
pub mod netscape;
pub mod session;
pub mod store;

pub use extract::{extract_links, LinkEntry};
pub use netscape::DEFAULT_EXPORT_NAME;
pub use session::{FileReport, IntakeError, MergeSession};
pub use store::{IngestOutcome, MergeStore};
