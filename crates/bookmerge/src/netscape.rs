//! Netscape bookmark file rendering.
//!
//! Emits the interchange format browsers produce on export: a doctype and
//! content-type preamble, a title and top-level heading, then one `<DT><H3>`
//! block per label group with a nested `<DL><p>` list of `<DT><A>` records.
//! Every record in a group is displayed with the group's label; per-link
//! titles do not survive the merge.

use crate::store::MergeStore;
use std::fmt::Write;

/// Default file name for the merged document.
pub const DEFAULT_EXPORT_NAME: &str = "merged-bookmarks.html";

const PREAMBLE: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
<TITLE>Bookmarks</TITLE>\n\
<H1>Merged Bookmarks</H1>\n\
<DL><p>\n";

/// Render the store as a complete bookmark document.
///
/// Groups appear in insertion order, URLs within a group in first-ingested
/// order. Labels and URLs are escaped for the format's structural
/// characters, so re-parsing the output recovers the same values.
pub fn render(store: &MergeStore) -> String {
    let mut out = String::from(PREAMBLE);

    for (label, urls) in store.groups() {
        let heading = escape(label);
        let _ = write!(out, "    <DT><H3>{heading}</H3>\n    <DL><p>\n");
        for url in urls {
            let _ = write!(
                out,
                "        <DT><A HREF=\"{}\">{heading}</A>\n",
                escape(url)
            );
        }
        out.push_str("    </DL><p>\n");
    }

    out.push_str("</DL></p>\n");
    out
}

/// Escape the characters with structural meaning in the output markup.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
