//! Heuristic scan for the table-level comment.
//!
//! A column's `COMMENT '...'` and the table's `COMMENT='...'` share the same
//! keyword and quoting, and the table comment sits among trailing clauses
//! (`ENGINE=...`, `DEFAULT CHARSET=...`) that are not parsed and come in no
//! fixed order. Rather than modelling that tail, the scan anchors on the
//! *last* `comment` in the text and only accepts it when no `)` follows it.

use tracing::trace;

use crate::util::rfind_ci;

/// Extract the table comment from the text following the closing `)` of the
/// column list.
///
/// Finds the last case-insensitive `comment`; if a `)` occurs at or after it,
/// the match belongs to something parenthesized and is rejected. Otherwise
/// the comment is the text between the next two single quotes. Every
/// failure yields an empty string.
pub fn extract_table_comment(tail: &str) -> String {
    let Some(keyword) = rfind_ci(tail, "comment") else {
        trace!("no COMMENT keyword after the column list");
        return String::new();
    };

    if let Some(bracket) = tail.rfind(')') {
        if bracket > keyword {
            trace!(keyword, bracket, "last COMMENT precedes a ')', ignoring it");
            return String::new();
        }
    }

    let clause = &tail[keyword..];
    let Some(open) = clause.find('\'') else {
        trace!("COMMENT clause has no quoted text");
        return String::new();
    };
    let text = &clause[open + 1..];
    match text.find('\'') {
        Some(close) => text[..close].to_string(),
        None => {
            trace!("COMMENT clause quote is never closed");
            String::new()
        }
    }
}
