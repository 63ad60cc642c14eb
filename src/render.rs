//! Presentation data contract for the review view
//!
//! Turns a [`DiffReport`](crate::diff::DiffReport) into ordered rows for the
//! two-column "old vs. new" screen. Unchanged blocks collapse into single
//! full-width rows; everything else becomes a left/right pair. How the rows
//! are drawn (colors, strikethrough, inline vs. columns) is the UI's concern.

use crate::diff::{DiffEntry, DiffReport, WordDiffToken};

/// One row of the review screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewRow {
    /// Identical on both sides; rendered once, full width.
    Unchanged(String),
    /// Old/new pair. A missing side means the block exists only on the other
    /// one. `text_diff` is non-empty only for modified pairs with text.
    Pair {
        old: Option<String>,
        new: Option<String>,
        text_diff: Vec<WordDiffToken>,
    },
}

/// Options injected by the caller, never read from globals.
#[derive(Debug, Clone, Copy)]
pub struct ReviewOptions {
    /// Include unchanged blocks, or show changes only.
    pub show_unchanged: bool,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            show_unchanged: true,
        }
    }
}

/// Flatten a report into display rows, in entry order.
pub fn review_rows(report: &DiffReport, options: ReviewOptions) -> Vec<ReviewRow> {
    let mut rows = Vec::with_capacity(report.entries.len());

    for entry in &report.entries {
        match entry {
            DiffEntry::Unchanged { block, .. } => {
                if options.show_unchanged {
                    rows.push(ReviewRow::Unchanged(block.display_label()));
                }
            }
            DiffEntry::Added { new_block, .. } => rows.push(ReviewRow::Pair {
                old: None,
                new: Some(new_block.display_label()),
                text_diff: Vec::new(),
            }),
            DiffEntry::Removed { old_block, .. } => rows.push(ReviewRow::Pair {
                old: Some(old_block.display_label()),
                new: None,
                text_diff: Vec::new(),
            }),
            DiffEntry::Modified {
                old_block,
                new_block,
                text_diff,
                ..
            } => rows.push(ReviewRow::Pair {
                old: Some(old_block.display_label()),
                new: Some(new_block.display_label()),
                text_diff: text_diff.clone(),
            }),
        }
    }
    rows
}

/// `+a -r ~m` badge string for the revision list.
pub fn summary(report: &DiffReport) -> String {
    format!(
        "+{} -{} ~{}",
        report.additions, report.removals, report.modifications
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ContentBlock;
    use crate::diff::compare;

    #[test]
    fn unchanged_blocks_become_single_rows() {
        let content = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::paragraph("b"),
        ];
        let report = compare(&content, &content);
        let rows = review_rows(&report, ReviewOptions::default());
        assert_eq!(
            rows,
            vec![
                ReviewRow::Unchanged("a".into()),
                ReviewRow::Unchanged("b".into()),
            ]
        );
    }

    #[test]
    fn modified_block_becomes_pair_row() {
        let old = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::paragraph("old words"),
            ContentBlock::paragraph("c"),
        ];
        let new = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::paragraph("new words"),
            ContentBlock::paragraph("c"),
        ];
        let rows = review_rows(&compare(&old, &new), ReviewOptions::default());
        assert_eq!(rows.len(), 3);
        match &rows[1] {
            ReviewRow::Pair {
                old, new, text_diff, ..
            } => {
                assert_eq!(old.as_deref(), Some("old words"));
                assert_eq!(new.as_deref(), Some("new words"));
                assert!(!text_diff.is_empty());
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }

    #[test]
    fn changes_only_mode_drops_unchanged_rows() {
        let old = vec![
            ContentBlock::paragraph("same"),
            ContentBlock::paragraph("gone"),
        ];
        let new = vec![ContentBlock::paragraph("same")];
        let rows = review_rows(
            &compare(&old, &new),
            ReviewOptions {
                show_unchanged: false,
            },
        );
        assert_eq!(rows.len(), 1);
        assert!(matches!(rows[0], ReviewRow::Pair { new: None, .. }));
    }

    #[test]
    fn textless_blocks_use_placeholder_labels() {
        let old = vec![ContentBlock::image("https://example.com/a.jpg", None)];
        let new = vec![ContentBlock::image("https://example.com/b.jpg", None)];
        let rows = review_rows(&compare(&old, &new), ReviewOptions::default());
        match &rows[0] {
            ReviewRow::Pair { old, new, .. } => {
                assert_eq!(old.as_deref(), Some("[image block]"));
                assert_eq!(new.as_deref(), Some("[image block]"));
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }

    #[test]
    fn summary_badge() {
        let old = vec![ContentBlock::paragraph("x")];
        let new = vec![
            ContentBlock::paragraph("y"),
            ContentBlock::paragraph("z"),
        ];
        assert_eq!(summary(&compare(&old, &new)), "+1 -0 ~1");
    }
}
