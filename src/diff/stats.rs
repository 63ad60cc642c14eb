use super::types::DiffEntry;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub added_chars: usize,
    pub removed_chars: usize,
}

/// Character-level change totals for the `+N -M` badge shown next to a
/// revision in the list. Counts chars, not bytes, so CJK copy counts right.
pub fn character_stats(entries: &[DiffEntry]) -> DiffStats {
    let mut stats = DiffStats::default();

    for entry in entries {
        match entry {
            DiffEntry::Modified {
                old_block,
                new_block,
                ..
            } => {
                let diff = TextDiff::from_chars(
                    old_block.text().unwrap_or(""),
                    new_block.text().unwrap_or(""),
                );
                for change in diff.iter_all_changes() {
                    match change.tag() {
                        ChangeTag::Insert => {
                            stats.added_chars += change.value().chars().count()
                        }
                        ChangeTag::Delete => {
                            stats.removed_chars += change.value().chars().count()
                        }
                        ChangeTag::Equal => {}
                    }
                }
            }
            DiffEntry::Added { new_block, .. } => {
                stats.added_chars += new_block.text().unwrap_or("").chars().count();
            }
            DiffEntry::Removed { old_block, .. } => {
                stats.removed_chars += old_block.text().unwrap_or("").chars().count();
            }
            DiffEntry::Unchanged { .. } => {}
        }
    }
    stats
}
