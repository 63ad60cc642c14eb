use super::text::diff_text;
use super::types::DiffEntry;
use crate::block::ContentBlock;

/// Alignment strategy between an old and a new block sequence.
///
/// The strategy is a seam: the rest of the pipeline only sees the entry list,
/// so a smarter (LCS-based) aligner can be swapped in without touching the
/// aggregator or the text differ.
pub trait Aligner {
    fn align(&self, old: &[ContentBlock], new: &[ContentBlock]) -> Vec<DiffEntry>;
}

/// Index-by-index alignment.
///
/// Position `i` of the old sequence is compared with position `i` of the new
/// one; there is no minimal-edit-distance matching. Inserting a block in the
/// middle therefore shifts everything after it and the tail reports as
/// modified. Known trade-off: articles run to tens of blocks, and the review
/// view stays readable at that scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalAligner;

impl Aligner for PositionalAligner {
    fn align(&self, old: &[ContentBlock], new: &[ContentBlock]) -> Vec<DiffEntry> {
        let max = old.len().max(new.len());
        let mut entries = Vec::with_capacity(max);

        for index in 0..max {
            let entry = match (old.get(index), new.get(index)) {
                (None, Some(n)) => DiffEntry::Added {
                    index,
                    new_block: n.clone(),
                },
                (Some(o), None) => DiffEntry::Removed {
                    index,
                    old_block: o.clone(),
                },
                (Some(o), Some(n)) if o == n => DiffEntry::Unchanged {
                    index,
                    block: n.clone(),
                },
                (Some(o), Some(n)) => DiffEntry::Modified {
                    index,
                    text_diff: diff_text(o.text().unwrap_or(""), n.text().unwrap_or("")),
                    old_block: o.clone(),
                    new_block: n.clone(),
                },
                (None, None) => continue,
            };
            entries.push(entry);
        }
        entries
    }
}
