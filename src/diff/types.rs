use crate::block::ContentBlock;
use serde::Serialize;

/// Classification of one word token in a text diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Added,
    Removed,
    Unchanged,
}

/// One token of a word-level text diff. Consumers render `Removed` with
/// strikethrough, `Added` highlighted, `Unchanged` verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordDiffToken {
    pub text: String,
    pub class: TokenClass,
}

impl WordDiffToken {
    pub fn new(text: impl Into<String>, class: TokenClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// Classification of one aligned position between two block sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffEntry {
    Added {
        index: usize,
        new_block: ContentBlock,
    },
    Removed {
        index: usize,
        old_block: ContentBlock,
    },
    Modified {
        index: usize,
        old_block: ContentBlock,
        new_block: ContentBlock,
        text_diff: Vec<WordDiffToken>,
    },
    Unchanged {
        index: usize,
        block: ContentBlock,
    },
}

impl DiffEntry {
    pub fn index(&self) -> usize {
        match self {
            Self::Added { index, .. }
            | Self::Removed { index, .. }
            | Self::Modified { index, .. }
            | Self::Unchanged { index, .. } => *index,
        }
    }
}

/// Summary of one comparison: per-class counts plus the ordered entries.
/// Recomputed on every comparison, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffReport {
    pub additions: usize,
    pub removals: usize,
    pub modifications: usize,
    pub unchanged: usize,
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    pub fn from_entries(entries: Vec<DiffEntry>) -> Self {
        let mut report = Self {
            entries,
            ..Self::default()
        };
        for entry in &report.entries {
            match entry {
                DiffEntry::Added { .. } => report.additions += 1,
                DiffEntry::Removed { .. } => report.removals += 1,
                DiffEntry::Modified { .. } => report.modifications += 1,
                DiffEntry::Unchanged { .. } => report.unchanged += 1,
            }
        }
        report
    }

    /// True when the two sequences compared equal.
    pub fn is_clean(&self) -> bool {
        self.additions == 0 && self.removals == 0 && self.modifications == 0
    }
}
