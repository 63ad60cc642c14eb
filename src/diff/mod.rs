//! Revision comparison: block alignment, word-level text diffing, and the
//! aggregated report the review view consumes.

mod align;
mod stats;
mod text;
mod types;

pub use align::{Aligner, PositionalAligner};
pub use stats::{DiffStats, character_stats};
pub use text::diff_text;
pub use types::{DiffEntry, DiffReport, TokenClass, WordDiffToken};

use crate::block::ContentBlock;
use tracing::debug;

/// Compare a revision's blocks against the current content with the default
/// positional strategy.
pub fn compare(old: &[ContentBlock], new: &[ContentBlock]) -> DiffReport {
    aggregate(&PositionalAligner, old, new)
}

/// Compare with an injected alignment strategy.
pub fn aggregate(
    aligner: &dyn Aligner,
    old: &[ContentBlock],
    new: &[ContentBlock],
) -> DiffReport {
    let report = DiffReport::from_entries(aligner.align(old, new));
    debug!(
        additions = report.additions,
        removals = report.removals,
        modifications = report.modifications,
        unchanged = report.unchanged,
        "compared {} old against {} new blocks",
        old.len(),
        new.len()
    );
    report
}
