//! Copydesk
//!
//! Revision comparison and restore core for a newsroom content pipeline.
//! Given an article's current blocks and a historical revision, it aligns the
//! two sequences, word-diffs the blocks that changed, aggregates the result
//! into a renderable report, and can hand a chosen revision's content back as
//! the new current content. Fetching revisions and persisting restored
//! content belong to the surrounding editor, not to this crate.

pub mod block;
pub mod diff;
pub mod render;
pub mod revision;

pub use block::{ContentBlock, RawBlock};
pub use diff::{DiffEntry, DiffReport, compare};
pub use revision::{Revision, RevisionError, RevisionLog};
