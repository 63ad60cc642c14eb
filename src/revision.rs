//! Revision snapshots and the per-article revision log
//!
//! Revisions are immutable snapshots taken by the save workflow; this module
//! only compares against them and promotes one back to current content on
//! restore. Persistence lives with the story store, not here.

use crate::block::ContentBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use xxhash_rust::xxh64::xxh64;

#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("no revisions recorded for this article")]
    EmptyLog,

    #[error("revision index {index} out of range (log has {len} entries)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable historical snapshot of an article's block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: Uuid,
    pub content: Vec<ContentBlock>,
    pub saved_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_by: Option<String>,
}

impl Revision {
    pub fn new(content: Vec<ContentBlock>, saved_by: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            saved_at: Utc::now(),
            saved_by,
        }
    }

    /// XXHash64 of the canonical JSON of the content, as a hex string.
    pub fn content_hash(&self) -> Result<String, RevisionError> {
        content_fingerprint(&self.content)
    }

    /// Hand back this snapshot's blocks as the article's next current
    /// content. The clone is deep (all block data is owned), so the caller
    /// may edit the result freely without touching the stored snapshot.
    ///
    /// The caller is expected to have taken the operator through a
    /// confirmation step before invoking this, and to persist the returned
    /// sequence through the story store.
    pub fn restore(&self) -> Vec<ContentBlock> {
        info!(revision = %self.id, blocks = self.content.len(), "restoring revision content");
        self.content.clone()
    }
}

/// Fingerprint a block sequence for snapshot deduplication.
pub fn content_fingerprint(blocks: &[ContentBlock]) -> Result<String, RevisionError> {
    let bytes = serde_json::to_vec(blocks)?;
    Ok(format!("{:016x}", xxh64(&bytes, 0)))
}

/// The in-memory revision list for one article, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevisionLog {
    revisions: Vec<Revision>,
}

impl RevisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Revision> {
        self.revisions.iter()
    }

    pub fn latest(&self) -> Option<&Revision> {
        self.revisions.last()
    }

    /// Record a snapshot, skipping it when its content is identical to the
    /// newest entry so repeated saves of unchanged copy don't pile up.
    pub fn push(&mut self, revision: Revision) -> Result<(), RevisionError> {
        if let Some(last) = self.revisions.last()
            && last.content_hash()? == revision.content_hash()?
        {
            info!(revision = %revision.id, "skipping snapshot with unchanged content");
            return Ok(());
        }
        self.revisions.push(revision);
        Ok(())
    }

    /// Look up a revision by position. Selecting outside the log is a caller
    /// bug surfaced as an error rather than a panic.
    pub fn select(&self, index: usize) -> Result<&Revision, RevisionError> {
        if self.revisions.is_empty() {
            return Err(RevisionError::EmptyLog);
        }
        self.revisions
            .get(index)
            .ok_or(RevisionError::SelectionOutOfRange {
                index,
                len: self.revisions.len(),
            })
    }

    /// Select and restore in one step.
    pub fn restore(&self, index: usize) -> Result<Vec<ContentBlock>, RevisionError> {
        Ok(self.select(index)?.restore())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Vec<ContentBlock> {
        vec![
            ContentBlock::heading("City council votes tonight"),
            ContentBlock::paragraph("The measure passed 7-2."),
        ]
    }

    #[test]
    fn restore_returns_deep_copy() {
        let revision = Revision::new(article(), Some("rosa".into()));
        let mut restored = revision.restore();

        match &mut restored[1] {
            ContentBlock::Paragraph { text } => *text = "tampered".into(),
            other => panic!("unexpected block {:?}", other),
        }

        assert_eq!(revision.content, article());
        assert_ne!(restored, revision.content);
    }

    #[test]
    fn push_skips_unchanged_content() {
        let mut log = RevisionLog::new();
        log.push(Revision::new(article(), None)).unwrap();
        log.push(Revision::new(article(), Some("ed".into()))).unwrap();
        assert_eq!(log.len(), 1);

        let mut changed = article();
        changed.push(ContentBlock::paragraph("A correction followed."));
        log.push(Revision::new(changed, None)).unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn select_out_of_range() {
        let log = RevisionLog::new();
        assert!(matches!(log.select(0), Err(RevisionError::EmptyLog)));

        let mut log = RevisionLog::new();
        log.push(Revision::new(article(), None)).unwrap();
        assert!(log.select(0).is_ok());
        assert!(matches!(
            log.select(3),
            Err(RevisionError::SelectionOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn restore_by_index() {
        let mut log = RevisionLog::new();
        log.push(Revision::new(article(), None)).unwrap();
        let restored = log.restore(0).unwrap();
        assert_eq!(restored, article());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Revision::new(article(), None);
        let b = Revision::new(article(), Some("someone else".into()));
        assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());

        let c = Revision::new(vec![ContentBlock::paragraph("different")], None);
        assert_ne!(a.content_hash().unwrap(), c.content_hash().unwrap());
    }
}
