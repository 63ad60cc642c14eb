//! Example walking through a compare-and-restore round
//!
//! Run with: cargo run --example review_demo

use copydesk::render::{ReviewOptions, ReviewRow, review_rows, summary};
use copydesk::revision::{Revision, RevisionLog};
use copydesk::{ContentBlock, compare};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut log = RevisionLog::new();
    log.push(Revision::new(
        vec![
            ContentBlock::heading("Council approves transit plan"),
            ContentBlock::paragraph("The city council approved the plan on Tuesday."),
        ],
        Some("rosa".into()),
    ))?;

    let current = vec![
        ContentBlock::heading("Council approves transit plan"),
        ContentBlock::paragraph("The city council approved the revised plan on Tuesday."),
        ContentBlock::image("https://example.com/council.jpg", Some("Tuesday's session".into())),
    ];

    let revision = log.select(0)?;
    let report = compare(&revision.content, &current);
    println!("changes vs. revision {}: {}", revision.id, summary(&report));

    for row in review_rows(&report, ReviewOptions::default()) {
        match row {
            ReviewRow::Unchanged(label) => println!("    {label}"),
            ReviewRow::Pair { old, new, .. } => {
                println!("  - {}", old.as_deref().unwrap_or(""));
                println!("  + {}", new.as_deref().unwrap_or(""));
            }
        }
    }

    // Operator confirmed in the UI; roll the article back.
    let restored = log.restore(0)?;
    println!("restored {} blocks", restored.len());

    Ok(())
}
