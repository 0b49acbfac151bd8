//! Argument surface and index resolution for the repz binary.

use repz::model::ReportStatus;
use repz::reports::ReportStore;
use repz::store::SnapshotStore;
use repz::auth::UserRole;
use clap::{Parser, Subcommand};
use std::fmt;
use uuid::Uuid;

pub mod print;

#[derive(Parser, Debug)]
#[command(name = "repz")]
#[command(about = "A fast, local-first report manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Role to act as (mutations require admin)
    #[arg(long, global = true, default_value = "admin")]
    pub role: UserRole,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new report
    #[command(alias = "n")]
    Create {
        /// Title of the report
        title: String,

        /// Content markup (optional)
        content: Option<String>,
    },

    /// List reports (featured section first, then the rest)
    #[command(alias = "ls")]
    List,

    /// View a report
    #[command(alias = "v")]
    View {
        /// Index from the list (e.g. 1, f1)
        index: String,
    },

    /// Edit a report's fields
    Edit {
        index: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// draft, published or archived
        #[arg(long)]
        status: Option<ReportStatus>,
    },

    /// Delete a report
    #[command(alias = "rm")]
    Delete { index: String },

    /// Move a report to another position (regular section only)
    #[command(alias = "mv")]
    Move {
        /// Index of the report to move
        index: String,

        /// Index whose position it should take
        target: String,
    },

    /// Append AI-generated draft text to a report
    Generate {
        index: String,

        /// Prompt for the generator
        prompt: String,
    },

    /// Prepend an AI summary block to a report
    Summarize { index: String },
}

/// A position in the rendered list: the featured section or the regular one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayIndex {
    Featured(usize),
    Regular(usize),
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Featured(n) => write!(f, "f{}", n),
            DisplayIndex::Regular(n) => write!(f, "{}", n),
        }
    }
}

/// Parses `f1`-style featured indexes and bare regular indexes. Indexes are
/// 1-based, matching the list output.
pub fn parse_index(s: &str) -> Result<DisplayIndex, String> {
    if let Some(rest) = s.strip_prefix('f') {
        if let Ok(n) = rest.parse::<usize>() {
            if n > 0 {
                return Ok(DisplayIndex::Featured(n));
            }
        }
    } else if let Ok(n) = s.parse::<usize>() {
        if n > 0 {
            return Ok(DisplayIndex::Regular(n));
        }
    }
    Err(format!("invalid index '{}', expected e.g. 2 or f1", s))
}

/// Maps a display index to the id of the report at that position.
pub fn resolve_index<S: SnapshotStore>(
    store: &ReportStore<S>,
    index: DisplayIndex,
) -> Result<Uuid, String> {
    let report = match index {
        DisplayIndex::Featured(n) => store.featured().get(n - 1).copied(),
        DisplayIndex::Regular(n) => store.regular().get(n - 1).copied(),
    };
    report
        .map(|r| r.id)
        .ok_or_else(|| format!("no report at index {}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use repz::auth::UserRole;
    use repz::model::{ReportDraft, ReportPatch, ReportStatus};
    use repz::store::memory::InMemoryStore;

    #[test]
    fn parses_featured_and_regular_indexes() {
        assert_eq!(parse_index("f2").unwrap(), DisplayIndex::Featured(2));
        assert_eq!(parse_index("3").unwrap(), DisplayIndex::Regular(3));
        assert!(parse_index("0").is_err());
        assert!(parse_index("f0").is_err());
        assert!(parse_index("x1").is_err());
    }

    #[test]
    fn resolves_against_the_partitioned_view() {
        let mut store = ReportStore::new(InMemoryStore::new());
        let b = store
            .create(UserRole::Admin, ReportDraft::new("B", ""))
            .unwrap();
        let a = store
            .create(UserRole::Admin, ReportDraft::new("A", ""))
            .unwrap();
        store
            .update(
                UserRole::Admin,
                &a.id,
                ReportPatch::default().status(ReportStatus::Published),
            )
            .unwrap();

        // A is featured; the regular section only holds B.
        assert_eq!(resolve_index(&store, DisplayIndex::Featured(1)).unwrap(), a.id);
        assert_eq!(resolve_index(&store, DisplayIndex::Regular(1)).unwrap(), b.id);
        assert!(resolve_index(&store, DisplayIndex::Regular(2)).is_err());
    }
}
