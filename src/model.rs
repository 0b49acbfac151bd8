//! Core data types for repz: [`Report`], its creation projection
//! [`ReportDraft`] and its update projection [`ReportPatch`].
//!
//! A report is a short rich-text document. The markup is opaque to the core:
//! it is stored verbatim and only ever interpreted for display (word counts,
//! previews). Titles are normalized on the way in: stored trimmed, never
//! empty. Everything else about a report is plain data; behavior lives in
//! [`crate::reports`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of a report. Published reports surface in the featured
/// section of list views and are excluded from manual reordering there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Published,
    Archived,
}

impl Default for ReportStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Published => "published",
            ReportStatus::Archived => "archived",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ReportStatus::Draft),
            "published" => Ok(ReportStatus::Published),
            "archived" => Ok(ReportStatus::Archived),
            other => Err(format!(
                "invalid status '{}', expected draft, published or archived",
                other
            )),
        }
    }
}

/// The persisted entity. Field names serialize in camelCase and timestamps
/// as RFC 3339 strings, matching the snapshot layout on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    // Older snapshots may predate the status field.
    #[serde(default)]
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Builds a fresh report from a creation projection: new id, trimmed
    /// title, draft-by-default status, both timestamps set to now.
    pub fn new(draft: ReportDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            content: draft.content,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of words in the content with markup tags stripped.
    /// Display-only; never persisted.
    pub fn word_count(&self) -> usize {
        let mut text = String::with_capacity(self.content.len());
        let mut in_tag = false;
        for c in self.content.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    text.push(' ');
                }
                '>' => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        text.split_whitespace().count()
    }
}

/// Creation projection: everything the caller supplies, nothing the store
/// assigns (id and timestamps).
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub title: String,
    pub content: String,
    pub status: ReportStatus,
}

impl ReportDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: ReportStatus::default(),
        }
    }
}

/// Update projection: any subset of the mutable fields. Absent fields are
/// left untouched by [`crate::reports::ReportStore::update`].
#[derive(Debug, Clone, Default)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ReportStatus>,
}

impl ReportPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn status(mut self, status: ReportStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.status.is_none()
    }
}
