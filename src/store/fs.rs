use super::SnapshotStore;
use crate::error::{RepzError, Result};
use crate::model::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

const SNAPSHOT_FILENAME: &str = "reports.json";

/// File-backed snapshot slot: the whole collection serialized as one JSON
/// array in `<dir>/reports.json`.
///
/// Writes go through a temp file in the same directory followed by a rename,
/// so a crash mid-write leaves the previous snapshot intact.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILENAME)
    }

    fn read_snapshot(&self) -> Result<Vec<Report>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| RepzError::Persistence(format!("read {}: {}", path.display(), e)))?;
        let reports: Vec<Report> = serde_json::from_str(&content)
            .map_err(|e| RepzError::Persistence(format!("parse {}: {}", path.display(), e)))?;
        Ok(reports)
    }

    fn write_snapshot(&self, reports: &[Report]) -> Result<()> {
        self.ensure_dir(&self.dir)?;

        let content = serde_json::to_string_pretty(reports)
            .map_err(|e| RepzError::Persistence(format!("serialize snapshot: {}", e)))?;

        // Write-then-rename keeps the previous snapshot until the new one is
        // fully on disk.
        let path = self.snapshot_path();
        let tmp = self.dir.join(format!("{}.tmp", SNAPSHOT_FILENAME));
        fs::write(&tmp, content)
            .map_err(|e| RepzError::Persistence(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| RepzError::Persistence(format!("rename {}: {}", path.display(), e)))?;
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .map_err(|e| RepzError::Persistence(format!("create {}: {}", path.display(), e)))?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Vec<Report> {
        match self.read_snapshot() {
            Ok(reports) => reports,
            Err(e) => {
                warn!("failed to load report snapshot, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, reports: &[Report]) {
        if let Err(e) = self.write_snapshot(reports) {
            error!("failed to save report snapshot: {}", e);
        }
    }
}
