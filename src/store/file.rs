use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::ScoreData;

/// Local copy of the shared document, one JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is a fresh installation: an empty document, not an
    /// error.
    pub fn load(&self) -> Result<ScoreData> {
        if !self.path.exists() {
            info!("No data file at {}, starting empty", self.path.display());
            return Ok(ScoreData::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    /// Write via a temp file and rename so a crash mid-write never leaves
    /// a truncated document behind.
    pub fn save(&self, data: &ScoreData) -> Result<()> {
        let raw = serde_json::to_string_pretty(data).context("Failed to serialize document")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to swap {} into place", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Season;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("golf_cup_ranking_{}_{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn missing_file_loads_as_empty_document() {
        let store = FileStore::new(temp_path("missing"));
        let data = store.load().unwrap();
        assert!(data.years.is_empty());
        assert!(data.handicaps.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let store = FileStore::new(&path);

        let mut data = ScoreData::default();
        data.years.insert(2025, Season::default());
        data.handicaps.insert("Kondo".to_string(), 8);
        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.years.contains_key(&2025));
        assert_eq!(loaded.handicaps["Kondo"], 8);

        fs::remove_file(&path).unwrap();
    }
}
