// File: src/persistence.rs
use crate::error::Result;
use crate::history::{ConversionHistory, HistoryConfig};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes the history atomically: a temp file in the same directory is
/// filled, flushed and then renamed over `path`.
pub fn save_history(history: &ConversionHistory, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, history)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|err| err.error)?;
    debug!(path = %path.display(), records = history.len(), "history saved");
    Ok(())
}

pub fn load_history(path: &Path) -> Result<ConversionHistory> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let history: ConversionHistory = bincode::deserialize_from(reader)?;
    debug!(path = %path.display(), records = history.len(), "history loaded");
    Ok(history)
}

/// Loads the history at `path`, starting fresh if it is missing or unreadable.
/// The configured capacity applies either way, trimming a loaded history
/// that holds more records than it allows.
pub fn load_or_new(path: &Path, config: HistoryConfig) -> ConversionHistory {
    match load_history(path) {
        Ok(mut history) => {
            history.set_capacity(config.capacity);
            history
        }
        Err(err) => {
            info!(path = %path.display(), %err, "starting a new history");
            ConversionHistory::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_starts_fresh() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.bin");
        fs::write(&path, b"not bincode").unwrap();

        let history = load_or_new(&path, HistoryConfig { capacity: 4 });
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 4);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history.bin");

        let mut history = ConversionHistory::default();
        history.convert("42").unwrap();
        save_history(&history, &path).unwrap();

        assert_eq!(load_history(&path).unwrap().len(), 1);
    }
}
