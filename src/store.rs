use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const SCORE_FILE: &str = "highScore";

/// Persistence for the single best-ever score. The store overwrites
/// unconditionally; monotonicity is the session's invariant, not the
/// store's.
pub trait ScoreStore {
    /// Previously saved best score, or `None` if nothing (readable) exists.
    fn read_best(&self) -> Option<u32>;

    /// Overwrite the stored value with `score`.
    fn write_best(&mut self, score: u32) -> Result<(), String>;

    /// Remove the stored value.
    fn clear(&mut self) -> Result<(), String>;
}

/// File-backed store: one file holding the score as a base-10 string.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under the per-user data directory.
    pub fn open_default() -> Result<FileStore, String> {
        let dirs = ProjectDirs::from("", "", "termtrivia")
            .ok_or_else(|| "Cannot resolve data directory".to_string())?;
        let dir = dirs.data_dir();
        fs::create_dir_all(dir).map_err(|e| format!("Cannot create {}: {}", dir.display(), e))?;
        Ok(FileStore {
            path: dir.join(SCORE_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> FileStore {
        FileStore { path }
    }
}

impl ScoreStore for FileStore {
    fn read_best(&self) -> Option<u32> {
        // Unreadable or garbage content reads as "no best yet".
        let content = fs::read_to_string(&self.path).ok()?;
        content.trim().parse().ok()
    }

    fn write_best(&mut self, score: u32) -> Result<(), String> {
        atomic_write(&self.path, &score.to_string())
    }

    fn clear(&mut self) -> Result<(), String> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| format!("Cannot remove {}: {}", self.path.display(), e))?;
        }
        Ok(())
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}

/// In-memory store: test substitute, and the degradation target when the
/// data directory cannot be resolved (the score then lives for one run).
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Option<u32> {
        self.best
    }

    fn write_best(&mut self, score: u32) -> Result<(), String> {
        self.best = Some(score);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), String> {
        self.best = None;
        Ok(())
    }
}
