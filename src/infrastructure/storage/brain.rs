//! Flat-file brain store

use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::traits::BrainStore;

/// Text file brain, one entry per line.
///
/// The file is opened per operation. The lock only serializes access from
/// this process: appends hold the write half, samples the read half.
pub struct FileBrain {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileBrain {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BrainStore for FileBrain {
    async fn append(&self, entry: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut line = String::with_capacity(entry.len() + 1);
        line.push_str(entry);
        line.push('\n');

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn sample(&self) -> Result<String, StorageError> {
        let content = {
            let _guard = self.lock.read().await;
            tokio::fs::read_to_string(&self.path).await?
        };

        let lines: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        lines
            .choose(&mut rand::thread_rng())
            .map(|line| line.to_string())
            .ok_or(StorageError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_append_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let brain = FileBrain::new(dir.path().join("brain.txt"));

        brain.append("hello %USER%").await.unwrap();
        brain.append("second line").await.unwrap();

        let content = std::fs::read_to_string(brain.path()).unwrap();
        assert_eq!(content, "hello %USER%\nsecond line\n");
    }

    #[tokio::test]
    async fn test_append_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.txt");
        std::fs::write(&path, "existing\n").unwrap();

        let brain = FileBrain::new(&path);
        brain.append("new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nnew\n");
    }

    #[tokio::test]
    async fn test_sample_returns_stored_line_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.txt");
        std::fs::write(&path, "alpha\n  beta with spaces \ngamma\n").unwrap();

        let brain = FileBrain::new(&path);
        let expected: HashSet<&str> = ["alpha", "  beta with spaces ", "gamma"].into_iter().collect();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let line = brain.sample().await.unwrap();
            assert!(expected.contains(line.as_str()), "unexpected line: {:?}", line);
            seen.insert(line);
        }
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn test_sample_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.txt");
        std::fs::write(&path, "\n\nonly\n   \n").unwrap();

        let brain = FileBrain::new(&path);
        for _ in 0..20 {
            assert_eq!(brain.sample().await.unwrap(), "only");
        }
    }

    #[tokio::test]
    async fn test_sample_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let brain = FileBrain::new(dir.path().join("missing.txt"));

        assert!(matches!(brain.sample().await, Err(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn test_sample_empty_file_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.txt");
        std::fs::write(&path, "").unwrap();

        let brain = FileBrain::new(&path);
        assert!(matches!(brain.sample().await, Err(StorageError::Empty)));
    }

    #[tokio::test]
    async fn test_append_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let brain = FileBrain::new(dir.path().join("no-such-dir").join("brain.txt"));

        assert!(matches!(brain.append("x").await, Err(StorageError::Io(_))));
    }
}
