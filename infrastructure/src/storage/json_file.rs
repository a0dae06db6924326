//! File-backed progress store.
//!
//! Two files live side by side:
//!
//! - `<name>.jsonl`: one [`ProgressRecord`] per line, append-only
//! - `<name>.json`: the per-user stats and daily question index
//!
//! A submission appends one line and rewrites the index, so each write costs
//! O(users) rather than O(history). The index goes to a sibling temp file
//! that is renamed over the target, so a crash mid-write leaves the previous
//! index intact. A torn last line in the records file is dropped on open.

use async_trait::async_trait;
use chrono::NaiveDate;
use interview_application::{ProgressRepository, ProgressSnapshot, RepositoryError};
use interview_domain::{DailyQuestionRecord, ProgressRecord, UserId, UserStats};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Errors from the progress files
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid progress file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record on line {line} of {path}: {source}")]
    Record {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for RepositoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io { .. } => RepositoryError::Io(e.to_string()),
            StoreError::Json { .. } | StoreError::Record { .. } => {
                RepositoryError::Corrupt(e.to_string())
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredIndex {
    stats: HashMap<UserId, UserStats>,
    daily: HashMap<UserId, DailyQuestionRecord>,
}

#[derive(Serialize)]
struct IndexView<'a> {
    stats: &'a HashMap<UserId, UserStats>,
    daily: &'a HashMap<UserId, DailyQuestionRecord>,
}

impl<'a> From<&'a ProgressSnapshot> for IndexView<'a> {
    fn from(snapshot: &'a ProgressSnapshot) -> Self {
        Self {
            stats: &snapshot.stats,
            daily: &snapshot.daily,
        }
    }
}

/// Progress repository persisted as a JSONL history plus a JSON index
pub struct JsonFileProgressStore {
    path: PathBuf,
    records_path: PathBuf,
    snapshot: Mutex<ProgressSnapshot>,
}

impl JsonFileProgressStore {
    /// Open the store whose index lives at `path`, starting empty if the
    /// files do not exist. Records go to the same path with a `.jsonl`
    /// extension.
    ///
    /// Parent directories are created on the first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records_path = path.with_extension("jsonl");

        let index = read_index(&path).await?;
        let records = read_records(&records_path).await?;

        info!(
            "Loaded {} progress records for {} users from {}",
            records.len(),
            index.stats.len(),
            records_path.display()
        );

        Ok(Self {
            path,
            records_path,
            snapshot: Mutex::new(ProgressSnapshot {
                records,
                stats: index.stats,
                daily: index.daily,
            }),
        })
    }

    /// Path of the stats and daily question index.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the append-only records file.
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    async fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }

    async fn append_record(&self, record: &ProgressRecord) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.records_path.clone(),
            source,
        };

        let mut line = serde_json::to_string(record).map_err(|source| StoreError::Json {
            path: self.records_path.clone(),
            source,
        })?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.records_path)
            .await
            .map_err(io_err)?;
        file.write_all(line.as_bytes()).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)?;
        Ok(())
    }

    async fn write_index(&self, index: IndexView<'_>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_vec_pretty(&index).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

async fn read_index(path: &Path) -> Result<StoredIndex, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) if content.trim().is_empty() => Ok(StoredIndex::default()),
        Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No progress index at {}, starting empty", path.display());
            Ok(StoredIndex::default())
        }
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn read_records(path: &Path) -> Result<Vec<ProgressRecord>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    // Everything after the last newline is an unfinished append
    let complete_len = content.rfind('\n').map_or(0, |i| i + 1);
    if complete_len < content.len() {
        warn!(
            "Dropping {} bytes of unfinished record at the end of {}",
            content.len() - complete_len,
            path.display()
        );
        truncate(path, complete_len as u64).await?;
    }

    content[..complete_len]
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::Record {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })
        })
        .collect()
}

async fn truncate(path: &Path, len: u64) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .open(path)
        .await
        .map_err(io_err)?;
    file.set_len(len).await.map_err(io_err)
}

#[async_trait]
impl ProgressRepository for JsonFileProgressStore {
    async fn save_submission(
        &self,
        record: ProgressRecord,
        today: NaiveDate,
    ) -> Result<UserStats, RepositoryError> {
        // The lock is held across both writes so per-user updates stay serialized
        let mut snapshot = self.snapshot.lock().await;
        self.ensure_parent().await?;
        self.append_record(&record).await?;

        let user_id = record.user_id;
        let previous = snapshot.stats.get(&user_id).cloned();
        let stats = snapshot.apply_submission(record, today);

        let written = self.write_index(IndexView::from(&*snapshot)).await;
        if let Err(e) = written {
            snapshot.records.pop();
            match previous {
                Some(prev) => snapshot.stats.insert(user_id, prev),
                None => snapshot.stats.remove(&user_id),
            };
            return Err(e.into());
        }

        Ok(stats)
    }

    async fn user_stats(&self, user_id: UserId) -> Result<UserStats, RepositoryError> {
        Ok(self.snapshot.lock().await.user_stats(user_id))
    }

    async fn list_progress(&self, user_id: UserId) -> Result<Vec<ProgressRecord>, RepositoryError> {
        Ok(self.snapshot.lock().await.user_records(user_id))
    }

    async fn daily_question(
        &self,
        user_id: UserId,
    ) -> Result<Option<DailyQuestionRecord>, RepositoryError> {
        Ok(self.snapshot.lock().await.daily.get(&user_id).cloned())
    }

    async fn save_daily_question(
        &self,
        record: DailyQuestionRecord,
    ) -> Result<(), RepositoryError> {
        let mut snapshot = self.snapshot.lock().await;
        self.ensure_parent().await?;

        let user_id = record.user_id;
        let previous = snapshot.daily.insert(user_id, record);

        let written = self.write_index(IndexView::from(&*snapshot)).await;
        if let Err(e) = written {
            match previous {
                Some(prev) => snapshot.daily.insert(user_id, prev),
                None => snapshot.daily.remove(&user_id),
            };
            return Err(e.into());
        }
        Ok(())
    }
}
