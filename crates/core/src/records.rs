//! Best-time records, keyed by score.
//!
//! A record maps a score to the fastest game time (seconds) at which it was
//! ever reached. The whole map is read once at session start and rewritten
//! after every improvement.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record store error.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("record file i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("record file format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Score -> best elapsed seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Records(BTreeMap<u32, f64>);

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn best(&self, score: u32) -> Option<f64> {
        self.0.get(&score).copied()
    }

    /// Keep `time` for `score` if it beats the stored one.
    ///
    /// Returns true when the map changed.
    pub fn submit(&mut self, score: u32, time: f64) -> bool {
        if !time.is_finite() {
            return false;
        }
        match self.0.get(&score) {
            Some(&best) if best <= time => false,
            _ => {
                self.0.insert(score, time);
                true
            }
        }
    }

    /// Records for scores above `score`, ascending, at most `limit` of them.
    pub fn upcoming(&self, score: u32, limit: usize) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0
            .range(score.saturating_add(1)..)
            .take(limit)
            .map(|(&s, &t)| (s, t))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&s, &t)| (s, t))
    }
}

impl FromIterator<(u32, f64)> for Records {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut records = Records::new();
        for (score, time) in iter {
            records.submit(score, time);
        }
        records
    }
}

/// Persistence boundary for [`Records`].
pub trait RecordStore {
    /// Read every record. A store that was never written yields an empty set.
    fn load(&mut self) -> Result<Records, RecordsError>;

    /// Replace every stored record with `records`.
    fn save(&mut self, records: &Records) -> Result<(), RecordsError>;
}

/// JSON object on disk, e.g. `{"1": 2.5, "2": 4.75}`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&mut self) -> Result<Records, RecordsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Records::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Records::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&mut self, records: &Records) -> Result<(), RecordsError> {
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store; counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Records) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> Result<Records, RecordsError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &Records) -> Result<(), RecordsError> {
        self.records = records.clone();
        self.saves += 1;
        Ok(())
    }
}
