// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only CSV log of created quests.
//!
//! Each record is encoded in memory and written with a single append while
//! holding a process-wide lock, so concurrent requests never interleave rows.

use crate::models::QuestRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// CSV row layout; column names are the log's fixed header.
#[derive(Debug, Serialize, Deserialize)]
struct QuestRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Aura")]
    aura: i64,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Price")]
    price: Option<f64>,
}

impl From<&QuestRecord> for QuestRow {
    fn from(quest: &QuestRecord) -> Self {
        Self {
            title: quest.title.clone(),
            aura: quest.aura_points,
            category: quest.category.clone(),
            description: quest.description.clone(),
            latitude: quest.latitude,
            longitude: quest.longitude,
            price: quest.price,
        }
    }
}

impl From<QuestRow> for QuestRecord {
    fn from(row: QuestRow) -> Self {
        Self {
            title: row.title,
            aura_points: row.aura,
            category: row.category,
            description: row.description,
            latitude: row.latitude,
            longitude: row.longitude,
            price: row.price,
        }
    }
}

/// Shared handle to the quest CSV file.
#[derive(Clone)]
pub struct QuestLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl QuestLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one quest; the header row is written first if the file is empty.
    pub async fn append(&self, quest: &QuestRecord) -> Result<(), QuestLogError> {
        let _guard = self.write_lock.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let with_header = file.metadata().await?.len() == 0;
        let bytes = encode_row(quest, with_header)?;

        file.write_all(&bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), title = %quest.title, "Quest appended");
        Ok(())
    }

    /// Read every quest back from the log. A missing file reads as empty.
    pub async fn read_all(&self) -> Result<Vec<QuestRecord>, QuestLogError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        csv::Reader::from_reader(bytes.as_slice())
            .deserialize::<QuestRow>()
            .map(|row| row.map(QuestRecord::from).map_err(QuestLogError::from))
            .collect()
    }
}

fn encode_row(quest: &QuestRecord, with_header: bool) -> Result<Vec<u8>, QuestLogError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());
    writer.serialize(QuestRow::from(quest))?;
    writer
        .into_inner()
        .map_err(|e| QuestLogError::Io(e.into_error()))
}

/// Errors from the quest log.
#[derive(Debug, thiserror::Error)]
pub enum QuestLogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
