// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat JSON persistence: the whole record list is read and written
//! wholesale, so every mutation is load -> change -> replace-all.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::Period;
use crate::models::{Direction, Record};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir).context("Failed to create data dir")?;
    Ok(dir.to_path_buf())
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Store {
        Store { path: path.into() }
    }

    pub fn open_default() -> Result<Store> {
        Ok(Store::open(data_dir()?.join("records.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty when no prior data exists; never a partial load.
    pub fn load_all(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read store at {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed record store at {}", self.path.display()))
    }

    /// Atomic replace-all write: serialize to a sibling temp file, then rename.
    pub fn save_all(&self, records: &[Record]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create store dir {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, body).with_context(|| format!("Write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Replace store at {}", self.path.display()))?;
        Ok(())
    }

    /// Appends a new record, assigning the next free id.
    pub fn add(
        &self,
        amount: Decimal,
        category: &str,
        description: &str,
        date: i64,
        direction: Direction,
    ) -> Result<Record> {
        let mut records = self.load_all()?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = Record {
            id,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
            direction,
        };
        records.push(record.clone());
        self.save_all(&records)?;
        Ok(record)
    }

    /// Full replacement by id. Unknown ids are a silent no-op, matching add/edit
    /// semantics at the entry boundary.
    pub fn update(&self, record: Record) -> Result<bool> {
        let mut records = self.load_all()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.save_all(&records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: i64) -> Result<bool> {
        let mut records = self.load_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_all(&records)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.save_all(&[])
    }
}

/// Persists the selected month/year between CLI invocations.
pub struct PeriodCursor {
    path: PathBuf,
}

impl PeriodCursor {
    pub fn open(path: impl Into<PathBuf>) -> PeriodCursor {
        PeriodCursor { path: path.into() }
    }

    pub fn open_default() -> Result<PeriodCursor> {
        Ok(PeriodCursor::open(data_dir()?.join("period.json")))
    }

    /// Falls back to the current calendar month when no cursor was saved yet.
    pub fn load(&self) -> Result<Period> {
        if !self.path.exists() {
            return Ok(Period::current());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Read period cursor at {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed period cursor at {}", self.path.display()))
    }

    pub fn save(&self, period: Period) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create data dir {}", dir.display()))?;
        }
        fs::write(&self.path, serde_json::to_string(&period)?)
            .with_context(|| format!("Write period cursor at {}", self.path.display()))?;
        Ok(())
    }
}
