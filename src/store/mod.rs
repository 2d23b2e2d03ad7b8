//! JSON-backed record store: one object mapping ISO dates to day records.
//!
//! Every operation reads the file fresh and mutating operations rewrite it
//! whole. There is no locking; the last writer wins.

pub mod audit;

use crate::core::validator::Reading;
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use chrono::NaiveDate;
use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// All logged days, ordered by date.
///
/// Keys must be canonical `YYYY-MM-DD` strings. A loose key such as
/// `2025-1-5` or a repeated date is a load error, since two spellings of
/// one day would otherwise collapse and drop readings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store(BTreeMap<NaiveDate, DayRecord>);

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping YYYY-MM-DD dates to day records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Store, A::Error> {
        let mut days = BTreeMap::new();

        while let Some((key, record)) = map.next_entry::<String, DayRecord>()? {
            let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                .ok()
                .filter(|d| d.format("%Y-%m-%d").to_string() == key)
                .ok_or_else(|| {
                    A::Error::custom(format!("date key '{key}' is not in YYYY-MM-DD form"))
                })?;

            if days.insert(date, record).is_some() {
                return Err(A::Error::custom(format!("date key '{key}' appears twice")));
            }
        }

        Ok(Store(days))
    }
}

/// Pretty JSON with the store file's 4-space indent and a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&DayRecord> {
        self.0.get(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0.contains_key(date)
    }

    pub fn insert(&mut self, date: NaiveDate, record: DayRecord) -> Option<DayRecord> {
        self.0.insert(date, record)
    }

    /// Record for `date`, created empty if absent.
    pub fn entry(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.0.entry(date).or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.0.iter()
    }

    /// Days between `start` and `end`, both inclusive.
    pub fn range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.0.range(start..=end)
    }
}

/// Result of reading the backing file.
#[derive(Debug)]
pub enum Loaded {
    Existing(Store),
    /// The file does not exist yet: the store is empty and the caller may
    /// tell the user that no logs were written so far.
    Missing,
}

impl Loaded {
    pub fn is_missing(&self) -> bool {
        matches!(self, Loaded::Missing)
    }

    pub fn into_store(self) -> Store {
        match self {
            Loaded::Existing(store) => store,
            Loaded::Missing => Store::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Created,
    Replaced,
    /// The date existed and the overwrite was not confirmed; nothing written.
    Declined,
}

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<Loaded> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Loaded::Missing),
            Err(e) => return Err(e.into()),
        };

        // a zero-length file is an empty store, not a parse error
        if content.trim().is_empty() {
            return Ok(Loaded::Existing(Store::new()));
        }

        let store: Store = serde_json::from_str(&content)?;
        Ok(Loaded::Existing(store))
    }

    /// Rewrite the whole file (4-space indented JSON).
    pub fn save(&self, store: &Store) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, to_pretty_json(store)?)?;
        Ok(())
    }

    /// Overwrite only the given fields of `date`, keeping the others.
    pub fn merge_partial(&self, date: NaiveDate, readings: &[Reading]) -> AppResult<DayRecord> {
        self.merge_into(self.load()?.into_store(), date, readings)
    }

    /// [`merge_partial`](Self::merge_partial) on a store the caller has
    /// already loaded from this file.
    pub fn merge_into(
        &self,
        mut store: Store,
        date: NaiveDate,
        readings: &[Reading],
    ) -> AppResult<DayRecord> {
        let record = store.entry(date);
        for (field, value) in readings {
            record.set(field, *value);
        }
        let merged = record.clone();

        self.save(&store)?;
        Ok(merged)
    }

    /// Replace the whole record of `date`. When the date already has an
    /// entry, `confirm` decides whether the overwrite happens; an error
    /// from `confirm` aborts without writing.
    pub fn replace_full<F>(
        &self,
        date: NaiveDate,
        record: DayRecord,
        confirm: F,
    ) -> AppResult<ReplaceOutcome>
    where
        F: FnOnce(NaiveDate) -> AppResult<bool>,
    {
        self.replace_into(self.load()?.into_store(), date, record, confirm)
    }

    /// [`replace_full`](Self::replace_full) on an already loaded store.
    pub fn replace_into<F>(
        &self,
        mut store: Store,
        date: NaiveDate,
        record: DayRecord,
        confirm: F,
    ) -> AppResult<ReplaceOutcome>
    where
        F: FnOnce(NaiveDate) -> AppResult<bool>,
    {
        let outcome = if store.contains(&date) {
            if !confirm(date)? {
                return Ok(ReplaceOutcome::Declined);
            }
            ReplaceOutcome::Replaced
        } else {
            ReplaceOutcome::Created
        };

        store.insert(date, record);
        self.save(&store)?;
        Ok(outcome)
    }

    pub fn has_entry(&self, date: NaiveDate) -> AppResult<bool> {
        Ok(self.load()?.into_store().contains(&date))
    }

    /// Record of one date. `NoData` when nothing was ever logged,
    /// `NotFound` when only this date is missing.
    pub fn get(&self, date: NaiveDate) -> AppResult<DayRecord> {
        let store = self.load()?.into_store();

        if store.is_empty() {
            return Err(AppError::NoData);
        }

        store
            .get(&date)
            .cloned()
            .ok_or_else(|| AppError::NotFound(date.to_string()))
    }
}
