//! Durable storage for aggregated frequency maps.
//!
//! One SQLite table, `chain_freqs(prefix1, prefix2, suffix, freq)`, holds
//! one row per frequency-map entry. The table's DDL is an externally
//! supplied schema script; this module only decides when to run it and what
//! rows to write. Sentinel elements are stored verbatim as the
//! `__BEGIN_SENTENCE__` / `__END_SENTENCE__` literals, which downstream
//! chain-walking consumers match on.
//!
//! The connection is a scoped resource: opened per call, committed or
//! failed, and released on every exit path. Row insertion is transactional
//! all-or-nothing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::chain::triplet::{BEGIN, END, FrequencyMap, Gram, Triplet};
use crate::error::{KusariError, Result};

/// How a [`ChainStore::persist`] call treats the existing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistMode {
    /// Run the schema script first (dropping or recreating the table is the
    /// script's business), then insert every entry.
    Reinitialize,
    /// Insert every entry into the existing table without touching the
    /// schema. Rows are appended as-is, with no deduplication against prior
    /// contents.
    Append,
}

/// One stored row of the `chain_freqs` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRow {
    /// First triplet element (token text or the BEGIN literal).
    pub prefix1: String,
    /// Second triplet element (always token text).
    pub prefix2: String,
    /// Third triplet element (token text or the END literal).
    pub suffix: String,
    /// Stored occurrence count.
    pub freq: u64,
}

/// Store that persists frequency maps into a SQLite table.
pub struct ChainStore {
    db_path: PathBuf,
    schema_path: PathBuf,
}

impl ChainStore {
    /// Create a store for the given database file and schema script.
    ///
    /// The schema script is only read when persisting with
    /// [`PersistMode::Reinitialize`].
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(db_path: P, schema_path: Q) -> Self {
        ChainStore {
            db_path: db_path.as_ref().to_path_buf(),
            schema_path: schema_path.as_ref().to_path_buf(),
        }
    }

    /// Persist one frequency map.
    ///
    /// All rows are written inside a single transaction; either every entry
    /// is committed or none are. Connectivity and schema failures propagate
    /// unrecovered.
    pub fn persist(&self, freqs: &FrequencyMap, mode: PersistMode) -> Result<()> {
        let mut conn = Connection::open(&self.db_path)?;

        if mode == PersistMode::Reinitialize {
            let schema = fs::read_to_string(&self.schema_path).map_err(|e| {
                KusariError::schema(format!(
                    "failed to read schema script {}: {}",
                    self.schema_path.display(),
                    e
                ))
            })?;
            debug!("executing schema script {}", self.schema_path.display());
            conn.execute_batch(&schema)?;
        }

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO chain_freqs (prefix1, prefix2, suffix, freq) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (triplet, freq) in freqs {
                stmt.execute(params![
                    triplet.first.as_str(),
                    triplet.second.as_str(),
                    triplet.third.as_str(),
                    *freq as i64,
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "persisted {} triplet rows into {} ({:?})",
            freqs.len(),
            self.db_path.display(),
            mode
        );
        Ok(())
    }

    /// Read every stored row back, in table order.
    pub fn rows(&self) -> Result<Vec<ChainRow>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt =
            conn.prepare("SELECT prefix1, prefix2, suffix, freq FROM chain_freqs")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (prefix1, prefix2, suffix, freq) = row?;
            let freq = u64::try_from(freq).map_err(|_| {
                KusariError::storage(format!(
                    "negative frequency {} for ({}, {}, {})",
                    freq, prefix1, prefix2, suffix
                ))
            })?;
            out.push(ChainRow {
                prefix1,
                prefix2,
                suffix,
                freq,
            });
        }
        Ok(out)
    }

    /// Load the full table back into a frequency map.
    ///
    /// Duplicate rows for the same triplet (the product of append-mode
    /// persists) are summed.
    pub fn load(&self) -> Result<FrequencyMap> {
        let mut freqs = FrequencyMap::default();
        for row in self.rows()? {
            let triplet = Triplet {
                first: decode_prefix(row.prefix1),
                second: Gram::Token(row.prefix2),
                third: decode_suffix(row.suffix),
            };
            *freqs.entry(triplet).or_insert(0) += row.freq;
        }
        Ok(freqs)
    }
}

fn decode_prefix(text: String) -> Gram {
    if text == BEGIN {
        Gram::Begin
    } else {
        Gram::Token(text)
    }
}

fn decode_suffix(text: String) -> Gram {
    if text == END {
        Gram::End
    } else {
        Gram::Token(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCHEMA: &str = "DROP TABLE IF EXISTS chain_freqs;\n\
                          CREATE TABLE chain_freqs (\n\
                              prefix1 TEXT NOT NULL,\n\
                              prefix2 TEXT NOT NULL,\n\
                              suffix TEXT NOT NULL,\n\
                              freq INTEGER NOT NULL\n\
                          );\n";

    fn store_in(dir: &TempDir) -> ChainStore {
        let schema_path = dir.path().join("schema.sql");
        fs::write(&schema_path, SCHEMA).unwrap();
        ChainStore::new(dir.path().join("chain.db"), schema_path)
    }

    fn sample_freqs() -> FrequencyMap {
        let mut freqs = FrequencyMap::default();
        freqs.insert(Triplet::begin("hello", "world"), 1);
        freqs.insert(Triplet::interior("hello", "world", "."), 1);
        freqs.insert(Triplet::end("world", "."), 1);
        freqs
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let freqs = sample_freqs();

        store.persist(&freqs, PersistMode::Reinitialize).unwrap();

        assert_eq!(store.rows().unwrap().len(), freqs.len());
        assert_eq!(store.load().unwrap(), freqs);
    }

    #[test]
    fn test_persist_stores_sentinel_literals_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .persist(&sample_freqs(), PersistMode::Reinitialize)
            .unwrap();

        let rows = store.rows().unwrap();
        assert!(rows.iter().any(|r| r.prefix1 == "__BEGIN_SENTENCE__"));
        assert!(rows.iter().any(|r| r.suffix == "__END_SENTENCE__"));
    }

    #[test]
    fn test_reinitialize_replaces_prior_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .persist(&sample_freqs(), PersistMode::Reinitialize)
            .unwrap();
        store
            .persist(&sample_freqs(), PersistMode::Reinitialize)
            .unwrap();

        // The schema script drops the table, so no rows accumulate.
        assert_eq!(store.rows().unwrap().len(), 3);
    }

    #[test]
    fn test_append_inserts_without_deduplication() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .persist(&sample_freqs(), PersistMode::Reinitialize)
            .unwrap();
        store.persist(&sample_freqs(), PersistMode::Append).unwrap();

        assert_eq!(store.rows().unwrap().len(), 6);

        // load() sums duplicate rows back together.
        let loaded = store.load().unwrap();
        assert_eq!(loaded[&Triplet::begin("hello", "world")], 2);
    }

    #[test]
    fn test_missing_schema_script_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let store = ChainStore::new(dir.path().join("chain.db"), dir.path().join("absent.sql"));

        let err = store
            .persist(&sample_freqs(), PersistMode::Reinitialize)
            .unwrap_err();
        assert!(matches!(err, KusariError::Schema(_)));
    }

    #[test]
    fn test_append_into_missing_table_propagates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        // No reinitialize ever ran, so the table does not exist.
        let err = store
            .persist(&sample_freqs(), PersistMode::Append)
            .unwrap_err();
        assert!(matches!(err, KusariError::Sqlite(_)));
    }
}
