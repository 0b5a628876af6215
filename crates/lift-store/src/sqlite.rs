//! SQLite backend (feature `sqlite`).
//!
//! Creates a single `training.db` in the configured output directory with
//! two tables mirroring the reference relational schema.  SQLite has no
//! array column, so the per-floor histogram is stored as `;`-joined text.

use std::path::Path;

use rusqlite::Connection;

use crate::store::TrainingStore;
use crate::{RequestId, RequestRecord, SimulationId, SimulationRecord, StoreResult};

/// Writes training data to an SQLite database.
pub struct SqliteStore {
    conn:     Connection,
    finished: bool,
}

impl SqliteStore {
    /// Open (or create) `training.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> StoreResult<Self> {
        let conn = Connection::open(dir.join("training.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS simulations (
                 id                INTEGER PRIMARY KEY AUTOINCREMENT,
                 wait_time         REAL    NOT NULL,
                 elevator_speed    REAL    NOT NULL,
                 expo_lambda       REAL    NOT NULL,
                 start_unix_secs   INTEGER NOT NULL,
                 duration          REAL    NOT NULL,
                 base_floor        INTEGER,
                 base_floor_weight REAL,
                 floor_min         INTEGER NOT NULL,
                 floor_max         INTEGER NOT NULL,
                 random_seed       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS elevator_requests (
                 id                         INTEGER PRIMARY KEY AUTOINCREMENT,
                 simulation_id              INTEGER NOT NULL REFERENCES simulations(id),
                 current_floor              INTEGER NOT NULL,
                 last_floor                 INTEGER NOT NULL,
                 time_idle                  REAL    NOT NULL,
                 timestamp_unix_secs        REAL    NOT NULL,
                 floor_demand_histogram     TEXT    NOT NULL,
                 requests_entropy           REAL,
                 mean_requested_floor       REAL,
                 distance_to_center_of_mass REAL,
                 next_floor_requested       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl TrainingStore for SqliteStore {
    fn create_simulation(&mut self, record: &SimulationRecord) -> StoreResult<SimulationId> {
        self.conn.execute(
            "INSERT INTO simulations \
             (wait_time, elevator_speed, expo_lambda, start_unix_secs, duration, \
              base_floor, base_floor_weight, floor_min, floor_max, random_seed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                record.wait_time,
                record.elevator_speed,
                record.expo_lambda,
                record.start_unix_secs,
                record.duration,
                record.base_floor,
                record.base_floor_weight,
                record.floor_min,
                record.floor_max,
                record.random_seed as i64,
            ],
        )?;
        Ok(SimulationId(self.conn.last_insert_rowid() as u64))
    }

    fn create_request(&mut self, record: &RequestRecord) -> StoreResult<RequestId> {
        let histogram = record
            .floor_demand_histogram
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(";");
        {
            let mut stmt = self.conn.prepare_cached(
                "INSERT INTO elevator_requests \
                 (simulation_id, current_floor, last_floor, time_idle, timestamp_unix_secs, \
                  floor_demand_histogram, requests_entropy, mean_requested_floor, \
                  distance_to_center_of_mass, next_floor_requested) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            stmt.execute(rusqlite::params![
                record.simulation_id.0 as i64,
                record.current_floor,
                record.last_floor,
                record.time_idle,
                record.timestamp_unix_secs,
                histogram,
                record.requests_entropy,
                record.mean_requested_floor,
                record.distance_to_center_of_mass,
                record.next_floor_requested,
            ])?;
        }
        Ok(RequestId(self.conn.last_insert_rowid() as u64))
    }

    fn finish(&mut self) -> StoreResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
