//! In-memory SQLite table of groundwater level observations.
//!
//! The dashboard loads its CSV once at startup into an in-memory SQLite
//! database and answers every filter change with typed queries against it.
//! Nothing writes to the table after the initial load.
//!
//! # Usage
//!
//! ```rust
//! use gwl_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_observations(
//!     "ostan,UTM,gregorian_date,sath_ab_jadid,taraz,sath-ab\nFars,40R-1,2020-01-01,3.5,1500.0,4.0\n",
//! )
//! .unwrap();
//!
//! let regions = db.query_regions().unwrap();
//! assert_eq!(regions, vec!["Fars".to_string()]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//! - `observations` - one row per accepted CSV row, in file order

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use loader::LoadReport;

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory SQLite database holding the observation table.
///
/// Cheaply cloneable (via `Arc`) and shareable across server tasks. The
/// connection sits behind a `Mutex` because `rusqlite::Connection` is not
/// `Sync`; every query holds the lock only for its own duration.
///
/// # Example
///
/// ```rust
/// use gwl_db::Database;
///
/// let db = Database::new().unwrap();
/// assert_eq!(db.query_observation_count().unwrap(), 0);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("observation database lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "ostan,UTM,gregorian_date,sath_ab_jadid,taraz,sath-ab\nFars,40R-1,2020-01-01,3.5,1500.0,4.0\n";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_observations(CSV).unwrap();
        assert_eq!(
            db2.query_observation_count().unwrap(),
            1,
            "Clone should see same data via shared Arc"
        );
    }

    #[test]
    fn database_is_shareable_across_threads() {
        let db = Database::new().unwrap();
        db.load_observations(CSV).unwrap();
        let handle = {
            let db = db.clone();
            std::thread::spawn(move || db.query_regions().unwrap())
        };
        assert_eq!(handle.join().unwrap(), vec!["Fars".to_string()]);
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_regions().unwrap().is_empty(), "New database should have no regions");
    }
}
