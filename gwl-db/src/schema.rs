//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// `observations` keeps one row per accepted CSV row. `row_id` preserves
/// file order so same-day readings of one site keep their original
/// sequence. Measurement columns are nullable; dates are stored as
/// `YYYY-MM-DD` text so they sort chronologically.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS observations (
        row_id INTEGER PRIMARY KEY,
        region TEXT NOT NULL,
        site_id TEXT NOT NULL,
        date TEXT NOT NULL,
        water_level_new REAL,
        reduced_level REAL,
        water_level REAL
    );
    CREATE INDEX IF NOT EXISTS idx_obs_region ON observations(region);
    CREATE INDEX IF NOT EXISTS idx_obs_site ON observations(site_id);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in ["idx_obs_region", "idx_obs_site"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?1",
                    [idx],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
