//! CSV loading for populating the in-memory observation table.
//!
//! # CSV Format
//!
//! Header row required; column order is free and extra columns are ignored.
//! Required headers: `ostan`, `UTM`, `gregorian_date`, `sath_ab_jadid`,
//! `taraz`, `sath-ab`. A UTF-8 BOM before the first header is tolerated.
//!
//! ```text
//! ostan,UTM,gregorian_date,sath_ab_jadid,taraz,sath-ab
//! Tehran,39S-512-3951,2019-04-04,12.5,1040.2,13.1
//! ```

use crate::Database;
use anyhow::Context;
use gwl_core::{CsvColumns, Observation};
use rusqlite::params;
use std::io::Read;
use std::path::Path;

/// Row counts from a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows inserted into the table.
    pub loaded: usize,
    /// Rows dropped for an unparseable date or a blank region/site.
    pub skipped: usize,
}

impl Database {
    /// Load observations from a CSV string.
    pub fn load_observations(&self, csv_data: &str) -> anyhow::Result<LoadReport> {
        self.load_observations_from_reader(csv_data.as_bytes())
    }

    /// Load observations from a CSV file on disk.
    pub fn load_observations_file(&self, path: &Path) -> anyhow::Result<LoadReport> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        self.load_observations_from_reader(file)
            .with_context(|| format!("failed to load {}", path.display()))
    }

    /// Load observations from any CSV byte stream.
    ///
    /// A missing required column fails the whole load. Individual rows whose
    /// date does not parse are skipped; non-numeric measurement cells are
    /// stored as NULL. All inserts happen in one transaction.
    pub fn load_observations_from_reader<R: Read>(&self, reader: R) -> anyhow::Result<LoadReport> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let columns = CsvColumns::from_headers(rdr.headers()?)?;

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let mut report = LoadReport::default();
        {
            let mut stmt = tx.prepare(
                "INSERT INTO observations
                 (region, site_id, date, water_level_new, reduced_level, water_level)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for result in rdr.records() {
                let record = result?;
                let Some(obs) = Observation::from_record(&record, &columns) else {
                    report.skipped += 1;
                    continue;
                };
                stmt.execute(params![
                    obs.region,
                    obs.site_id,
                    obs.date,
                    obs.water_level_new,
                    obs.reduced_level,
                    obs.water_level,
                ])?;
                report.loaded += 1;
            }
        }
        tx.commit()?;

        log::info!(
            "loader: Loaded {} observations, skipped {} unparseable",
            report.loaded,
            report.skipped
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::LoadReport;
    use crate::Database;

    const HEADER: &str = "ostan,UTM,gregorian_date,sath_ab_jadid,taraz,sath-ab\n";

    #[test]
    fn load_observations_from_csv() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{HEADER}\
Tehran,39S-1,2019-04-04,12.5,1040.2,13.1
Tehran,39S-1,2019-05-05,,1040.0,
Fars,40R-7,2019-06-05,3.0,1500.5,7.25
"
        );
        let report = db.load_observations(&csv).unwrap();
        assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });

        let conn = db.conn().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let missing: Option<f64> = conn
            .query_row(
                "SELECT water_level_new FROM observations WHERE date = '2019-05-05'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(missing.is_none(), "Empty cell should be stored as NULL");
    }

    #[test]
    fn load_observations_skips_bad_dates() {
        let db = Database::new().unwrap();
        let csv = format!(
            "{HEADER}\
Tehran,39S-1,2019-04-04,1,2,3
Tehran,39S-1,,1,2,3
Tehran,39S-1,1398-13-01,1,2,3
Tehran,39S-1,yesterday,1,2,3
Tehran,39S-1,2019/04/06,1,2,3
"
        );
        let report = db.load_observations(&csv).unwrap();
        assert_eq!(report, LoadReport { loaded: 2, skipped: 3 });
    }

    #[test]
    fn load_observations_normalizes_dates() {
        let db = Database::new().unwrap();
        let csv = format!("{HEADER}Tehran,39S-1,2019-04-06 00:00:00,1,2,3\n");
        db.load_observations(&csv).unwrap();

        let conn = db.conn().unwrap();
        let date: String = conn
            .query_row("SELECT date FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(date, "2019-04-06");
    }

    #[test]
    fn load_observations_requires_columns() {
        let db = Database::new().unwrap();
        let err = db
            .load_observations("ostan,UTM,gregorian_date\nTehran,39S-1,2019-04-04\n")
            .unwrap_err();
        assert!(err.to_string().contains("sath_ab_jadid"));
    }

    #[test]
    fn load_observations_file_reports_missing_path() {
        let db = Database::new().unwrap();
        let err = db
            .load_observations_file(std::path::Path::new("/nonexistent/combined_waterlevel.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("combined_waterlevel.csv"));
    }
}
