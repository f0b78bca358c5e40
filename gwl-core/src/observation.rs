use crate::error::{GwlError, Result};
use crate::variable::Variable;
use chrono::NaiveDate;
use csv::StringRecord;
use gwl_utils::dates::coerce_date;
use serde::Serialize;

/// Header of the region (province) column in the source CSV.
pub const REGION_COLUMN: &str = "ostan";

/// Header of the site identifier (UTM) column in the source CSV.
pub const SITE_COLUMN: &str = "UTM";

/// Header of the Gregorian date column in the source CSV.
pub const DATE_COLUMN: &str = "gregorian_date";

/// A single groundwater level measurement at one monitoring site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub region: String,
    pub site_id: String,
    pub date: NaiveDate,
    pub water_level_new: Option<f64>,
    pub reduced_level: Option<f64>,
    pub water_level: Option<f64>,
}

impl Observation {
    /// Value of the requested measured field, if recorded.
    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::WaterLevelNew => self.water_level_new,
            Variable::ReducedLevel => self.reduced_level,
            Variable::WaterLevel => self.water_level,
        }
    }

    /// Build an observation from one CSV record.
    ///
    /// Returns `None` when the date doesn't parse or the row has no region
    /// or site id; such rows are excluded from the table permanently.
    /// Non-numeric measurement cells become `None`.
    pub fn from_record(record: &StringRecord, columns: &CsvColumns) -> Option<Observation> {
        let region = record.get(columns.region)?.trim();
        let site_id = record.get(columns.site_id)?.trim();
        if region.is_empty() || site_id.is_empty() {
            return None;
        }
        let date = coerce_date(record.get(columns.date)?)?;
        let number = |idx: usize| {
            record
                .get(idx)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        Some(Observation {
            region: region.to_string(),
            site_id: site_id.to_string(),
            date,
            water_level_new: number(columns.water_level_new),
            reduced_level: number(columns.reduced_level),
            water_level: number(columns.water_level),
        })
    }
}

/// Positions of the required columns within a CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvColumns {
    pub region: usize,
    pub site_id: usize,
    pub date: usize,
    pub water_level_new: usize,
    pub reduced_level: usize,
    pub water_level: usize,
}

impl CsvColumns {
    /// Locate the required columns by header name.
    ///
    /// A leading UTF-8 BOM on the first header is ignored. Extra columns
    /// are allowed; a missing required column is an error.
    pub fn from_headers(headers: &StringRecord) -> Result<CsvColumns> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|h| *h == name)
                .ok_or_else(|| GwlError::MissingColumn(name.to_string()))
        };
        Ok(CsvColumns {
            region: find(REGION_COLUMN)?,
            site_id: find(SITE_COLUMN)?,
            date: find(DATE_COLUMN)?,
            water_level_new: find(Variable::WaterLevelNew.csv_column())?,
            reduced_level: find(Variable::ReducedLevel.csv_column())?,
            water_level: find(Variable::WaterLevel.csv_column())?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{CsvColumns, Observation};
    use crate::{error::GwlError, variable::Variable};
    use chrono::NaiveDate;
    use csv::{ReaderBuilder, StringRecord};

    const STR_RESULT: &str = "\u{feff}id,ostan,UTM,shamsi_date,gregorian_date,sath_ab_jadid,taraz,sath-ab
1,Tehran,39S-512-3951,1398/01/15,2019-04-04,12.5,1040.2,13.1
2,Tehran,39S-512-3951,1398/02/15,2019-05-05,,1040.0,
3,Tehran,39S-512-3951,1398/03/15,not-a-date,12.9,1039.8,13.4
4,,39S-600-3000,1398/03/15,2019-06-05,1.0,2.0,3.0
5,Fars,40R-100-3300,1398/03/15,2019-06-05 00:00:00,n/a,1500.5,7.25
";

    fn records() -> (StringRecord, Vec<StringRecord>) {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(STR_RESULT.as_bytes());
        let headers = rdr.headers().unwrap().clone();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn test_columns_from_headers_with_bom() {
        let (headers, _) = records();
        let columns = CsvColumns::from_headers(&headers).unwrap();
        assert_eq!(columns.region, 1);
        assert_eq!(columns.site_id, 2);
        assert_eq!(columns.date, 4);
        assert_eq!(columns.water_level, 7);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let headers = StringRecord::from(vec!["ostan", "UTM", "gregorian_date", "taraz"]);
        assert_eq!(
            CsvColumns::from_headers(&headers),
            Err(GwlError::MissingColumn("sath_ab_jadid".to_string()))
        );
    }

    #[test]
    fn test_from_record() {
        let (headers, rows) = records();
        let columns = CsvColumns::from_headers(&headers).unwrap();
        let parsed: Vec<Option<Observation>> = rows
            .iter()
            .map(|r| Observation::from_record(r, &columns))
            .collect();

        let first = parsed[0].as_ref().unwrap();
        assert_eq!(first.region, "Tehran");
        assert_eq!(first.site_id, "39S-512-3951");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 4, 4).unwrap());
        assert_eq!(first.value(Variable::WaterLevelNew), Some(12.5));
        assert_eq!(first.value(Variable::ReducedLevel), Some(1040.2));

        let nulls = parsed[1].as_ref().unwrap();
        assert_eq!(nulls.water_level_new, None);
        assert_eq!(nulls.water_level, None);

        // Bad date and missing region are dropped
        assert!(parsed[2].is_none());
        assert!(parsed[3].is_none());

        let fars = parsed[4].as_ref().unwrap();
        assert_eq!(fars.date, NaiveDate::from_ymd_opt(2019, 6, 5).unwrap());
        assert_eq!(fars.water_level_new, None);
        assert_eq!(fars.water_level, Some(7.25));
    }
}
