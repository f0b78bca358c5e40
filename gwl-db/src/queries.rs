//! Typed query methods backing the dashboard callbacks.
//!
//! Selections arrive as sets of strings and are bound as `IN (...)`
//! parameter lists; the variable column name comes from
//! [`Variable::key`](gwl_core::Variable::key) and is never user text.

use crate::models::SiteDateValue;
use crate::Database;
use gwl_core::FilterSelection;
use rusqlite::params_from_iter;
use std::collections::BTreeSet;

/// `?, ?, ?` with `n` placeholders.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

impl Database {
    /// Total number of rows in the observation table.
    pub fn query_observation_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Sorted unique regions, used to populate the region selector.
    pub fn query_regions(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT DISTINCT region FROM observations ORDER BY region")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Sorted unique site ids whose rows lie in one of `regions`.
    ///
    /// An empty region set yields no sites: nothing is offered until a
    /// region is picked.
    pub fn query_sites_for_regions(&self, regions: &BTreeSet<String>) -> anyhow::Result<Vec<String>> {
        if regions.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn()?;
        let sql = format!(
            "SELECT DISTINCT site_id FROM observations
             WHERE region IN ({})
             ORDER BY site_id",
            placeholders(regions.len())
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(regions.iter()), |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::debug!(
            "query: query_sites_for_regions returned {} sites for {} regions",
            rows.len(),
            regions.len()
        );
        Ok(rows)
    }

    /// Sorted unique regions that contain any of `site_ids`.
    pub fn query_regions_for_sites(&self, site_ids: &BTreeSet<String>) -> anyhow::Result<Vec<String>> {
        if site_ids.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn()?;
        let sql = format!(
            "SELECT DISTINCT region FROM observations
             WHERE site_id IN ({})
             ORDER BY region",
            placeholders(site_ids.len())
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(site_ids.iter()), |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Rows matching the selection, projected onto the selected variable.
    ///
    /// Rows are restricted to the selected regions and, when any are
    /// selected, to the selected sites. Ordered by site, then date, then
    /// file order. Rows with a NULL value are kept. No regions selected
    /// means no rows.
    pub fn query_filtered(&self, selection: &FilterSelection) -> anyhow::Result<Vec<SiteDateValue>> {
        if !selection.has_regions() {
            return Ok(Vec::new());
        }
        let mut sql = format!(
            "SELECT site_id, date, {} FROM observations WHERE region IN ({})",
            selection.variable.key(),
            placeholders(selection.regions.len())
        );
        if selection.has_sites() {
            sql.push_str(&format!(
                " AND site_id IN ({})",
                placeholders(selection.site_ids.len())
            ));
        }
        sql.push_str(" ORDER BY site_id, date, row_id");

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let bound = selection.regions.iter().chain(selection.site_ids.iter());
        let rows = stmt
            .query_map(params_from_iter(bound), |row| {
                Ok(SiteDateValue {
                    site_id: row.get(0)?,
                    date: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_filtered returned {} rows for {}",
            rows.len(),
            selection.variable
        );
        Ok(rows)
    }
}
