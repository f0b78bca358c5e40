use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user's current dashboard filter.
///
/// - `regions`: empty means no region picked yet; nothing is shown.
/// - `site_ids`: empty means every site under the selected regions.
/// - `variable`: the measured field to chart and test.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub regions: BTreeSet<String>,
    #[serde(default)]
    pub site_ids: BTreeSet<String>,
    #[serde(default)]
    pub variable: Variable,
}

impl FilterSelection {
    pub fn new<R, S>(regions: R, site_ids: S, variable: Variable) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            site_ids: site_ids.into_iter().map(Into::into).collect(),
            variable,
        }
    }

    pub fn has_regions(&self) -> bool {
        !self.regions.is_empty()
    }

    pub fn has_sites(&self) -> bool {
        !self.site_ids.is_empty()
    }
}
