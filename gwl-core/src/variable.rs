use crate::error::GwlError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the three measured water-level fields.
///
/// Serialized by its domain key (`water_level_new`, ...). The source CSV
/// column names (`sath_ab_jadid`, `taraz`, `sath-ab`) are accepted as
/// aliases when deserializing or parsing.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    #[default]
    #[serde(alias = "sath_ab_jadid")]
    WaterLevelNew,
    #[serde(alias = "taraz")]
    ReducedLevel,
    #[serde(alias = "sath-ab")]
    WaterLevel,
}

impl Variable {
    pub const ALL: [Variable; 3] = [
        Variable::WaterLevelNew,
        Variable::ReducedLevel,
        Variable::WaterLevel,
    ];

    /// Domain key, also the SQL column name.
    pub fn key(&self) -> &'static str {
        match self {
            Variable::WaterLevelNew => "water_level_new",
            Variable::ReducedLevel => "reduced_level",
            Variable::WaterLevel => "water_level",
        }
    }

    /// Header of this field in the source CSV.
    pub fn csv_column(&self) -> &'static str {
        match self {
            Variable::WaterLevelNew => "sath_ab_jadid",
            Variable::ReducedLevel => "taraz",
            Variable::WaterLevel => "sath-ab",
        }
    }

    /// Human-readable label for selectors and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Variable::WaterLevelNew => "New water level",
            Variable::ReducedLevel => "Reduced level",
            Variable::WaterLevel => "Water level",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variable {
    type Err = GwlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Variable::ALL
            .into_iter()
            .find(|v| v.key() == s || v.csv_column() == s)
            .ok_or_else(|| GwlError::UnknownVariable(s.to_string()))
    }
}
