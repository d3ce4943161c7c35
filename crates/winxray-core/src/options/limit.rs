use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Limit {
    Showers { showers: u64 },
    Time { time_s: f64 },
}

impl Limit {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Showers { .. } => "showers",
            Self::Time { .. } => "time",
        }
    }
}
