/// Multiplier base for one rung of the ladder.
use serde::{Deserialize, Serialize};

/// Power-of-two (1024) or power-of-ten (1000) stepping between rungs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    #[default]
    #[serde(rename = "base2")]
    Binary,
    #[serde(rename = "base10")]
    Decimal,
}

impl Base {
    /// Factor between two adjacent rungs.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Binary => 1024.0,
            Self::Decimal => 1000.0,
        }
    }

    /// `multiplier ^ index`; index 0 is always exactly 1.
    pub fn scale(self, index: usize) -> f64 {
        if index == 0 {
            return 1.0;
        }
        self.multiplier().powi(index as i32)
    }
}
