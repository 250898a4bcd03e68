/// Options that shape a single `humanize` call.
///
/// Plain data: every combination is valid, so there is no validation step.
/// Options deserialize from the camelCase JSON shape the console passes
/// around (`handleNegatives`, `maxUnit`, `unit`, `round`, `unitLabels`).
use crate::error::UnitError;
use crate::units::{Base, StorageUnit, UnitLabels};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decimal-place policy.
///
/// A bare number applies to every unit; a map applies only to the units it
/// names and leaves the rest on the magnitude-based default ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rounding {
    Global(u32),
    PerUnit(BTreeMap<StorageUnit, u32>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    pub base: Base,
    /// When false, negative magnitudes collapse to the zero result.
    pub handle_negatives: bool,
    /// Highest rung the resolver may pick. Only ever lowers the result.
    pub max_unit: Option<StorageUnit>,
    /// Forces the output rung regardless of magnitude.
    #[serde(rename = "unit")]
    pub pinned_unit: Option<StorageUnit>,
    pub round: Option<Rounding>,
    pub unit_labels: UnitLabels,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            base: Base::Binary,
            handle_negatives: true,
            max_unit: None,
            pinned_unit: None,
            round: None,
            unit_labels: UnitLabels::new(),
        }
    }
}

impl ConversionOptions {
    /// Parse options from their JSON form. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    pub fn with_handle_negatives(mut self, handle: bool) -> Self {
        self.handle_negatives = handle;
        self
    }

    pub fn with_max_unit(mut self, unit: StorageUnit) -> Self {
        self.max_unit = Some(unit);
        self
    }

    pub fn with_unit(mut self, unit: StorageUnit) -> Self {
        self.pinned_unit = Some(unit);
        self
    }

    /// Same number of decimal places for every unit.
    pub fn with_round(mut self, places: u32) -> Self {
        self.round = Some(Rounding::Global(places));
        self
    }

    /// Decimal places for one unit. Replaces a global policy if one was set.
    pub fn with_unit_round(mut self, unit: StorageUnit, places: u32) -> Self {
        let mut map = match self.round.take() {
            Some(Rounding::PerUnit(map)) => map,
            _ => BTreeMap::new(),
        };
        map.insert(unit, places);
        self.round = Some(Rounding::PerUnit(map));
        self
    }

    pub fn with_label(mut self, unit: StorageUnit, label: impl Into<CompactString>) -> Self {
        self.unit_labels.insert(unit, label.into());
        self
    }

    /// The effective ceiling: `max_unit`, or the top of the ladder.
    pub fn ceiling(&self) -> StorageUnit {
        self.max_unit.unwrap_or(StorageUnit::MAX)
    }
}
