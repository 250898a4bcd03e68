/// The fixed storage ladder: bytes, KB, MB, GB, TB.
///
/// The ladder itself is immutable. Custom display strings are supplied per
/// call as a [`UnitLabels`] map and consulted only when a label is resolved,
/// so concurrent callers with different overrides never see each other's
/// labels.
use crate::error::UnitError;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Per-call label overrides. Units without an entry keep their default label.
pub type UnitLabels = HashMap<StorageUnit, CompactString>;

/// One rung of the storage ladder. Declaration order is ladder order.
///
/// Singular "byte" is not a separate rung: it is a display form of
/// [`StorageUnit::Bytes`] chosen at formatting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StorageUnit {
    #[serde(rename = "bytes", alias = "byte", alias = "B")]
    Bytes,
    #[serde(rename = "KB")]
    Kilobytes,
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "GB")]
    Gigabytes,
    #[serde(rename = "TB")]
    Terabytes,
}

impl StorageUnit {
    /// All rungs, lowest first.
    pub const LADDER: [StorageUnit; 5] = [
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
    ];

    /// Highest rung; the implicit ceiling when no `maxUnit` is given.
    pub const MAX: StorageUnit = Self::Terabytes;

    /// Built-in plural label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
        }
    }

    /// Built-in singular label. Only the bytes rung has a distinct form.
    pub fn singular_label(self) -> &'static str {
        match self {
            Self::Bytes => "byte",
            other => other.label(),
        }
    }

    /// Ladder position, 0 for bytes through 4 for TB.
    pub fn exponent(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StorageUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" | "byte" | "bytes" => Ok(Self::Bytes),
            "KB" => Ok(Self::Kilobytes),
            "MB" => Ok(Self::Megabytes),
            "GB" => Ok(Self::Gigabytes),
            "TB" => Ok(Self::Terabytes),
            other => Err(UnitError::UnknownUnit(other.to_owned())),
        }
    }
}

/// Display string for `unit`: the override if one is present, else the default.
pub fn label_of(unit: StorageUnit, overrides: &UnitLabels) -> CompactString {
    overrides
        .get(&unit)
        .cloned()
        .unwrap_or_else(|| CompactString::const_new(unit.label()))
}

/// Ladder position of `unit`.
pub fn index_of(unit: StorageUnit) -> usize {
    unit.exponent()
}

/// Rung at `index`.
pub fn unit_at(index: usize) -> Result<StorageUnit, UnitError> {
    StorageUnit::LADDER
        .get(index)
        .copied()
        .ok_or(UnitError::IndexOutOfRange(index))
}
