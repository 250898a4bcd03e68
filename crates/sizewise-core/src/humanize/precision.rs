/// Precision resolution — how many decimal places a scaled value keeps.
use super::options::{ConversionOptions, Rounding};
use crate::units::StorageUnit;

/// Decimal places for one value, and whether they are rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub places: u32,
    /// Per-unit entries render with exactly `places` decimals (`9.720`);
    /// global and default precision drop trailing zeros (`9.7`, `90`).
    pub fixed: bool,
}

/// Decimal places for `scaled`, already expressed in `unit`.
///
/// Global policy wins, then a per-unit entry, then the default ladder:
/// 2 places below 10, 1 below 100, none at or above 100 (and none at 0).
pub fn resolve_precision(scaled: f64, unit: StorageUnit, options: &ConversionOptions) -> Precision {
    match &options.round {
        Some(Rounding::Global(places)) => Precision {
            places: *places,
            fixed: false,
        },
        Some(Rounding::PerUnit(map)) if map.contains_key(&unit) => Precision {
            places: map[&unit],
            fixed: true,
        },
        _ => Precision {
            places: default_places(scaled),
            fixed: false,
        },
    }
}

fn default_places(scaled: f64) -> u32 {
    if scaled > 0.0 && scaled < 10.0 {
        2
    } else if (10.0..100.0).contains(&scaled) {
        1
    } else {
        0
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    // Huge values overflow the factor; they have no fractional digits anyway.
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
