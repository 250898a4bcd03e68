/// Power resolution — which rung a magnitude is displayed in.
use super::options::ConversionOptions;
use crate::units::{index_of, StorageUnit};
use tracing::{debug, trace};

const TOP: usize = StorageUnit::LADDER.len() - 1;

/// Ladder index (`0..=4`) for a positive `magnitude`.
///
/// A pinned unit wins outright. Otherwise the index is
/// `floor(log(magnitude) / log(multiplier))`, lowered to the options'
/// ceiling and then clamped into the ladder. Callers filter out zero,
/// negative and non-finite magnitudes first; anything that still produces
/// an out-of-range logarithm lands on the nearest end of the ladder.
pub fn resolve_power(magnitude: f64, options: &ConversionOptions) -> usize {
    if let Some(unit) = options.pinned_unit {
        trace!(?unit, "power pinned by caller");
        return index_of(unit);
    }

    let multiplier = options.base.multiplier();
    let mut raw = (magnitude.ln() / multiplier.ln()).floor();

    // The log ratio can land one ulp off at exact rung boundaries (1024^3).
    if raw.is_finite() && raw >= 0.0 {
        if magnitude >= multiplier.powi(raw as i32 + 1) {
            raw += 1.0;
        } else if raw >= 1.0 && magnitude < multiplier.powi(raw as i32) {
            raw -= 1.0;
        }
    }

    let ceiling = index_of(options.ceiling());
    // NaN falls through both comparisons and is treated as rung 0.
    let index = if raw >= ceiling as f64 {
        if raw > ceiling as f64 {
            trace!(raw, ceiling, "power clamped to max unit");
        }
        ceiling
    } else if raw > 0.0 {
        raw as usize
    } else {
        if raw < 0.0 || raw.is_nan() {
            debug!(magnitude, raw, "log-estimated power below ladder, using bytes");
        }
        0
    };

    index.min(TOP)
}
