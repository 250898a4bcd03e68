/// Humanizer — raw byte counts to `{ value, unit, formatted }`.
///
/// Orchestrates the ladder, [`power::resolve_power`] and
/// [`precision::resolve_precision`]. Every input resolves to a result:
/// non-finite, zero and disallowed negative magnitudes all become the
/// canonical `"0 bytes"` value.
pub mod options;
pub mod power;
pub mod precision;

pub use options::{ConversionOptions, Rounding};
pub use power::resolve_power;
pub use precision::{resolve_precision, round_to, Precision};

use crate::units::{label_of, StorageUnit};
use compact_str::CompactString;
use std::fmt;
use tracing::debug;

/// A humanized storage quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanizeResult {
    /// Rounded value in `rung`, carrying the input's sign.
    pub value: f64,
    /// Display label, after overrides and singular/plural selection.
    pub unit: CompactString,
    /// Ladder rung the value is expressed in.
    pub rung: StorageUnit,
    /// `{sign}{value} {unit}`.
    pub formatted: String,
}

impl HumanizeResult {
    /// The canonical result for zero and for every malformed input.
    ///
    /// Always the built-in `bytes` label, whatever overrides were passed.
    pub fn zero() -> Self {
        let label = StorageUnit::Bytes.label();
        Self {
            value: 0.0,
            unit: CompactString::const_new(label),
            rung: StorageUnit::Bytes,
            formatted: format!("0 {label}"),
        }
    }
}

impl fmt::Display for HumanizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Humanize `magnitude` bytes according to `options`.
pub fn humanize(magnitude: f64, options: &ConversionOptions) -> HumanizeResult {
    if !magnitude.is_finite() || magnitude == 0.0 {
        if magnitude != 0.0 {
            debug!(magnitude, "non-finite magnitude, returning zero result");
        }
        return HumanizeResult::zero();
    }
    if magnitude < 0.0 && !options.handle_negatives {
        debug!(magnitude, "negative magnitude with negatives disabled");
        return HumanizeResult::zero();
    }

    let is_negative = magnitude < 0.0;
    let abs = magnitude.abs();

    let index = resolve_power(abs, options);
    let rung = StorageUnit::LADDER[index];
    let scaled = abs / options.base.scale(index);

    let precision = resolve_precision(scaled, rung, options);
    let rounded = round_to(scaled, precision.places);

    let unit = resolve_label(rung, rounded, options);

    let sign = if is_negative { "-" } else { "" };
    let formatted = if precision.fixed {
        let places = precision.places as usize;
        format!("{sign}{rounded:.places$} {unit}")
    } else {
        format!("{sign}{rounded} {unit}")
    };

    HumanizeResult {
        value: if is_negative { -rounded } else { rounded },
        unit,
        rung,
        formatted,
    }
}

/// Humanize with default options: base 2, negatives kept, default rounding.
pub fn humanize_default(magnitude: f64) -> HumanizeResult {
    humanize(magnitude, &ConversionOptions::default())
}

/// Label for `rung` given the rounded, unsigned value.
///
/// Singular `byte` applies only to the built-in bytes label. A caller who
/// overrides the bytes label gets their string verbatim for every count.
fn resolve_label(rung: StorageUnit, rounded: f64, options: &ConversionOptions) -> CompactString {
    if rung == StorageUnit::Bytes
        && rounded == 1.0
        && !options.unit_labels.contains_key(&StorageUnit::Bytes)
    {
        return CompactString::const_new(rung.singular_label());
    }
    label_of(rung, &options.unit_labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Base;

    fn fmt(magnitude: f64, options: &ConversionOptions) -> String {
        humanize(magnitude, options).formatted
    }

    fn fmt_default(magnitude: f64) -> String {
        humanize_default(magnitude).formatted
    }

    #[test]
    fn zero_is_zero_bytes() {
        let r = humanize_default(0.0);
        assert_eq!(r.value, 0.0);
        assert_eq!(r.unit, "bytes");
        assert_eq!(r.formatted, "0 bytes");

        let labelled = ConversionOptions::default().with_label(StorageUnit::Bytes, "B");
        assert_eq!(fmt(0.0, &labelled), "0 bytes");
    }

    #[test]
    fn non_finite_is_zero_bytes() {
        assert_eq!(humanize_default(f64::NAN), HumanizeResult::zero());
        assert_eq!(fmt_default(f64::INFINITY), "0 bytes");
        assert_eq!(fmt_default(f64::NEG_INFINITY), "0 bytes");
    }

    #[test]
    fn negatives_keep_their_sign() {
        let r = humanize_default(-123.0);
        assert_eq!(r.formatted, "-123 bytes");
        assert_eq!(r.value, -123.0);

        let r = humanize_default(-1_048_576.0);
        assert_eq!(r.formatted, "-1 MB");
        assert_eq!(r.value, -1.0);
    }

    #[test]
    fn negatives_collapse_when_disabled() {
        let opts = ConversionOptions::default().with_handle_negatives(false);
        assert_eq!(fmt(-1_048_576.0, &opts), "0 bytes");
        assert_eq!(fmt(-0.5, &opts), "0 bytes");
    }

    #[test]
    fn picks_units() {
        assert_eq!(fmt_default(1023.0), "1023 bytes");
        assert_eq!(fmt_default(1024.0), "1 KB");
        assert_eq!(fmt_default(1_048_576.0), "1 MB");
        assert_eq!(fmt_default(1_073_741_824.0), "1 GB");
        assert_eq!(fmt_default(1_073_741_824.0 * 40.0), "40 GB");
        assert_eq!(fmt_default(1024f64.powi(4) * 3.0), "3 TB");
    }

    #[test]
    fn default_rounding_ladder() {
        assert_eq!(fmt_default(1024.0 * 1.5), "1.5 KB");
        assert_eq!(fmt_default(1024.0 * 1.75), "1.75 KB");
        assert_eq!(fmt_default(1024.0 * 9.72), "9.72 KB");
        assert_eq!(fmt_default(1024.0 * 12.75), "12.8 KB");
        assert_eq!(fmt_default(1024.0 * 100.0), "100 KB");
        assert_eq!(fmt_default(1024.0 * 100.25), "100 KB");
        assert_eq!(fmt_default(1024.0 * 100.5), "101 KB");
    }

    #[test]
    fn global_rounding_drops_trailing_zeros() {
        let round = |places| ConversionOptions::default().with_round(places);

        assert_eq!(fmt(1024.0 * 9.72, &round(0)), "10 KB");
        assert_eq!(fmt(1024.0 * 9.72, &round(1)), "9.7 KB");
        assert_eq!(fmt(1024.0 * 9.72, &round(2)), "9.72 KB");

        assert_eq!(fmt(1024.0 * 89.99, &round(0)), "90 KB");
        assert_eq!(fmt(1024.0 * 89.99, &round(1)), "90 KB");
        assert_eq!(fmt(1024.0 * 89.99, &round(2)), "89.99 KB");

        assert_eq!(fmt(1024.0 * 100.25, &round(0)), "100 KB");
        assert_eq!(fmt(1024.0 * 100.25, &round(1)), "100.3 KB");
        assert_eq!(fmt(1024.0 * 100.25, &round(2)), "100.25 KB");
    }

    /// Per-unit precision is shown with exactly the requested decimals.
    #[test]
    fn per_unit_rounding() {
        let kb3 = ConversionOptions::default().with_unit_round(StorageUnit::Kilobytes, 3);
        assert_eq!(fmt(1024.0 * 9.72, &kb3), "9.720 KB");
        assert_eq!(fmt(1024.0 * 9.723, &kb3), "9.723 KB");

        let mb3 = ConversionOptions::default().with_unit_round(StorageUnit::Megabytes, 3);
        assert_eq!(fmt(1024.0 * 9.723, &mb3), "9.72 KB");

        let mb2 = ConversionOptions::default().with_unit_round(StorageUnit::Megabytes, 2);
        assert_eq!(fmt(1_048_576.0 * 143.22, &mb2), "143.22 MB");
    }

    #[test]
    fn max_unit_clamps() {
        let gb50 = 1_073_741_824.0 * 50.0;
        let max = |unit| ConversionOptions::default().with_max_unit(unit);
        assert_eq!(fmt(gb50, &max(StorageUnit::Megabytes)), "51200 MB");
        assert_eq!(fmt(gb50, &max(StorageUnit::Kilobytes)), "52428800 KB");
        assert_eq!(fmt(gb50, &max(StorageUnit::Bytes)), "53687091200 bytes");
    }

    #[test]
    fn pinned_unit() {
        let gb50 = 1_073_741_824.0 * 50.0;
        let pin = |unit| ConversionOptions::default().with_unit(unit);
        assert_eq!(fmt(gb50, &pin(StorageUnit::Megabytes)), "51200 MB");
        assert_eq!(fmt(gb50, &pin(StorageUnit::Gigabytes)), "50 GB");
        assert_eq!(fmt(gb50, &pin(StorageUnit::Terabytes)), "0.05 TB");
    }

    #[test]
    fn values_at_or_below_one() {
        assert_eq!(fmt_default(1.0), "1 byte");
        assert_eq!(fmt_default(0.5), "0.5 bytes");
        assert_eq!(fmt_default(-0.5), "-0.5 bytes");

        let max_bytes = ConversionOptions::default().with_max_unit(StorageUnit::Bytes);
        assert_eq!(fmt(0.01, &max_bytes), "0.01 bytes");

        let pin_mb = ConversionOptions::default().with_unit(StorageUnit::Megabytes);
        assert_eq!(fmt(0.5, &pin_mb), "0 MB");

        let round = |places| ConversionOptions::default().with_round(places);
        assert_eq!(fmt(0.3, &round(0)), "0 bytes");
        assert_eq!(fmt(0.5, &round(0)), "1 byte");
        assert_eq!(fmt(0.5, &round(1)), "0.5 bytes");
        assert_eq!(fmt(0.05, &round(1)), "0.1 bytes");
        assert_eq!(fmt(0.05, &round(2)), "0.05 bytes");
    }

    #[test]
    fn pluralizes_bytes() {
        let one = humanize_default(1.0);
        assert_eq!(one.unit, "byte");
        assert_eq!(one.formatted, "1 byte");

        let minus_one = humanize_default(-1.0);
        assert_eq!(minus_one.unit, "byte");
        assert_eq!(minus_one.formatted, "-1 byte");

        let two = humanize_default(2.0);
        assert_eq!(two.unit, "bytes");
        assert_eq!(two.formatted, "2 bytes");
    }

    #[test]
    fn custom_labels() {
        let opts = ConversionOptions::default()
            .with_label(StorageUnit::Bytes, "B")
            .with_label(StorageUnit::Kilobytes, "Kilobytes")
            .with_label(StorageUnit::Megabytes, "Megabytes")
            .with_label(StorageUnit::Gigabytes, "Gigabytes")
            .with_label(StorageUnit::Terabytes, "Terabytes");

        assert_eq!(humanize(1.0, &opts).unit, "B");
        assert_eq!(humanize(1024.0, &opts).unit, "Kilobytes");
        assert_eq!(humanize(1_048_576.0, &opts).unit, "Megabytes");
        assert_eq!(humanize(1_073_741_824.0, &opts).unit, "Gigabytes");
        assert_eq!(humanize(1_073_741_824.0 * 10_000.0, &opts).unit, "Terabytes");
        assert_eq!(humanize(2048.0, &opts).formatted, "2 Kilobytes");
    }

    /// Overriding one label must leave the others untouched.
    #[test]
    fn partial_labels() {
        let opts = ConversionOptions::default().with_label(StorageUnit::Bytes, "B");
        assert_eq!(humanize(1.0, &opts).unit, "B");
        assert_eq!(humanize(1.0, &opts).formatted, "1 B");
        assert_eq!(humanize(1024.0, &opts).unit, "KB");
    }

    #[test]
    fn decimal_base() {
        let opts = ConversionOptions::default().with_base(Base::Decimal);
        assert_eq!(fmt(1000.0, &opts), "1 KB");
        assert_eq!(fmt(1_000_000.0, &opts), "1 MB");
        assert_eq!(fmt(1_000_000_000.0, &opts), "1 GB");
        assert_eq!(fmt(1024.0, &opts), "1.02 KB");
    }

    #[test]
    fn reports_rung() {
        assert_eq!(humanize_default(5.0 * 1_048_576.0).rung, StorageUnit::Megabytes);
        assert_eq!(humanize_default(5.0).rung, StorageUnit::Bytes);
        assert_eq!(humanize_default(5.0).to_string(), "5 bytes");
    }
}
