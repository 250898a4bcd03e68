/// Unit-to-unit conversion over the storage ladder.
///
/// Conversion is always base 2 (1024 per rung), even though the humanizer
/// accepts [`Base::Decimal`](crate::units::Base). Pricing and sizing
/// consumers only ever convert binary quantities, so there is no decimal
/// mode here.
use crate::units::StorageUnit;

const MULTIPLIER: f64 = 1024.0;

/// Convert `quantity` expressed in `source` into `target`.
///
/// A missing quantity converts to 0. Same-unit conversion returns the input
/// untouched.
pub fn convert_unit(source: StorageUnit, quantity: Option<f64>, target: StorageUnit) -> f64 {
    let Some(quantity) = quantity else {
        return 0.0;
    };
    if source == target {
        return quantity;
    }
    let exponent = source.exponent() as i32 - target.exponent() as i32;
    quantity * MULTIPLIER.powi(exponent)
}

/// Convert a raw byte count into `target`.
pub fn convert_bytes_to_unit(target: StorageUnit, raw_bytes: f64) -> f64 {
    if target == StorageUnit::Bytes {
        return raw_bytes;
    }
    convert_unit(StorageUnit::Bytes, Some(raw_bytes), target)
}

/// Format a megabyte quantity for plan and volume listings.
///
/// GB, MB and KB get two decimals; GB drops them when `remove_decimals` is
/// set. Sub-kilobyte values show whole bytes and always use the plural
/// label (`"1 bytes"`), unlike [`humanize`](crate::humanize::humanize).
pub fn format_megabytes(megabytes: f64, remove_decimals: bool) -> String {
    if !megabytes.is_finite() {
        return String::from("0 bytes");
    }

    if megabytes >= MULTIPLIER {
        let gigabytes = convert_unit(
            StorageUnit::Megabytes,
            Some(megabytes),
            StorageUnit::Gigabytes,
        );
        return if remove_decimals {
            format!("{} GB", gigabytes.round())
        } else {
            format!("{gigabytes:.2} GB")
        };
    }
    if megabytes >= 1.0 {
        return format!("{megabytes:.2} MB");
    }

    let kilobytes = convert_unit(
        StorageUnit::Megabytes,
        Some(megabytes),
        StorageUnit::Kilobytes,
    );
    if kilobytes >= 1.0 {
        return format!("{kilobytes:.2} KB");
    }

    let bytes = convert_unit(StorageUnit::Megabytes, Some(megabytes), StorageUnit::Bytes);
    format!("{} bytes", bytes.round())
}
