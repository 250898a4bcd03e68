/// Sizewise Core — storage-quantity humanization and unit conversion.
///
/// Pure, synchronous functions over value types: no I/O, no shared state,
/// every call is independently reentrant.
///
/// # Modules
///
/// - [`units`] — The bytes…TB ladder, multiplier base and label overrides.
/// - [`humanize`] — Raw byte counts to `{ value, unit, formatted }`.
/// - [`convert`] — Base-2 unit-to-unit conversion and megabyte formatting.
/// - [`duration`] — Minute and second counts to pluralized phrases.
/// - [`error`] — Errors for unit parsing, index lookup and option loading.
pub mod convert;
pub mod duration;
pub mod error;
pub mod humanize;
pub mod units;

pub use convert::{convert_bytes_to_unit, convert_unit, format_megabytes};
pub use duration::{minutes_to_phrase, seconds_to_phrase};
pub use error::UnitError;
pub use humanize::{humanize, humanize_default, ConversionOptions, HumanizeResult, Rounding};
pub use units::{Base, StorageUnit, UnitLabels};
