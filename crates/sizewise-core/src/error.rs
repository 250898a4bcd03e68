/// Errors raised at the edges that parse caller-supplied data.
///
/// The humanizer, converters and duration phrases never fail; these
/// variants only come from index lookups, unit-name parsing and JSON
/// option loading.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitError {
    /// Ladder index outside `0..=4`.
    #[error("ladder index {0} is out of range (expected 0..=4)")]
    IndexOutOfRange(usize),

    /// Unit name that is not on the storage ladder.
    #[error("unknown storage unit: {0:?}")]
    UnknownUnit(String),

    /// Options JSON that does not match the `ConversionOptions` shape.
    #[error("invalid conversion options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
