/// The storage ladder and its supporting types.
///
/// Re-exports the unit enum, the multiplier base and the label lookup
/// helpers that every other module resolves display strings through.
pub mod base;
pub mod ladder;

pub use base::Base;
pub use ladder::{index_of, label_of, unit_at, StorageUnit, UnitLabels};
