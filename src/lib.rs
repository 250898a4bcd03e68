//! Sizewise — human-readable storage quantities.
//!
//! Thin facade. All logic lives in the `sizewise-core` crate.

pub use sizewise_core::*;
