//! Signal normalization & classification core.
//!
//! This crate contains:
//! - **Reading sanitizer** — sentinel-value filtering for raw WiFi/cellular readings
//! - **Classifier** — frequency-band, radio-generation, and transport-precedence rules
//! - **Reading types** — the `RawMeasurement` → `NormalizedReading` contract
//!
//! Everything here is pure and synchronous: platform adapters collect raw
//! facts from the OS, hand them in, and get a classified reading (or a
//! precise absence) back. No I/O, no shared state, no panics.

pub mod classify;
pub mod reading;
pub mod sanitize;

/// Coerces an absent/unavailable adapter handle to `false`.
///
/// Availability predicates (`isWifiEnabled`, `isCellularEnabled`) are
/// booleans in the output contract — a missing OS handle means "not
/// enabled", never a missing boolean.
pub fn enabled_flag(state: Option<bool>) -> bool {
    state.unwrap_or(false)
}
