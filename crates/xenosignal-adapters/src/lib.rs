//! Platform adapters for the XenoSignal diagnostics core.
//!
//! This crate contains:
//! - **Probe traits** — the raw-fact supplier seam a host platform implements
//! - **Android-style adapter** — full signal acquisition with registered-cell
//!   iteration and an integer radio-code table
//! - **iOS-style adapter** — name/technology lookup only, numeric signal
//!   strength structurally absent
//! - **Dispatch** — the five-operation query surface with an explicit
//!   not-implemented signal for unknown request names
//!
//! Adapters collect raw snapshots from a probe, feed them through the pure
//! core (`xenosignal-core`), and hand back the normalized schema. The OS
//! queries themselves (permissions, handles, callbacks) live behind the
//! probe traits and are out of scope here.

pub mod android;
pub mod dispatch;
pub mod ios;
pub mod probe;
