//! Profit-maximizing dispatch scheduling for a single energy-storage asset.
//!
//! Builds an explicit sparse LP over a price horizon — charge power,
//! discharge power and stored energy per step, coupled only by the
//! state-of-charge recurrence — solves it through a pluggable solver
//! adapter and reads the result back as a per-step schedule with profit.

pub mod config;
pub mod domain;
pub mod input;
pub mod optimizer;
pub mod telemetry;
