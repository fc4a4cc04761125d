//! Daily debt panel reconstruction.
//!
//! Converts the sparse, irregularly-timed stream of per-entity debt
//! observations into a dense per-(entity, date) panel with last-value-
//! carried-forward semantics. The panel is the input to concentration
//! scoring.

mod reconstruct;

pub use reconstruct::{reconstruct_daily_panel, reconstruct_daily_panel_with};
