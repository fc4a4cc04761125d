//! Borrower concentration scoring.
//!
//! Measures how concentrated a protocol's debt is among its borrowers via
//! the Herfindahl-Hirschman Index (HHI), computed daily over the
//! reconstructed debt panel and compared against two baselines:
//!
//! - **Relative**: recent mean HHI vs. a longer history window (is
//!   concentration drifting?)
//! - **Benchmark**: the latest day's HHI vs. the ideal HHI of a perfectly
//!   even distribution across the same borrowers (how far from even?)

mod borrower;
mod hhi;

pub use borrower::{
    BenchmarkHhi, BorrowerConcentration, RelativeHhi, DEFAULT_HISTORY_DAYS, DEFAULT_RECENT_DAYS,
    HHI_SCORE_LOWER, HHI_SCORE_TARGET, HHI_SCORE_UPPER,
};
pub use hhi::{daily_concentration, forward_fill_daily, hhi};
