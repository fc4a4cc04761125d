//! Rolling volatility estimation from OHLC bars.
//!
//! Implements the Garman-Klass estimator, which uses the full high/low
//! range of each bar rather than close-to-close changes and is therefore
//! more efficient on the same amount of data.
//!
//! ## Formula
//!
//! Per bar:
//!
//! ```text
//! rs = 0.5 * ln²(high/low) - (2 ln 2 - 1) * ln²(close/open)
//! ```
//!
//! Window estimate at position t (t >= window - 1):
//!
//! ```text
//! vol_t = sqrt(trading_periods * mean(rs over the window ending at t))
//! ```

mod garman_klass;

pub use garman_klass::{
    garman_klass_volatility, latest_volatility, DEFAULT_VOLATILITY_WINDOW,
    DEFAULT_TRADING_PERIODS,
};
