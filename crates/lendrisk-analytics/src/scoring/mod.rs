//! Bounded metric scoring.
//!
//! Every downstream metric in the engine is normalized into [0, 1] through
//! [`score_with_limits`]. Two modes exist:
//!
//! ## Linear mode (no target)
//!
//! ```text
//! reverse = false:  score = (upper - value) / (upper - lower)   (lower is better)
//! reverse = true:   score = (value - lower) / (upper - lower)   (higher is better)
//! ```
//!
//! clamped to 1.0 / 0.0 at the boundaries.
//!
//! ## Peak mode (target set)
//!
//! ```text
//! score = 1 - |value - target| / max(|upper - target|, |lower - target|)
//! ```
//!
//! Peak mode deliberately ignores `reverse`: the formula is symmetric
//! around the target, and callers rely on peak scoring being
//! direction-agnostic (the VaR scorer passes `reverse = true` together
//! with a target; the flag must stay inert there).

mod limits;

pub use limits::{round_value, score_with_config, score_with_limits};
