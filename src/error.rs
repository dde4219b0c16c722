//! Simulation-specific error types.
//!
//! The per-frame simulation never fails: numeric degeneracies are guarded in
//! place and oversized frame deltas are clamped.  The only fallible surface is
//! configuration, which is parsed from TOML and validated before use.
//!
//! ## Usage
//!
//! ```rust
//! use orbit_hopper::error::{validate_unit_weight, SimResult};
//!
//! fn check(smoothing: f32) -> SimResult<()> {
//!     validate_unit_weight("CAMERA_SMOOTHING", smoothing)?;
//!     Ok(())
//! }
//! # assert!(check(0.05).is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the orbit-hopper simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A tunable constant is outside its safe operating range.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// A configured planet cannot be simulated.
    InvalidBody {
        /// Position of the planet in the configured list.
        index: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The configuration file exists but is not valid TOML for `PhysicsConfig`.
    ConfigParse {
        /// File the text came from.
        path: String,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::InvalidBody { index, reason } => {
                write!(f, "planet #{} is invalid: {}", index, reason)
            }
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is a per-tick interpolation weight in `(0, 1]`.
///
/// Zero freezes the smoothed value forever; above one it overshoots and
/// oscillates.
pub fn validate_unit_weight(name: &'static str, value: f32) -> SimResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, 1.0]",
        })
    }
}

/// Returns an error unless `value` is strictly positive and finite.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is a drag multiplier in `(0, 1]`.
pub fn validate_drag(name: &'static str, value: f32) -> SimResult<()> {
    validate_unit_weight(name, value)
}
