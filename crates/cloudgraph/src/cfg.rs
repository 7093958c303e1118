//! Fixed defaults (internal and boundary-facing).
//!
//! Policy
//! - Values that callers may want to tune are mirrored in small `Default`
//!   config structs (`FilterCfg`, `SubdivisionCfg`); these constants are the
//!   single source for their defaults.

/// Group width for median-of-medians pivot selection.
pub(crate) const GROUP_SIZE: usize = 5;
/// Largest imaginary part still treated as a real solution component.
pub const DEFAULT_IMAG_TOL: f64 = 0.1;
/// Default coordinate box `[-b, b]` for accepted solver solutions.
pub const DEFAULT_BOUNDS: f64 = 1.0;
