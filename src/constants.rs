/// Constants shared by the geometry formulas, the solver and the CLI

/// Scale factor applied to every angle
///
/// Angles are kept in a degrees-scaled unit: an arc of length `a` on a circle
/// of radius `r` subtends `a / (r * DEGREE_SCALE)`. Values produced by this
/// crate are numerically compatible with that convention, so it must not be
/// swapped for plain radians.
pub const DEGREE_SCALE: f64 = std::f64::consts::PI / 180.0;

/// Initial guess must be strictly greater than this
pub const MIN_GUESS: f64 = 2.0;

// CLI defaults
//
// A negative arc length is never valid, so -1 marks "not supplied" and trips
// validation unless the caller overrides it.

/// Default lower arc length
pub const DEFAULT_LOWER: f64 = -1.0;

/// Default upper arc length
pub const DEFAULT_UPPER: f64 = -1.0;

/// Default spacing between the arcs
pub const DEFAULT_SPACE: f64 = -1.0;

/// Default initial radius guess
pub const DEFAULT_GUESS: f64 = 10.0;

/// Default acceptance tolerance around the target upper arc
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Upper bound on refinement steps before the search gives up
///
/// The square/halve search can need a few thousand steps for ordinary inputs
/// (L=100, U=150, S=10 takes ~3600 at a precision of 0.01).
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
