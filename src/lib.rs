//! # Arc Solver
//!
//! Finds the radius and sector angle of a circular arc that, rolled into a
//! frustum, joins a lower and an upper arc length set a fixed distance apart.

// Re-export the main types and functions
pub use error::ArcError;
pub use geometry::{arc_from_theta, half_chord_from_theta, sagitta_from_theta, theta_from_arc};
pub use solver::{
    solve, ArcInputs, ArcSolution, ArcSolver, Refinement, SilentReporter, SolveReporter,
    TraceEvent, TracingReporter,
};

// Module declarations
pub mod constants;
mod error;
pub mod geometry;
pub mod solver;
