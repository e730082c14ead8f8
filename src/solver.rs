use crate::constants::{
    DEFAULT_GUESS, DEFAULT_LOWER, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION, DEFAULT_SPACE,
    DEFAULT_UPPER, MIN_GUESS,
};
use crate::error::ArcError;
use crate::geometry::{arc_from_theta, half_chord_from_theta, sagitta_from_theta, theta_from_arc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs to the arc search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcInputs {
    pub lower: f64,     // known arc length on the inner surface
    pub upper: f64,     // target arc length on the outer surface
    pub space: f64,     // radial distance between the surfaces
    pub guess: f64,     // initial lower radius
    pub precision: f64, // accepted distance from the target upper arc
}

impl Default for ArcInputs {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            space: DEFAULT_SPACE,
            guess: DEFAULT_GUESS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ArcInputs {
    pub fn new(lower: f64, upper: f64, space: f64) -> Self {
        Self {
            lower,
            upper,
            space,
            ..Default::default()
        }
    }

    /// Reject inputs the search cannot work with
    ///
    /// Non-positive arcs are reported before ordering, so `upper = 0,
    /// lower = 1` is a [`ArcError::NonPositiveArc`]. Spacing is left alone
    /// here; the search guards the outer radius on every step instead.
    pub fn validate(&self) -> Result<(), ArcError> {
        if !(self.upper > 0.0 && self.lower > 0.0) {
            return Err(ArcError::NonPositiveArc {
                upper: self.upper,
                lower: self.lower,
            });
        }
        if self.upper < self.lower {
            return Err(ArcError::UpperShorterThanLower {
                upper: self.upper,
                lower: self.lower,
            });
        }
        if self.guess <= MIN_GUESS || self.guess.is_nan() {
            return Err(ArcError::GuessTooSmall { guess: self.guess });
        }
        if !(self.precision > 0.0 && self.precision.is_finite()) {
            return Err(ArcError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }
}

/// Direction of a rejected step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Refinement {
    /// Computed arc was above the target; the guess is squared
    Overshoot,
    /// Computed arc was below the target; the guess is halved
    Undershoot,
}

impl fmt::Display for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refinement::Overshoot => write!(f, "Too big"),
            Refinement::Undershoot => write!(f, "Too small"),
        }
    }
}

/// One rejected step of the search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub iteration: usize,
    pub guess: f64,
    pub theta: f64,
    pub computed_arc: f64,
    pub refinement: Refinement,
    pub next_guess: f64,
}

/// Receives a [`TraceEvent`] for every rejected step
pub trait SolveReporter {
    fn on_step(&mut self, event: &TraceEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl SolveReporter for SilentReporter {
    fn on_step(&mut self, _event: &TraceEvent) {}
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl SolveReporter for TracingReporter {
    fn on_step(&mut self, event: &TraceEvent) {
        tracing::debug!(
            iteration = event.iteration,
            guess = event.guess,
            theta = event.theta,
            arc = event.computed_arc,
            next_guess = event.next_guess,
            "{} [{:.2}], guess again with [{}]",
            event.refinement,
            event.computed_arc,
            event.next_guess
        );
    }
}

/// Keeps every event in order
impl SolveReporter for Vec<TraceEvent> {
    fn on_step(&mut self, event: &TraceEvent) {
        self.push(*event);
    }
}

/// Accepted radius and the sector it defines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSolution {
    pub radius: f64,     // lower radius
    pub theta: f64,      // degrees-scaled sector angle
    pub upper_arc: f64,  // arc at radius + space, within precision of the target
    pub sagitta: f64,    // at (theta, radius)
    pub half_chord: f64, // at (theta, radius)
    pub iterations: usize,
}

/// Square/halve search for the lower radius
///
/// Each step derives theta from the lower arc at the current guess and the
/// upper arc that theta gives at `guess + space`. An upper arc that is too
/// long squares the guess, one that is too short halves it. This is not a
/// bracketing search, so convergence depends on the inputs; the step count is
/// capped by `max_iterations`.
pub struct ArcSolver {
    inputs: ArcInputs,
    max_iterations: usize,
}

impl ArcSolver {
    pub fn new(inputs: ArcInputs) -> Self {
        Self {
            inputs,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// At least one step is always evaluated
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations.max(1);
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn inputs(&self) -> &ArcInputs {
        &self.inputs
    }

    pub fn solve(&self) -> Result<ArcSolution, ArcError> {
        self.solve_with(&mut SilentReporter)
    }

    pub fn solve_with<R>(&self, reporter: &mut R) -> Result<ArcSolution, ArcError>
    where
        R: SolveReporter + ?Sized,
    {
        self.inputs.validate()?;

        let ArcInputs {
            lower,
            upper,
            space,
            precision,
            ..
        } = self.inputs;
        let mut guess = self.inputs.guess;
        let mut iteration = 1;

        loop {
            if !guess.is_finite() {
                return Err(ArcError::Diverged { iteration, guess });
            }
            if guess <= 0.0 {
                return Err(ArcError::NonPositiveRadius {
                    iteration,
                    radius: guess,
                });
            }
            let outer = guess + space;
            if outer <= 0.0 {
                return Err(ArcError::NonPositiveRadius {
                    iteration,
                    radius: outer,
                });
            }

            let theta = theta_from_arc(lower, guess);
            let computed_arc = arc_from_theta(theta, outer);
            if !computed_arc.is_finite() {
                return Err(ArcError::Diverged { iteration, guess });
            }

            if computed_arc >= upper - precision && computed_arc <= upper + precision {
                tracing::debug!(
                    iterations = iteration,
                    radius = guess,
                    theta,
                    "Calculated in [{}] iterations",
                    iteration
                );
                return Ok(ArcSolution {
                    radius: guess,
                    theta,
                    upper_arc: computed_arc,
                    sagitta: sagitta_from_theta(theta, guess),
                    half_chord: half_chord_from_theta(theta, guess),
                    iterations: iteration,
                });
            }

            if iteration >= self.max_iterations {
                return Err(ArcError::NotConverged {
                    iterations: iteration,
                    last_guess: guess,
                    last_arc: computed_arc,
                });
            }

            let (refinement, next_guess) = if computed_arc > upper {
                (Refinement::Overshoot, guess * guess)
            } else {
                (Refinement::Undershoot, guess / 2.0)
            };

            reporter.on_step(&TraceEvent {
                iteration,
                guess,
                theta,
                computed_arc,
                refinement,
                next_guess,
            });

            guess = next_guess;
            iteration += 1;
        }
    }
}

/// Find the lower radius and sector angle joining `lower` and `upper` arcs `space` apart
pub fn solve(
    lower: f64,
    upper: f64,
    precision: f64,
    space: f64,
    guess: f64,
) -> Result<ArcSolution, ArcError> {
    ArcSolver::new(ArcInputs {
        lower,
        upper,
        space,
        guess,
        precision,
    })
    .solve()
}
