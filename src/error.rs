// Error type for input validation and the arc search
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArcError {
    #[error("Upper arc [{upper}] must be longer than lower [{lower}]")]
    UpperShorterThanLower { upper: f64, lower: f64 },

    #[error("Upper and lower arcs must be positive, non-zero values (upper [{upper}], lower [{lower}])")]
    NonPositiveArc { upper: f64, lower: f64 },

    #[error("Guess [{guess}] must be larger than 2")]
    GuessTooSmall { guess: f64 },

    #[error("Precision [{precision}] must be a positive value")]
    InvalidPrecision { precision: f64 },

    /// The lower radius, or the lower radius plus the spacing, fell to zero or below
    #[error("Radius [{radius}] is not positive at iteration {iteration}")]
    NonPositiveRadius { iteration: usize, radius: f64 },

    /// Guess or computed arc stopped being a finite number
    #[error("Search diverged at iteration {iteration} (guess [{guess}])")]
    Diverged { iteration: usize, guess: f64 },

    #[error("Did not converge after {iterations} iterations (last guess [{last_guess}], arc [{last_arc}])")]
    NotConverged {
        iterations: usize,
        last_guess: f64,
        last_arc: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = ArcError::UpperShorterThanLower { upper: 5.0, lower: 10.0 };
        assert_eq!(err.to_string(), "Upper arc [5] must be longer than lower [10]");

        let err = ArcError::GuessTooSmall { guess: 2.0 };
        assert_eq!(err.to_string(), "Guess [2] must be larger than 2");
    }

    #[test]
    fn test_not_converged_message() {
        let err = ArcError::NotConverged {
            iterations: 5,
            last_guess: 12.5,
            last_arc: 180.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 iterations"));
        assert!(msg.contains("12.5"));
    }
}
