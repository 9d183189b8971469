use thiserror::Error;

/// Errors surfaced by the ECEF to SEZ conversion
#[derive(Error, Debug)]
pub enum SezError {
    #[error("Expected {expected} coordinate values, found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("Latitude did not converge after {iterations} iterations (last step {last_step:e} rad)")]
    NoConvergence { iterations: usize, last_step: f64 },
}

pub type Result<T> = std::result::Result<T, SezError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_display() {
        let err = SezError::ArgumentCount { expected: 6, found: 4 };
        assert_eq!(err.to_string(), "Expected 6 coordinate values, found 4");
    }

    #[test]
    fn test_no_convergence_display() {
        let err = SezError::NoConvergence {
            iterations: 5,
            last_step: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "Latitude did not converge after 5 iterations (last step 5e-1 rad)"
        );
    }
}
