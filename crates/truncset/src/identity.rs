//! Pass-through oracle.

use std::fmt;

use ndarray::ArrayView2;
use tracing::trace;

use crate::oracle::{Indicators, MembershipOracle};

/// Accepts every logit vector.
///
/// Used when no truncation is wanted, and as a baseline for running the
/// estimation pipeline without truncation effects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Self
    }
}

impl MembershipOracle for Identity {
    fn evaluate(&self, batch: ArrayView2<'_, f32>) -> Indicators {
        trace!(oracle = self.name(), rows = batch.nrows(), "evaluate");
        Indicators::all(batch.nrows())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_accepts_regardless_of_values() {
        let batch = array![[0.0, 0.0], [1.0, 0.0], [3.0, 4.0], [f32::NAN, 1e30]];
        let flags = Identity.evaluate(batch.view());

        assert_eq!(flags.shape(), &[4, 1]);
        assert!(flags.iter().all(|m| m));
        assert!(flags.as_weights().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_zero_width_batch() {
        let batch = Array2::<f32>::zeros((2, 0));
        assert_eq!(Identity.evaluate(batch.view()).to_vec(), vec![true, true]);
    }

    #[test]
    fn test_name() {
        assert_eq!(Identity::new().to_string(), "identity");
    }
}
