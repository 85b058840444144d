//! Truncation by logit norm.
//!
//! The L2 norm of a logit vector is a proxy for how committed the classifier
//! is: small norms mean no class stands out, large norms mean a decisive
//! prediction. [`LogitBall`] keeps the uncertain samples and
//! [`LogitBallComplement`] keeps the confident ones. Both include the
//! boundary, so a vector with norm exactly `bound` belongs to both sets.

use std::fmt;

use ndarray::ArrayView2;
use tracing::trace;

use crate::norm::row_l2_norms;
use crate::oracle::{Indicators, MembershipOracle};

/// Temperature used when none is given.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

fn evaluate_norms(
    name: &'static str,
    batch: ArrayView2<'_, f32>,
    keep: impl Fn(f32) -> bool,
) -> Indicators {
    let flags = Indicators::from(row_l2_norms(batch).mapv(keep));
    trace!(
        oracle = name,
        rows = batch.nrows(),
        cols = batch.ncols(),
        accepted = flags.accepted_count(),
        "evaluate"
    );
    flags
}

/// Accepts logit vectors with L2 norm at most `bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitBall {
    bound: f32,
}

impl LogitBall {
    /// The bound is taken as given. Only [`OracleSpec::build`] checks that it
    /// is finite and positive; a `NaN` bound here rejects every row.
    ///
    /// [`OracleSpec::build`]: crate::OracleSpec::build
    pub fn new(bound: f32) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }
}

impl MembershipOracle for LogitBall {
    fn evaluate(&self, batch: ArrayView2<'_, f32>) -> Indicators {
        let bound = self.bound;
        evaluate_norms(self.name(), batch, move |norm| norm <= bound)
    }

    fn name(&self) -> &'static str {
        "logit ball"
    }
}

impl fmt::Display for LogitBall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts logit vectors with L2 norm at least `bound`.
///
/// Carries a `temperature` that is stored but not consulted when deciding
/// membership: the boundary is the hard norm threshold only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitBallComplement {
    bound: f32,
    temperature: f32,
}

impl LogitBallComplement {
    /// Create with [`DEFAULT_TEMPERATURE`].
    pub fn new(bound: f32) -> Self {
        Self::with_temperature(bound, DEFAULT_TEMPERATURE)
    }

    /// Neither parameter is validated here; [`OracleSpec::build`] is the
    /// checked path.
    ///
    /// [`OracleSpec::build`]: crate::OracleSpec::build
    pub fn with_temperature(bound: f32, temperature: f32) -> Self {
        Self { bound, temperature }
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }

    /// Stored temperature. Has no effect on [`MembershipOracle::evaluate`].
    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl MembershipOracle for LogitBallComplement {
    fn evaluate(&self, batch: ArrayView2<'_, f32>) -> Indicators {
        let bound = self.bound;
        evaluate_norms(self.name(), batch, move |norm| norm >= bound)
    }

    fn name(&self) -> &'static str {
        "logit ball complement"
    }
}

impl fmt::Display for LogitBallComplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
