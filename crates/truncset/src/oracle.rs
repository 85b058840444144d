//! Core oracle trait and membership indicators.

use ndarray::{Array1, Array2, ArrayView2, ArrayViewD, Axis, Ix2};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Decides membership of logit vectors in a truncation set.
///
/// Implementors are immutable after construction: `evaluate` is a pure
/// function of the batch and the oracle's fixed configuration, so a single
/// instance can be shared across threads and called any number of times.
pub trait MembershipOracle: Send + Sync {
    /// Evaluate membership for a `(N, D)` batch of logits.
    ///
    /// Returns one indicator per row, shaped `(N, 1)`.
    fn evaluate(&self, batch: ArrayView2<'_, f32>) -> Indicators;

    /// Human-readable oracle name.
    fn name(&self) -> &'static str;
}

/// Evaluate an oracle over a dynamically-shaped array.
///
/// The view must be rank 2; anything else fails with the ndarray shape
/// error, unchanged.
pub fn evaluate_dyn(
    oracle: &dyn MembershipOracle,
    batch: ArrayViewD<'_, f32>,
) -> Result<Indicators> {
    let batch = batch.into_dimensionality::<Ix2>()?;
    Ok(oracle.evaluate(batch))
}

/// Per-sample membership flags, shaped `(N, 1)`.
///
/// The trailing singleton axis lines up with per-sample quantities
/// downstream (losses, weights) for broadcasting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators(Array2<bool>);

impl Indicators {
    /// Wrap a flat sequence of flags as an `(N, 1)` column.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self(Array1::from(flags).insert_axis(Axis(1)))
    }

    /// Every sample accepted.
    pub fn all(n: usize) -> Self {
        Self(Array2::from_elem((n, 1), true))
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    /// Membership of sample `i`, if in range.
    pub fn get(&self, i: usize) -> Option<bool> {
        self.0.get([i, 0]).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Number of samples inside the truncation set.
    pub fn accepted_count(&self) -> usize {
        self.iter().filter(|&m| m).count()
    }

    /// Fraction of samples inside the truncation set (0.0 for an empty batch).
    pub fn acceptance_rate(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.accepted_count() as f32 / self.len() as f32
    }

    /// Numeric rendering: 1.0 for members, 0.0 otherwise, shaped `(N, 1)`.
    pub fn as_weights(&self) -> Array2<f32> {
        self.0.mapv(|m| if m { 1.0 } else { 0.0 })
    }

    pub fn as_array(&self) -> &Array2<bool> {
        &self.0
    }

    pub fn into_inner(self) -> Array2<bool> {
        self.0
    }

    /// Flags as a flat vector, dropping the trailing axis.
    pub fn to_vec(&self) -> Vec<bool> {
        self.0.index_axis(Axis(1), 0).to_vec()
    }
}

impl From<Array2<bool>> for Indicators {
    fn from(flags: Array2<bool>) -> Self {
        Self(flags)
    }
}
