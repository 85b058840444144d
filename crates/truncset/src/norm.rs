//! Row norms and batch assembly.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{OracleError, Result};

/// L2 norm of a single logit vector.
///
/// Squares are accumulated in `f64` so finite rows near the ends of the
/// `f32` range neither overflow to infinity nor flush to zero.
pub fn l2_norm(row: ArrayView1<'_, f32>) -> f32 {
    row.iter()
        .map(|&x| f64::from(x).powi(2))
        .sum::<f64>()
        .sqrt() as f32
}

/// Per-row L2 norms of a batch, keeping the trailing axis.
///
/// A batch of shape `(N, D)` yields norms of shape `(N, 1)`. Rows with no
/// logits (`D == 0`) have norm 0.
pub fn row_l2_norms(batch: ArrayView2<'_, f32>) -> Array2<f32> {
    batch
        .map_axis(Axis(1), l2_norm)
        .insert_axis(Axis(1))
}

/// Build a `(N, D)` batch from row vectors.
///
/// All rows must share the first row's length. An empty input gives a
/// `(0, 0)` batch.
pub fn batch_from_rows(rows: Vec<Vec<f32>>) -> Result<Array2<f32>> {
    let n = rows.len();
    let d = rows.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(n * d);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != d {
            return Err(OracleError::RaggedRow {
                row: i,
                expected: d,
                got: row.len(),
            });
        }
        flat.extend(row);
    }

    Ok(Array2::from_shape_vec((n, d), flat)?)
}
