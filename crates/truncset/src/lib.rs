//! # truncset
//!
//! Membership oracles for truncated-statistics estimation.
//!
//! An oracle looks at a batch of classifier logits, one row per sample, and
//! reports which samples fall inside its truncation set:
//!
//! | Oracle | Name | Accepts |
//! |--------|------|---------|
//! | [`Identity`] | `identity` | every sample |
//! | [`LogitBall`] | `logit ball` | `‖logits‖₂ <= bound` |
//! | [`LogitBallComplement`] | `logit ball complement` | `‖logits‖₂ >= bound` |
//!
//! Indicators come back shaped `(N, 1)` so they broadcast against other
//! per-sample quantities.
//!
//! ## Usage
//!
//! ```rust
//! use ndarray::array;
//! use truncset::prelude::*;
//!
//! let logits = array![[0.3_f32, 0.4], [3.0, 4.0]];
//!
//! let uncertain = LogitBall::new(1.0).evaluate(logits.view());
//! assert_eq!(uncertain.to_vec(), vec![true, false]);
//!
//! let oracle = OracleSpec::from_json(r#"{"kind": "logit_ball_complement", "bound": 1.0}"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(oracle.evaluate(logits.view()).as_weights(), array![[0.0], [1.0]]);
//! ```

mod ball;
mod error;
mod identity;
mod norm;
mod oracle;
mod spec;

pub use ball::{LogitBall, LogitBallComplement, DEFAULT_TEMPERATURE};
pub use error::{OracleError, Result};
pub use identity::Identity;
pub use norm::{batch_from_rows, l2_norm, row_l2_norms};
pub use oracle::{evaluate_dyn, Indicators, MembershipOracle};
pub use spec::OracleSpec;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Identity, LogitBall, LogitBallComplement};
    pub use crate::{Indicators, MembershipOracle, OracleSpec};
    pub use crate::{OracleError, Result};
}
