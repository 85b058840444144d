//! Serializable oracle descriptions.
//!
//! An [`OracleSpec`] is the constructor parameters of one oracle in data
//! form, so a caller can embed the choice of truncation set in its own
//! configuration:
//!
//! ```json
//! { "kind": "logit_ball_complement", "bound": 4.0, "temperature": 1.0 }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ball::{LogitBall, LogitBallComplement, DEFAULT_TEMPERATURE};
use crate::error::{OracleError, Result};
use crate::identity::Identity;
use crate::oracle::MembershipOracle;

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

/// Which oracle to build, with its parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OracleSpec {
    #[default]
    Identity,
    LogitBall {
        bound: f32,
    },
    LogitBallComplement {
        bound: f32,
        #[serde(default = "default_temperature")]
        temperature: f32,
    },
}

impl OracleSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate parameters and construct the oracle.
    pub fn build(&self) -> Result<Box<dyn MembershipOracle>> {
        let oracle: Box<dyn MembershipOracle> = match *self {
            OracleSpec::Identity => Box::new(Identity),
            OracleSpec::LogitBall { bound } => {
                check_bound(bound)?;
                Box::new(LogitBall::new(bound))
            }
            OracleSpec::LogitBallComplement { bound, temperature } => {
                check_bound(bound)?;
                if !temperature.is_finite() {
                    return Err(OracleError::InvalidTemperature(temperature));
                }
                if temperature != DEFAULT_TEMPERATURE {
                    warn!(temperature, "temperature is not used by logit ball complement");
                }
                Box::new(LogitBallComplement::with_temperature(bound, temperature))
            }
        };

        debug!(oracle = oracle.name(), bound = ?self.bound(), "built oracle");
        Ok(oracle)
    }

    /// The configured bound, if this kind has one.
    pub fn bound(&self) -> Option<f32> {
        match *self {
            OracleSpec::Identity => None,
            OracleSpec::LogitBall { bound } | OracleSpec::LogitBallComplement { bound, .. } => {
                Some(bound)
            }
        }
    }
}

fn check_bound(bound: f32) -> Result<()> {
    if bound.is_finite() && bound > 0.0 {
        Ok(())
    } else {
        Err(OracleError::InvalidBound(bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_each_kind() {
        assert_eq!(
            OracleSpec::from_json(r#"{"kind": "identity"}"#).unwrap(),
            OracleSpec::Identity
        );
        assert_eq!(
            OracleSpec::from_json(r#"{"kind": "logit_ball", "bound": 2.5}"#).unwrap(),
            OracleSpec::LogitBall { bound: 2.5 }
        );
        assert_eq!(
            OracleSpec::from_json(r#"{"kind": "logit_ball_complement", "bound": 3.0}"#).unwrap(),
            OracleSpec::LogitBallComplement {
                bound: 3.0,
                temperature: DEFAULT_TEMPERATURE
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let spec = OracleSpec::LogitBallComplement {
            bound: 3.0,
            temperature: 0.5,
        };
        let json = spec.to_json().unwrap();
        assert!(json.contains("\"kind\":\"logit_ball_complement\""));
        assert_eq!(OracleSpec::from_json(&json).unwrap(), spec);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = OracleSpec::from_json(r#"{"kind": "logit_cube", "bound": 1.0}"#);
        assert!(matches!(result, Err(OracleError::Spec(_))));
    }

    #[test]
    fn test_missing_bound_rejected() {
        assert!(OracleSpec::from_json(r#"{"kind": "logit_ball"}"#).is_err());
    }

    #[test]
    fn test_build_validates_bound() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = OracleSpec::LogitBall { bound: bad }.build();
            assert!(matches!(result, Err(OracleError::InvalidBound(_))));
        }
    }

    #[test]
    fn test_build_validates_temperature() {
        let result = OracleSpec::LogitBallComplement {
            bound: 1.0,
            temperature: f32::NAN,
        }
        .build();
        assert!(matches!(result, Err(OracleError::InvalidTemperature(_))));
    }

    #[test]
    fn test_built_oracles_behave_like_direct_ones() {
        let batch = array![[3.0, 4.0], [0.3, 0.4]];

        let ball = OracleSpec::LogitBall { bound: 1.0 }.build().unwrap();
        assert_eq!(ball.name(), "logit ball");
        assert_eq!(ball.evaluate(batch.view()).to_vec(), vec![false, true]);

        let complement = OracleSpec::LogitBallComplement {
            bound: 1.0,
            temperature: 2.0,
        }
        .build()
        .unwrap();
        assert_eq!(complement.name(), "logit ball complement");
        assert_eq!(complement.evaluate(batch.view()).to_vec(), vec![true, false]);

        let identity = OracleSpec::default().build().unwrap();
        assert_eq!(identity.name(), "identity");
        assert_eq!(identity.evaluate(batch.view()).accepted_count(), 2);
    }
}
