//! Float configuration.
//!
//! There is no process-wide default precision: every float constructor that
//! needs one takes a [`FloatConfig`] (or an explicit precision) from the caller.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    /// Significand size in bits.
    pub precision: u32,
    /// Smallest decimal exponent still printed in plain notation.
    pub plain_exp_min: i32,
    /// First decimal exponent printed in exponential notation.
    pub plain_exp_max: i32,
}

impl Default for FloatConfig {
    fn default() -> Self {
        FloatConfig {
            precision: DEFAULT_PRECISION,
            plain_exp_min: PLAIN_EXP_MIN,
            plain_exp_max: PLAIN_EXP_MAX,
        }
    }
}

impl FloatConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
    pub fn with_plain_window(mut self, min: i32, max: i32) -> Self {
        self.plain_exp_min = min;
        self.plain_exp_max = max;
        self
    }
    pub fn validate(&self) -> Result<()> {
        check_precision(self.precision)
    }
    pub(crate) fn is_plain(&self, exp10: i32) -> bool {
        self.plain_exp_min <= exp10 && exp10 < self.plain_exp_max
    }
}

pub fn check_precision(prec: u32) -> Result<()> {
    if (rug::float::prec_min()..=rug::float::prec_max()).contains(&prec) {
        Ok(())
    } else {
        Err(Error::InvalidPrecision(prec))
    }
}

#[test]
fn test_default() {
    let config = FloatConfig::default();
    assert_eq!(config.precision, 64);
    assert!(config.validate().is_ok());
    assert!(config.is_plain(0));
    assert!(config.is_plain(-4));
    assert!(!config.is_plain(-5));
    assert!(config.is_plain(15));
    assert!(!config.is_plain(16));
}

#[test]
fn test_validate() {
    assert_eq!(
        FloatConfig::new().with_precision(0).validate(),
        Err(Error::InvalidPrecision(0))
    );
    assert!(FloatConfig::new().with_precision(1).validate().is_ok());
}

#[test]
fn test_serde() {
    let config: FloatConfig = serde_json::from_str(r#"{"precision": 256}"#).unwrap();
    assert_eq!(config, FloatConfig::new().with_precision(256));
    let config = FloatConfig::new().with_plain_window(-2, 6);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<FloatConfig>(&json).unwrap(), config);
}
