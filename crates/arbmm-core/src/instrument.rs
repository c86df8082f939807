//! Instrument identification and static parameters.
//!
//! Instruments come in two flavours: thinly traded underlyings and liquid
//! composites whose fair value is a linear combination of underlyings.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Instrument identifier (e.g. "ETF1", "bond3").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for InstrumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Instrument category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    /// Low-liquidity input to composite fair values.
    Underlying,
    /// Liquid basket priced off underlyings.
    Composite,
}

impl InstrumentKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite)
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underlying => write!(f, "underlying"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

/// Static sizing parameters of one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentParams {
    /// Default quote size per side.
    pub base_size: i64,
    /// Largest size a single skew adjustment may request.
    pub max_size: i64,
    /// Position magnitude beyond which inventory is actively worked down.
    pub inventory_threshold: i64,
}

impl InstrumentParams {
    pub fn new(base_size: i64, max_size: i64, inventory_threshold: i64) -> Self {
        Self {
            base_size,
            max_size,
            inventory_threshold,
        }
    }

    /// Check the parameters are internally consistent.
    pub fn validate(&self, instrument: &InstrumentId) -> Result<()> {
        let invalid = |reason: &str| CoreError::InvalidParams {
            instrument: instrument.to_string(),
            reason: reason.to_string(),
        };

        if self.base_size <= 0 {
            return Err(invalid("base_size must be positive"));
        }
        if self.max_size < self.base_size {
            return Err(invalid("max_size must be >= base_size"));
        }
        if self.inventory_threshold <= 0 {
            return Err(invalid("inventory_threshold must be positive"));
        }
        Ok(())
    }
}
