//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! Universal fields of [`CommonCfg`]:
//! ├ `tol`      : convergence threshold (half-width or successive-iterate gap)
//! └ `max_iter` : iteration cap
//!
//! [`CommonCfg::new`] initializes configuration with default values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_TOL      : f64   = 1e-8;
pub const DEFAULT_MAX_ITER : usize = 100;


/// `tol` must be finite and > 0.
pub(crate) fn validate_tol(v: f64) -> Result<f64, ToleranceError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ToleranceError::InvalidTolerance { got: v });
    }
    Ok(v)
}

/// `max_iter` must be >= 1.
pub(crate) fn validate_max_iter(v: usize) -> Result<usize, RootFindingError> {
    if v == 0 {
        return Err(RootFindingError::InvalidMaxIter { got: v });
    }
    Ok(v)
}


#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCommonCfg"))]
pub struct CommonCfg {
    tol:      f64,
    max_iter: usize,
}

/// Unchecked wire form of [`CommonCfg`]; deserialized values go through the
/// same validation as the setters.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCommonCfg {
    tol:      f64,
    max_iter: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCommonCfg> for CommonCfg {
    type Error = RootFindingError;

    fn try_from(raw: RawCommonCfg) -> Result<Self, Self::Error> {
        Ok(Self {
            tol      : validate_tol(raw.tol)?,
            max_iter : validate_max_iter(raw.max_iter)?,
        })
    }
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tol(&self)      -> f64   { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tol      (&mut self, v: f64)   { self.tol      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let v = $crate::root_finding::config::validate_tol(v)?;
                self.common.with_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                let v = $crate::root_finding::config::validate_max_iter(v)?;
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
