//! Parameter-space points and the Euclidean metric over them.
//!
//! Every domain shares the same shape of space: a fixed 5-dimensional box
//! with each coordinate in [0, 1]. Axis semantics differ per domain
//! (weathering exposure vs. landform relief) but the engine treats axes as
//! opaque bounded reals.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Dimension of the morphospace parameter vectors.
pub const DIM: usize = 5;

/// A point in the normalized 5D parameter space.
///
/// Invariant: every coordinate lies in the closed interval [0, 1].
/// Validated constructors reject out-of-range input; interpolation is
/// allowed to build points directly because a convex combination of
/// in-range endpoints cannot leave the box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterPoint([f64; DIM]);

impl ParameterPoint {
    /// Create a point from a fixed-size coordinate array.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::ParameterPoint;
    ///
    /// let p = ParameterPoint::new([0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    /// assert_eq!(p.coords()[2], 0.3);
    /// assert!(ParameterPoint::new([0.0, 0.0, 0.0, 0.0, 1.5]).is_err());
    /// ```
    pub fn new(coords: [f64; DIM]) -> Result<Self> {
        for (axis, &c) in coords.iter().enumerate() {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(EngineError::InvalidArgument {
                    what: "coordinate",
                    detail: format!("axis {} value {} is outside [0, 1]", axis, c),
                });
            }
        }
        Ok(ParameterPoint(coords))
    }

    /// Create a point from a runtime slice, checking arity and range.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::ParameterPoint;
    ///
    /// let p = ParameterPoint::from_slice(&[0.5, 0.5, 0.5, 0.5, 0.5]).unwrap();
    /// assert_eq!(p.coords().len(), 5);
    ///
    /// let err = ParameterPoint::from_slice(&[0.5, 0.5]).unwrap_err();
    /// assert!(err.to_string().contains("dimension mismatch"));
    /// ```
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        if coords.len() != DIM {
            return Err(EngineError::DimensionMismatch {
                expected: DIM,
                got: coords.len(),
            });
        }
        let mut array = [0.0; DIM];
        array.copy_from_slice(coords);
        Self::new(array)
    }

    /// Construct without range checks. Only for interpolation results,
    /// which are convex combinations of validated points.
    pub(crate) fn from_convex(coords: [f64; DIM]) -> Self {
        ParameterPoint(coords)
    }

    /// The raw coordinate array.
    pub fn coords(&self) -> &[f64; DIM] {
        &self.0
    }

    /// Convex interpolation between two points at fraction `t` in [0, 1].
    ///
    /// Computed as `a*(1-t) + b*t`, so `t = 0.0` reproduces `a` exactly and
    /// `t = 1.0` reproduces `b` exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::ParameterPoint;
    ///
    /// let a = ParameterPoint::new([0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// let b = ParameterPoint::new([1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(a.lerp(&b, 0.0), a);
    /// assert_eq!(a.lerp(&b, 1.0), b);
    /// assert_eq!(a.lerp(&b, 0.5).coords()[0], 0.5);
    /// ```
    pub fn lerp(&self, other: &ParameterPoint, t: f64) -> ParameterPoint {
        let mut coords = [0.0; DIM];
        for i in 0..DIM {
            coords[i] = self.0[i] * (1.0 - t) + other.0[i] * t;
        }
        ParameterPoint::from_convex(coords)
    }

    /// Euclidean distance to another point.
    ///
    /// Range is [0, sqrt(5)]. Symmetric, zero iff the points are equal,
    /// and satisfies the triangle inequality.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::ParameterPoint;
    ///
    /// let a = ParameterPoint::new([0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// let b = ParameterPoint::new([1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(a.distance(&a), 0.0);
    /// assert!((a.distance(&b) - 5.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn distance(&self, other: &ParameterPoint) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Per-axis signed differences `other - self`.
    pub fn axis_diffs(&self, other: &ParameterPoint) -> [f64; DIM] {
        let mut diffs = [0.0; DIM];
        for i in 0..DIM {
            diffs[i] = other.0[i] - self.0[i];
        }
        diffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(ParameterPoint::new([0.0, 0.0, 0.0, 0.0, -0.01]).is_err());
        assert!(ParameterPoint::new([1.01, 0.0, 0.0, 0.0, 0.0]).is_err());
        assert!(ParameterPoint::new([f64::NAN, 0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_from_slice_arity() {
        let err = ParameterPoint::from_slice(&[0.1; 7]).unwrap_err();
        assert_eq!(
            err,
            EngineError::DimensionMismatch {
                expected: 5,
                got: 7
            }
        );
    }

    #[test]
    fn test_distance_symmetry() {
        let a = ParameterPoint::new([0.1, 0.4, 0.7, 0.2, 0.9]).unwrap();
        let b = ParameterPoint::new([0.8, 0.1, 0.3, 0.6, 0.0]).unwrap();
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_lerp_stays_in_bounding_box() {
        let a = ParameterPoint::new([0.2, 0.8, 0.0, 1.0, 0.5]).unwrap();
        let b = ParameterPoint::new([0.6, 0.1, 0.9, 0.3, 0.5]).unwrap();
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            let p = a.lerp(&b, t);
            for i in 0..DIM {
                let lo = a.coords()[i].min(b.coords()[i]);
                let hi = a.coords()[i].max(b.coords()[i]);
                assert!(p.coords()[i] >= lo - 1e-12 && p.coords()[i] <= hi + 1e-12);
            }
        }
    }
}
