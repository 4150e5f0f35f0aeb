//! Smooth trajectories between canonical states.
//!
//! A trajectory is the linear interpolation path between two states,
//! sampled at a caller-chosen number of steps. Endpoints are reproduced
//! exactly and every intermediate sample stays inside the axis-wise
//! bounding box of the endpoints.

use crate::error::{EngineError, Result};
use crate::point::ParameterPoint;
use crate::registry::StateRegistry;
use serde::{Deserialize, Serialize};

/// One sample along a trajectory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Step index, 0-based.
    pub step: usize,
    /// Interpolation fraction in [0, 1].
    pub t: f64,
    /// The interpolated point.
    pub point: ParameterPoint,
    /// Identifier of the nearest canonical state to this sample.
    pub nearest_state: String,
    /// Distance to that state.
    pub nearest_distance: f64,
}

/// A complete sampled trajectory between two canonical states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    /// Starting state identifier.
    pub from: String,
    /// Target state identifier.
    pub to: String,
    /// Euclidean distance between the endpoints.
    pub total_distance: f64,
    /// The samples, length equals the requested step count.
    pub samples: Vec<TrajectorySample>,
}

/// Sample the straight-line path between two points.
///
/// Returns `steps` pairs of `(t, point)` with `t = i / (steps - 1)`.
/// The first point equals `a` exactly and the last equals `b` exactly.
/// Fails with `InvalidArgument` for `steps < 2`: a trajectory needs at
/// least its two endpoints.
///
/// # Examples
///
/// ```
/// use morphospace::{trajectory::interpolate_path, ParameterPoint};
///
/// let a = ParameterPoint::new([0.0; 5]).unwrap();
/// let b = ParameterPoint::new([1.0; 5]).unwrap();
/// let path = interpolate_path(&a, &b, 5).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[0].1, a);
/// assert_eq!(path[4].1, b);
/// ```
pub fn interpolate_path(
    a: &ParameterPoint,
    b: &ParameterPoint,
    steps: usize,
) -> Result<Vec<(f64, ParameterPoint)>> {
    if steps < 2 {
        return Err(EngineError::InvalidArgument {
            what: "steps",
            detail: format!("need at least 2 trajectory steps, got {}", steps),
        });
    }
    let mut path = Vec::with_capacity(steps);
    for i in 0..steps {
        let t = i as f64 / (steps - 1) as f64;
        path.push((t, a.lerp(b, t)));
    }
    Ok(path)
}

/// Generates annotated trajectories over a registry.
pub struct TrajectoryGenerator;

impl TrajectoryGenerator {
    /// Build the trajectory between two canonical states.
    ///
    /// Each sample is annotated with the nearest canonical state, which is
    /// what lets a downstream consumer narrate how the path passes through
    /// the registry's territory.
    pub fn trajectory(
        registry: &StateRegistry,
        from_id: &str,
        to_id: &str,
        steps: usize,
    ) -> Result<Trajectory> {
        let from = registry.get(from_id)?;
        let to = registry.get(to_id)?;
        let path = interpolate_path(&from.point, &to.point, steps)?;

        let samples = path
            .into_iter()
            .enumerate()
            .map(|(step, (t, point))| {
                let (nearest, dist) = registry.nearest(&point);
                TrajectorySample {
                    step,
                    t,
                    point,
                    nearest_state: nearest.id.clone(),
                    nearest_distance: dist,
                }
            })
            .collect();

        Ok(Trajectory {
            from: from.id.clone(),
            to: to.id.clone(),
            total_distance: from.point.distance(&to.point),
            samples,
        })
    }
}
