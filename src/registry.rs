//! Canonical state tables and the read-only registry over them.
//!
//! A registry is built once at process start from static domain tables and
//! never mutated, so unsynchronized concurrent reads are safe. Construction
//! validates everything up front: malformed tables fail at load time, not
//! at call time.

use crate::error::{EngineError, Result};
use crate::point::ParameterPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed set of visual-character tags shared by every domain.
///
/// The names are deliberately domain-neutral: a weathering state and a
/// landform state can carry the same tag when they read the same way in a
/// generated image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualClass {
    /// Unaltered surface or freshly exposed material.
    Pristine,
    /// Gently matured character, time-enriched rather than degraded.
    Mellowed,
    /// Active transformation products dominating the surface.
    Bloom,
    /// Material subtracted and shaped by environmental forces.
    Sculpted,
    /// Discontinuity networks: cracks, joints, delamination.
    Fractured,
    /// End-stage, fragmentary, archaeological character.
    Relict,
}

/// Descriptive vocabulary attached to a canonical state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyBundle {
    /// Short matching terms used by the intent classifier.
    pub keywords: Vec<String>,
    /// Longer image-generation phrases describing the state.
    pub descriptors: Vec<String>,
    /// Optical-property descriptors (finish, scatter, transparency).
    pub optical: Vec<String>,
    /// Color associations for the state.
    pub colors: Vec<String>,
}

/// A named, fixed point in parameter space with its vocabulary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanonicalState {
    /// Unique identifier within one registry.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Position in the shared parameter space.
    pub point: ParameterPoint,
    /// Visual-character tag.
    pub visual: VisualClass,
    /// Keyword and optical vocabulary for downstream synthesis.
    pub vocabulary: VocabularyBundle,
}

/// Immutable table of canonical states for one domain.
///
/// Lookup is by identifier; iteration order is declaration order, which is
/// also the deterministic tie-break order used by the classifier and the
/// vocabulary extractor.
#[derive(Clone, Debug)]
pub struct StateRegistry {
    domain: String,
    axes: [String; crate::point::DIM],
    states: Vec<CanonicalState>,
    index: HashMap<String, usize>,
    default_idx: usize,
}

impl StateRegistry {
    /// Build a registry from a state table.
    ///
    /// Fails with `InvalidArgument` on an empty table, a duplicate
    /// identifier, or a `default_id` that names no state. Coordinate range
    /// is already guaranteed by `ParameterPoint` construction.
    pub fn new(
        domain: &str,
        axes: [&str; crate::point::DIM],
        states: Vec<CanonicalState>,
        default_id: &str,
    ) -> Result<Self> {
        if states.is_empty() {
            return Err(EngineError::InvalidArgument {
                what: "states",
                detail: format!("domain {:?} has an empty state table", domain),
            });
        }
        let mut index = HashMap::with_capacity(states.len());
        for (i, state) in states.iter().enumerate() {
            if index.insert(state.id.clone(), i).is_some() {
                return Err(EngineError::InvalidArgument {
                    what: "states",
                    detail: format!("duplicate state id {:?}", state.id),
                });
            }
        }
        let default_idx = *index.get(default_id).ok_or_else(|| EngineError::InvalidArgument {
            what: "default_id",
            detail: format!("default state {:?} is not in the table", default_id),
        })?;
        Ok(StateRegistry {
            domain: domain.to_string(),
            axes: axes.map(String::from),
            states,
            index,
            default_idx,
        })
    }

    /// Domain name this registry describes.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Axis names, in coordinate order.
    pub fn axes(&self) -> &[String; crate::point::DIM] {
        &self.axes
    }

    /// Look up a canonical state by identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::domains;
    ///
    /// let engine = domains::weathering().unwrap();
    /// let state = engine.registry().get("deep_rust").unwrap();
    /// assert_eq!(state.label, "Deep Rust");
    /// assert!(engine.registry().get("no_such_state").is_err());
    /// ```
    pub fn get(&self, id: &str) -> Result<&CanonicalState> {
        self.index
            .get(id)
            .map(|&i| &self.states[i])
            .ok_or_else(|| EngineError::NotFound {
                kind: "state",
                id: id.to_string(),
            })
    }

    /// All states in declaration order.
    pub fn list(&self) -> &[CanonicalState] {
        &self.states
    }

    /// Identifiers of all states, in declaration order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.id.as_str()).collect()
    }

    /// The designated fallback state for keyword-free classification.
    pub fn default_state(&self) -> &CanonicalState {
        &self.states[self.default_idx]
    }

    /// Nearest canonical state to an arbitrary point.
    ///
    /// Ties resolve to the earlier-declared state: the scan keeps the first
    /// minimum it sees.
    pub fn nearest(&self, point: &ParameterPoint) -> (&CanonicalState, f64) {
        let mut best = &self.states[0];
        let mut best_dist = best.point.distance(point);
        for state in &self.states[1..] {
            let d = state.point.distance(point);
            if d < best_dist {
                best = state;
                best_dist = d;
            }
        }
        (best, best_dist)
    }

    /// Nearest and second-nearest canonical states to a point.
    ///
    /// The second entry is `None` for a single-state registry.
    pub fn nearest_two(
        &self,
        point: &ParameterPoint,
    ) -> ((&CanonicalState, f64), Option<(&CanonicalState, f64)>) {
        let (first, first_dist) = self.nearest(point);
        let mut second: Option<(&CanonicalState, f64)> = None;
        for state in &self.states {
            if state.id == first.id {
                continue;
            }
            let d = state.point.distance(point);
            match second {
                Some((_, sd)) if d >= sd => {}
                _ => second = Some((state, d)),
            }
        }
        ((first, first_dist), second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_state(id: &str, coords: [f64; 5]) -> CanonicalState {
        CanonicalState {
            id: id.to_string(),
            label: id.to_string(),
            point: ParameterPoint::new(coords).unwrap(),
            visual: VisualClass::Pristine,
            vocabulary: VocabularyBundle {
                keywords: vec![],
                descriptors: vec![],
                optical: vec![],
                colors: vec![],
            },
        }
    }

    fn tiny_registry() -> StateRegistry {
        StateRegistry::new(
            "fixture",
            ["a", "b", "c", "d", "e"],
            vec![
                tiny_state("origin", [0.0, 0.0, 0.0, 0.0, 0.0]),
                tiny_state("mid", [0.5, 0.5, 0.5, 0.5, 0.5]),
                tiny_state("far", [1.0, 1.0, 1.0, 1.0, 1.0]),
            ],
            "mid",
        )
        .unwrap()
    }

    #[test]
    fn test_get_and_not_found() {
        let reg = tiny_registry();
        assert_eq!(reg.get("mid").unwrap().id, "mid");
        let err = reg.get("missing").unwrap_err();
        assert_eq!(
            err,
            EngineError::NotFound {
                kind: "state",
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_list_preserves_declaration_order() {
        let reg = tiny_registry();
        assert_eq!(reg.all_ids(), vec!["origin", "mid", "far"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = StateRegistry::new(
            "fixture",
            ["a", "b", "c", "d", "e"],
            vec![
                tiny_state("dup", [0.0; 5]),
                tiny_state("dup", [1.0; 5]),
            ],
            "dup",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_rejected() {
        let result = StateRegistry::new(
            "fixture",
            ["a", "b", "c", "d", "e"],
            vec![tiny_state("only", [0.0; 5])],
            "absent",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nearest_tie_breaks_to_earlier_declared() {
        // Point equidistant from origin and far; origin is declared first.
        let reg = tiny_registry();
        let p = ParameterPoint::new([0.5; 5]).unwrap();
        // mid is exactly at p, so remove the ambiguity by testing nearest_two.
        let ((first, d), second) = reg.nearest_two(&p);
        assert_eq!(first.id, "mid");
        assert_eq!(d, 0.0);
        let (second, _) = second.unwrap();
        assert_eq!(second.id, "origin");
    }
}
