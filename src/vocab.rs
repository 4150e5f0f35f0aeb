//! Vocabulary extraction: from a parameter-space point to image-ready terms.
//!
//! Any point in the box, canonical or not, maps to the nearest canonical
//! state's vocabulary. When the second-nearest state sits within a relative
//! margin of the nearest, both contribute, weighted by inverse distance.
//! The blending is what lets trajectory and oscillation samples produce
//! gradually shifting vocabulary instead of hard jumps at basin boundaries.

use crate::error::Result;
use crate::point::{ParameterPoint, DIM};
use crate::registry::{StateRegistry, VisualClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default relative margin for vocabulary blending: the second-nearest
/// state contributes when its distance is within 15% of the nearest's.
pub const DEFAULT_BLEND_MARGIN: f64 = 0.15;

/// A graded vocabulary ladder: terms ordered from one extreme of a derived
/// scalar to the other, with the scalar computed as a linear blend of axis
/// values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyLadder {
    /// Category name (e.g. "surface_texture").
    pub category: String,
    /// Per-axis weights for the selection scalar.
    pub axis_weights: [f64; DIM],
    /// Constant added to the weighted sum before clamping to [0, 1].
    pub bias: f64,
    /// Terms ordered from scalar 0.0 to scalar 1.0.
    pub terms: Vec<String>,
}

impl VocabularyLadder {
    /// Select the ladder rung for a point, plus its immediate neighbors.
    ///
    /// Returns up to three deduplicated terms centered on the selected
    /// index, so adjacent points share vocabulary and transitions read
    /// smoothly.
    pub fn select(&self, point: &ParameterPoint) -> Vec<String> {
        if self.terms.is_empty() {
            return Vec::new();
        }
        let raw: f64 = self
            .axis_weights
            .iter()
            .zip(point.coords().iter())
            .map(|(w, c)| w * c)
            .sum::<f64>()
            + self.bias;
        let value = raw.clamp(0.0, 1.0);
        let last = self.terms.len() - 1;
        let idx = (value * last as f64).round() as usize;

        let mut selected = Vec::with_capacity(3);
        for i in [idx.saturating_sub(1), idx, (idx + 1).min(last)] {
            let term = &self.terms[i];
            if !selected.contains(term) {
                selected.push(term.clone());
            }
        }
        selected
    }
}

/// One contributor to a (possibly blended) vocabulary result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlendComponent {
    /// Contributing canonical state.
    pub state_id: String,
    /// Its visual-character tag.
    pub visual: VisualClass,
    /// Normalized weight; all components sum to 1.
    pub weight: f64,
    /// Distance from the query point to this state.
    pub distance: f64,
}

/// Structured vocabulary package for downstream text synthesis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyPackage {
    /// Visual-character tag of the dominant (nearest) state.
    pub visual: VisualClass,
    /// Descriptor phrases, dominant state first, blended state appended.
    pub descriptors: Vec<String>,
    /// Optical-property descriptors of the dominant state.
    pub optical: Vec<String>,
    /// Color associations, blended like the descriptors.
    pub colors: Vec<String>,
    /// Contributing states with proximity weights, nearest first.
    pub blend: Vec<BlendComponent>,
    /// Graded ladder selections by category.
    pub graded: BTreeMap<String, Vec<String>>,
}

/// Maps parameter-space points to visual vocabulary.
pub struct VocabularyExtractor {
    blend_margin: f64,
}

impl Default for VocabularyExtractor {
    fn default() -> Self {
        VocabularyExtractor {
            blend_margin: DEFAULT_BLEND_MARGIN,
        }
    }
}

impl VocabularyExtractor {
    /// Create an extractor with a custom blend margin.
    pub fn with_margin(blend_margin: f64) -> Self {
        VocabularyExtractor { blend_margin }
    }

    /// Extract vocabulary for an arbitrary in-range point.
    ///
    /// The nearest canonical state (declaration-order ties) supplies the
    /// visual tag and leads the descriptor list. When the second-nearest
    /// state lies within the blend margin, its descriptors and colors are
    /// appended and both appear in `blend` with weights proportional to
    /// inverse distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::domains;
    ///
    /// let engine = domains::weathering().unwrap();
    /// let state = engine.registry().get("noble_verdigris").unwrap();
    /// let package = engine.extract_vocabulary(&state.point).unwrap();
    /// assert_eq!(package.blend[0].state_id, "noble_verdigris");
    /// assert_eq!(package.blend[0].weight, 1.0);
    /// ```
    pub fn extract(
        &self,
        registry: &StateRegistry,
        ladders: &[VocabularyLadder],
        point: &ParameterPoint,
    ) -> Result<VocabularyPackage> {
        let ((first, d1), second) = registry.nearest_two(point);

        let mut descriptors = first.vocabulary.descriptors.clone();
        let mut colors = first.vocabulary.colors.clone();
        let mut blend = vec![BlendComponent {
            state_id: first.id.clone(),
            visual: first.visual,
            weight: 1.0,
            distance: d1,
        }];

        if let Some((next, d2)) = second {
            // An exact hit on a canonical state never blends.
            if d1 > 0.0 && d2 <= d1 * (1.0 + self.blend_margin) {
                let w1 = 1.0 / d1;
                let w2 = 1.0 / d2;
                let total = w1 + w2;
                blend[0].weight = w1 / total;
                blend.push(BlendComponent {
                    state_id: next.id.clone(),
                    visual: next.visual,
                    weight: w2 / total,
                    distance: d2,
                });
                for term in &next.vocabulary.descriptors {
                    if !descriptors.contains(term) {
                        descriptors.push(term.clone());
                    }
                }
                for color in &next.vocabulary.colors {
                    if !colors.contains(color) {
                        colors.push(color.clone());
                    }
                }
            }
        }

        let graded = ladders
            .iter()
            .map(|ladder| (ladder.category.clone(), ladder.select(point)))
            .collect();

        Ok(VocabularyPackage {
            visual: first.visual,
            descriptors,
            optical: first.vocabulary.optical.clone(),
            colors,
            blend,
            graded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CanonicalState, VocabularyBundle};

    fn state(id: &str, coords: [f64; 5], visual: VisualClass) -> CanonicalState {
        CanonicalState {
            id: id.to_string(),
            label: id.to_string(),
            point: ParameterPoint::new(coords).unwrap(),
            visual,
            vocabulary: VocabularyBundle {
                keywords: vec![],
                descriptors: vec![format!("{} descriptor", id)],
                optical: vec![format!("{} optical", id)],
                colors: vec![format!("{} color", id)],
            },
        }
    }

    fn fixture_registry() -> StateRegistry {
        StateRegistry::new(
            "fixture",
            ["a", "b", "c", "d", "e"],
            vec![
                state("low", [0.1, 0.1, 0.1, 0.1, 0.1], VisualClass::Pristine),
                state("high", [0.9, 0.9, 0.9, 0.9, 0.9], VisualClass::Relict),
            ],
            "low",
        )
        .unwrap()
    }

    #[test]
    fn test_exact_hit_has_single_full_weight_component() {
        let reg = fixture_registry();
        let extractor = VocabularyExtractor::default();
        let p = ParameterPoint::new([0.1; 5]).unwrap();
        let package = extractor.extract(&reg, &[], &p).unwrap();
        assert_eq!(package.blend.len(), 1);
        assert_eq!(package.blend[0].weight, 1.0);
        assert_eq!(package.visual, VisualClass::Pristine);
    }

    #[test]
    fn test_midpoint_blends_both_states() {
        let reg = fixture_registry();
        let extractor = VocabularyExtractor::default();
        let p = ParameterPoint::new([0.5; 5]).unwrap();
        let package = extractor.extract(&reg, &[], &p).unwrap();
        assert_eq!(package.blend.len(), 2);
        let total: f64 = package.blend.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
        // Equidistant: weights split evenly, nearest (first-declared) leads.
        assert_eq!(package.blend[0].state_id, "low");
        assert!((package.blend[0].weight - 0.5).abs() < 1e-12);
        assert!(package.descriptors.iter().any(|d| d.contains("high")));
    }

    #[test]
    fn test_far_second_state_does_not_blend() {
        let reg = fixture_registry();
        let extractor = VocabularyExtractor::default();
        let p = ParameterPoint::new([0.15; 5]).unwrap();
        let package = extractor.extract(&reg, &[], &p).unwrap();
        assert_eq!(package.blend.len(), 1);
        assert_eq!(package.blend[0].state_id, "low");
    }

    #[test]
    fn test_ladder_selects_neighborhood() {
        let ladder = VocabularyLadder {
            category: "texture".to_string(),
            axis_weights: [1.0, 0.0, 0.0, 0.0, 0.0],
            bias: 0.0,
            terms: (0..8).map(|i| format!("rung {}", i)).collect(),
        };
        let p = ParameterPoint::new([0.0; 5]).unwrap();
        assert_eq!(ladder.select(&p), vec!["rung 0", "rung 1"]);
        let p = ParameterPoint::new([1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(ladder.select(&p), vec!["rung 6", "rung 7"]);
        let p = ParameterPoint::new([0.5, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(ladder.select(&p).len(), 3);
    }
}
