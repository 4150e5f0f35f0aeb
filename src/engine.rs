//! The per-domain engine: one registry plus the operations over it.
//!
//! `Morphospace` bundles a state registry, rhythmic and attractor preset
//! tables, a classifier, and a vocabulary extractor for one domain. The
//! same type is instantiated once per vocabulary (weathering, landform),
//! which is what keeps the core generic: no domain logic lives here, only
//! wiring.
//!
//! Every operation is a pure, synchronous computation over the immutable
//! tables; concurrent calls need no coordination.

use crate::attractor::{AttractorComposer, AttractorPreset, ComposeMode, PromptPackage};
use crate::classify::{Classification, IntentClassifier};
use crate::error::{EngineError, Result};
use crate::oscillate::{OscillationSequence, OscillationSequencer, RhythmicPreset, Waveform};
use crate::point::{ParameterPoint, DIM};
use crate::registry::StateRegistry;
use crate::trajectory::{Trajectory, TrajectoryGenerator};
use crate::vocab::{VocabularyExtractor, VocabularyLadder, VocabularyPackage};
use serde::{Deserialize, Serialize};

/// Per-axis signed difference between two states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AxisDiff {
    /// Axis name.
    pub axis: String,
    /// Signed difference `b - a`.
    pub diff: f64,
}

/// Distance between two canonical states with a per-axis breakdown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceReport {
    pub state_a: String,
    pub state_b: String,
    /// Euclidean distance in [0, sqrt(5)].
    pub distance: f64,
    /// Signed per-axis differences, in axis order.
    pub axis_diffs: Vec<AxisDiff>,
    /// Axis with the largest absolute difference.
    pub dominant_axis: String,
}

/// Static metadata about one domain instantiation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainSummary {
    pub domain: String,
    pub axes: Vec<String>,
    pub state_count: usize,
    pub preset_count: usize,
    pub attractor_count: usize,
    /// Distinct preset periods, ascending.
    pub periods: Vec<usize>,
    pub default_state: String,
}

/// A complete domain instantiation of the morphospace engine.
pub struct Morphospace {
    registry: StateRegistry,
    presets: Vec<RhythmicPreset>,
    attractors: Vec<AttractorPreset>,
    ladders: Vec<VocabularyLadder>,
    classifier: IntentClassifier,
    extractor: VocabularyExtractor,
}

impl Morphospace {
    /// Assemble an engine from validated domain tables.
    ///
    /// Cross-table references are checked here so a malformed table fails
    /// at load time: every preset endpoint must name a registry state and
    /// every period must be positive. Attractor anchors are in range by
    /// `ParameterPoint` construction.
    pub fn new(
        registry: StateRegistry,
        presets: Vec<RhythmicPreset>,
        attractors: Vec<AttractorPreset>,
        ladders: Vec<VocabularyLadder>,
    ) -> Result<Self> {
        for preset in &presets {
            registry.get(&preset.state_a)?;
            registry.get(&preset.state_b)?;
            if preset.period == 0 {
                return Err(EngineError::InvalidArgument {
                    what: "period",
                    detail: format!("preset {:?} has a zero period", preset.id),
                });
            }
        }
        Ok(Morphospace {
            registry,
            presets,
            attractors,
            ladders,
            classifier: IntentClassifier::default(),
            extractor: VocabularyExtractor::default(),
        })
    }

    /// Replace the default scoring strategy.
    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Domain name.
    pub fn domain(&self) -> &str {
        self.registry.domain()
    }

    /// The underlying state registry.
    pub fn registry(&self) -> &StateRegistry {
        &self.registry
    }

    /// Rhythmic presets in declaration order.
    pub fn presets(&self) -> &[RhythmicPreset] {
        &self.presets
    }

    /// Attractor presets in declaration order.
    pub fn attractors(&self) -> &[AttractorPreset] {
        &self.attractors
    }

    /// Look up a rhythmic preset by identifier.
    pub fn preset(&self, id: &str) -> Result<&RhythmicPreset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::NotFound {
                kind: "preset",
                id: id.to_string(),
            })
    }

    /// Classify free-text intent onto a canonical state.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let result = self.classifier.classify(&self.registry, text)?;
        tracing::debug!(
            domain = self.domain(),
            state = %result.state_id,
            score = result.score,
            fallback = result.fallback,
            "classified intent"
        );
        Ok(result)
    }

    /// Distance between two canonical states with a per-axis breakdown.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::domains;
    ///
    /// let engine = domains::weathering().unwrap();
    /// let report = engine.distance("fresh_pristine", "total_ruin").unwrap();
    /// assert!(report.distance > 1.0);
    /// assert_eq!(report.dominant_axis, "exposure_duration");
    /// ```
    pub fn distance(&self, state_a: &str, state_b: &str) -> Result<DistanceReport> {
        let a = self.registry.get(state_a)?;
        let b = self.registry.get(state_b)?;
        let diffs = a.point.axis_diffs(&b.point);

        let axis_diffs: Vec<AxisDiff> = self
            .registry
            .axes()
            .iter()
            .zip(diffs.iter())
            .map(|(axis, &diff)| AxisDiff {
                axis: axis.clone(),
                diff,
            })
            .collect();
        // max_by on abs keeps the last maximum; scan manually so the
        // earliest axis wins ties, matching every other tie-break here.
        let mut dominant = 0;
        for i in 1..DIM {
            if diffs[i].abs() > diffs[dominant].abs() {
                dominant = i;
            }
        }

        Ok(DistanceReport {
            state_a: a.id.clone(),
            state_b: b.id.clone(),
            distance: a.point.distance(&b.point),
            dominant_axis: axis_diffs[dominant].axis.clone(),
            axis_diffs,
        })
    }

    /// Linear trajectory between two canonical states.
    pub fn trajectory(&self, from: &str, to: &str, steps: usize) -> Result<Trajectory> {
        TrajectoryGenerator::trajectory(&self.registry, from, to, steps)
    }

    /// One full cycle of a named rhythmic preset.
    pub fn apply_preset(&self, preset_id: &str) -> Result<OscillationSequence> {
        let preset = self.preset(preset_id)?;
        OscillationSequencer::generate(&self.registry, preset)
    }

    /// Custom oscillation between arbitrary endpoint states.
    #[allow(clippy::too_many_arguments)]
    pub fn oscillate(
        &self,
        state_a: &str,
        state_b: &str,
        period: usize,
        waveform: Waveform,
        cycles: usize,
        phase_offset: f64,
    ) -> Result<OscillationSequence> {
        OscillationSequencer::generate_custom(
            &self.registry,
            state_a,
            state_b,
            period,
            waveform,
            cycles,
            phase_offset,
        )
    }

    /// Compose a prompt package from an attractor preset.
    pub fn compose(&self, attractor_id: &str, mode: ComposeMode) -> Result<PromptPackage> {
        AttractorComposer::new(
            &self.registry,
            &self.presets,
            &self.attractors,
            &self.extractor,
            &self.ladders,
        )
        .compose(attractor_id, mode)
    }

    /// Extract visual vocabulary for an arbitrary in-range point.
    pub fn extract_vocabulary(&self, point: &ParameterPoint) -> Result<VocabularyPackage> {
        self.extractor.extract(&self.registry, &self.ladders, point)
    }

    /// Static metadata about this domain instantiation.
    pub fn summary(&self) -> DomainSummary {
        let mut periods: Vec<usize> = self.presets.iter().map(|p| p.period).collect();
        periods.sort_unstable();
        periods.dedup();
        DomainSummary {
            domain: self.registry.domain().to_string(),
            axes: self.registry.axes().to_vec(),
            state_count: self.registry.list().len(),
            preset_count: self.presets.len(),
            attractor_count: self.attractors.len(),
            periods,
            default_state: self.registry.default_state().id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::ParameterPoint;
    use crate::registry::{CanonicalState, VisualClass, VocabularyBundle};

    fn fixture_engine() -> Morphospace {
        let states = vec![
            CanonicalState {
                id: "calm".to_string(),
                label: "Calm".to_string(),
                point: ParameterPoint::new([0.1, 0.2, 0.3, 0.4, 0.5]).unwrap(),
                visual: VisualClass::Mellowed,
                vocabulary: VocabularyBundle {
                    keywords: vec!["calm".to_string()],
                    descriptors: vec!["calm descriptor".to_string()],
                    optical: vec![],
                    colors: vec![],
                },
            },
            CanonicalState {
                id: "wild".to_string(),
                label: "Wild".to_string(),
                point: ParameterPoint::new([0.9, 0.8, 0.7, 0.6, 0.5]).unwrap(),
                visual: VisualClass::Sculpted,
                vocabulary: VocabularyBundle {
                    keywords: vec!["wild".to_string()],
                    descriptors: vec!["wild descriptor".to_string()],
                    optical: vec![],
                    colors: vec![],
                },
            },
        ];
        let registry = StateRegistry::new(
            "fixture",
            ["first", "second", "third", "fourth", "fifth"],
            states,
            "calm",
        )
        .unwrap();
        let presets = vec![RhythmicPreset {
            id: "sway".to_string(),
            period: 8,
            state_a: "calm".to_string(),
            state_b: "wild".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: vec![],
            description: String::new(),
        }];
        Morphospace::new(registry, presets, vec![], vec![]).unwrap()
    }

    #[test]
    fn test_preset_with_unknown_endpoint_rejected() {
        let registry = StateRegistry::new(
            "fixture",
            ["a", "b", "c", "d", "e"],
            vec![CanonicalState {
                id: "only".to_string(),
                label: "Only".to_string(),
                point: ParameterPoint::new([0.5; 5]).unwrap(),
                visual: VisualClass::Pristine,
                vocabulary: VocabularyBundle {
                    keywords: vec![],
                    descriptors: vec![],
                    optical: vec![],
                    colors: vec![],
                },
            }],
            "only",
        )
        .unwrap();
        let presets = vec![RhythmicPreset {
            id: "broken".to_string(),
            period: 4,
            state_a: "only".to_string(),
            state_b: "phantom".to_string(),
            waveform: Waveform::Triangular,
            shared_with: vec![],
            description: String::new(),
        }];
        assert!(Morphospace::new(registry, presets, vec![], vec![]).is_err());
    }

    #[test]
    fn test_distance_report_dominant_axis() {
        let engine = fixture_engine();
        let report = engine.distance("calm", "wild").unwrap();
        // Largest axis gap is 0.8 on the first axis.
        assert_eq!(report.dominant_axis, "first");
        assert_eq!(report.axis_diffs.len(), 5);
        assert!((report.axis_diffs[0].diff - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_apply_preset_length_and_pole() {
        let engine = fixture_engine();
        let seq = engine.apply_preset("sway").unwrap();
        assert_eq!(seq.steps.len(), 8);
        assert_eq!(seq.steps[0].t, 0.0);
        assert_eq!(
            seq.steps[0].point,
            engine.registry().get("calm").unwrap().point
        );
    }

    #[test]
    fn test_unknown_preset_not_found() {
        let engine = fixture_engine();
        let err = engine.apply_preset("ghost").unwrap_err();
        assert_eq!(
            err,
            EngineError::NotFound {
                kind: "preset",
                id: "ghost".to_string()
            }
        );
    }
}
