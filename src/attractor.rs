//! Attractor presets and composite prompt generation.
//!
//! Attractor presets are curated or statistically observed configurations.
//! Basin shares are externally authored constants carried verbatim; the
//! composer looks them up, it never recomputes them. For `lcm_sync`
//! attractors the hub period is a designated reference period for sampling
//! alignment, not a recomputed least common multiple: the curated catalog's
//! periods do not share a true LCM and the alignment is intentionally
//! approximate.

use crate::error::{EngineError, Result};
use crate::oscillate::RhythmicPreset;
use crate::point::ParameterPoint;
use crate::registry::StateRegistry;
use crate::vocab::{VocabularyExtractor, VocabularyLadder, VocabularyPackage};
use serde::{Deserialize, Serialize};

/// Classification of how an attractor preset was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractorClass {
    /// Locked to a synchronization hub period shared across domains.
    LcmSync,
    /// Emergent state existing in no single canonical type.
    Novel,
    /// Long-cycle harmonic hub.
    Harmonic,
    /// Hand-curated edge state.
    Curated,
}

/// A curated composite configuration anchored at one point in parameter
/// space, optionally synchronized to a reference period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttractorPreset {
    /// Unique identifier within one domain's attractor table.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Observed basin share as a fraction, absent for curated entries.
    /// Opaque authored metadata; never recomputed.
    pub basin_share: Option<f64>,
    /// How this attractor was obtained.
    pub class: AttractorClass,
    /// Domains participating in the attractor.
    pub source_domains: Vec<String>,
    /// Curated character description.
    pub description: String,
    /// Anchor point in this domain's parameter space.
    pub anchor: ParameterPoint,
    /// Designated synchronization reference period, when the attractor
    /// has one.
    pub hub_period: Option<usize>,
}

/// Prompt structure to produce from an attractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposeMode {
    /// Simultaneous vocabulary at the anchor point.
    Composite,
    /// Before/after vocabulary around a transition step. `None` means
    /// half the sampled preset's period.
    Split { transition: Option<usize> },
    /// Keyframe prompts sampled from the closest rhythmic preset.
    Sequence { keyframes: usize },
}

impl ComposeMode {
    /// Parse a mode name arriving at the call boundary, with optional
    /// per-mode parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::attractor::ComposeMode;
    ///
    /// let mode = ComposeMode::parse("sequence", None, Some(6)).unwrap();
    /// assert_eq!(mode, ComposeMode::Sequence { keyframes: 6 });
    /// assert!(ComposeMode::parse("collage", None, None).is_err());
    /// ```
    pub fn parse(mode: &str, transition: Option<usize>, keyframes: Option<usize>) -> Result<Self> {
        match mode {
            "composite" => Ok(ComposeMode::Composite),
            "split" => Ok(ComposeMode::Split { transition }),
            "sequence" => Ok(ComposeMode::Sequence {
                keyframes: keyframes.unwrap_or(4),
            }),
            other => Err(EngineError::InvalidArgument {
                what: "mode",
                detail: format!("unknown compose mode {:?}", other),
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ComposeMode::Composite => "composite",
            ComposeMode::Split { .. } => "split",
            ComposeMode::Sequence { .. } => "sequence",
        }
    }
}

/// Attractor metadata echoed in every prompt package.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttractorSummary {
    pub id: String,
    pub name: String,
    pub basin_share: Option<f64>,
    pub class: AttractorClass,
    pub hub_period: Option<usize>,
}

/// A rhythmic preset that aligns with the attractor's hub period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Preset identifier.
    pub preset: String,
    /// Its period.
    pub period: usize,
    /// Step indices within one hub cycle where the preset's cycle
    /// restarts, so all synchronized presets coincide.
    pub aligned_steps: Vec<usize>,
}

/// One keyframe of a sequence-mode package.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Keyframe {
    /// Keyframe index, 0-based.
    pub index: usize,
    /// Step within the preset's period.
    pub step: usize,
    /// Cycle fraction of that step.
    pub phase: f64,
    /// Comma-joined prompt text.
    pub prompt: String,
    /// Sampled point.
    pub point: ParameterPoint,
    /// Nearest canonical state.
    pub nearest_state: String,
}

/// Mode-specific payload of a prompt package.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ComposeDetail {
    Composite {
        /// Deduplicated union of descriptor and ladder terms at the anchor.
        prompt: String,
        vocabulary: VocabularyPackage,
    },
    Split {
        /// The rhythmic preset the transition was sampled from.
        preset: String,
        /// Transition step index within the preset's period.
        transition: usize,
        before: VocabularyPackage,
        after: VocabularyPackage,
    },
    Sequence {
        /// The rhythmic preset the keyframes were sampled from.
        preset: String,
        /// Its period.
        period: usize,
        /// Presets synchronized with the hub period (lcm_sync only).
        synchronized: Vec<SyncEntry>,
        keyframes: Vec<Keyframe>,
    },
}

/// Structured prompt package returned by `compose`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptPackage {
    pub attractor: AttractorSummary,
    pub detail: ComposeDetail,
}

/// Combines attractor metadata, rhythmic presets, and vocabulary
/// extraction into prompt packages.
pub struct AttractorComposer<'a> {
    registry: &'a StateRegistry,
    presets: &'a [RhythmicPreset],
    attractors: &'a [AttractorPreset],
    extractor: &'a VocabularyExtractor,
    ladders: &'a [VocabularyLadder],
}

impl<'a> AttractorComposer<'a> {
    pub fn new(
        registry: &'a StateRegistry,
        presets: &'a [RhythmicPreset],
        attractors: &'a [AttractorPreset],
        extractor: &'a VocabularyExtractor,
        ladders: &'a [VocabularyLadder],
    ) -> Self {
        AttractorComposer {
            registry,
            presets,
            attractors,
            extractor,
            ladders,
        }
    }

    /// Build the prompt package for an attractor in the requested mode.
    pub fn compose(&self, attractor_id: &str, mode: ComposeMode) -> Result<PromptPackage> {
        let preset = self
            .attractors
            .iter()
            .find(|a| a.id == attractor_id)
            .ok_or_else(|| EngineError::NotFound {
                kind: "attractor",
                id: attractor_id.to_string(),
            })?;

        let summary = AttractorSummary {
            id: preset.id.clone(),
            name: preset.name.clone(),
            basin_share: preset.basin_share,
            class: preset.class,
            hub_period: preset.hub_period,
        };

        let detail = match mode {
            ComposeMode::Composite => self.composite(preset)?,
            ComposeMode::Split { transition } => self.split(preset, transition)?,
            ComposeMode::Sequence { keyframes } => self.sequence(preset, keyframes)?,
        };
        tracing::debug!(attractor = %preset.id, mode = mode.name(), "composed prompt package");

        Ok(PromptPackage {
            attractor: summary,
            detail,
        })
    }

    fn composite(&self, preset: &AttractorPreset) -> Result<ComposeDetail> {
        let vocabulary = self
            .extractor
            .extract(self.registry, self.ladders, &preset.anchor)?;
        let prompt = join_terms(&vocabulary);
        Ok(ComposeDetail::Composite { prompt, vocabulary })
    }

    fn split(&self, preset: &AttractorPreset, transition: Option<usize>) -> Result<ComposeDetail> {
        let rhythmic = self.closest_preset(preset)?;
        let period = rhythmic.period;
        let transition = transition.unwrap_or(period / 2);
        if transition == 0 || transition >= period {
            return Err(EngineError::InvalidArgument {
                what: "transition",
                detail: format!(
                    "transition step {} must lie in 1..{} for preset {:?}",
                    transition, period, rhythmic.id
                ),
            });
        }

        // Sample the oscillation at the midpoints of the two segments so
        // the halves read as genuinely different characters.
        let before = self.vocabulary_at(rhythmic, transition / 2)?;
        let after = self.vocabulary_at(rhythmic, (transition + period) / 2)?;
        Ok(ComposeDetail::Split {
            preset: rhythmic.id.clone(),
            transition,
            before,
            after,
        })
    }

    fn sequence(&self, preset: &AttractorPreset, keyframes: usize) -> Result<ComposeDetail> {
        if keyframes == 0 {
            return Err(EngineError::InvalidArgument {
                what: "keyframes",
                detail: "keyframe count must be positive".to_string(),
            });
        }
        let rhythmic = self.closest_preset(preset)?;
        let period = rhythmic.period;

        let synchronized = if preset.class == AttractorClass::LcmSync {
            let hub = preset.hub_period.unwrap_or(period);
            self.presets
                .iter()
                .filter(|p| p.period == hub || hub % p.period == 0)
                .map(|p| SyncEntry {
                    preset: p.id.clone(),
                    period: p.period,
                    aligned_steps: (0..hub).step_by(p.period).collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let step_size = (period / keyframes).max(1);
        let mut frames = Vec::with_capacity(keyframes);
        for index in 0..keyframes {
            let step = (index * step_size) % period;
            let phase = step as f64 / period as f64;
            let (point, nearest_state) = self.oscillation_point(rhythmic, step)?;
            let vocabulary = self.extractor.extract(self.registry, self.ladders, &point)?;
            frames.push(Keyframe {
                index,
                step,
                phase,
                prompt: join_terms(&vocabulary),
                point,
                nearest_state,
            });
        }

        Ok(ComposeDetail::Sequence {
            preset: rhythmic.id.clone(),
            period,
            synchronized,
            keyframes: frames,
        })
    }

    /// The rhythmic preset whose period is closest to the attractor's hub
    /// period. Declaration order breaks ties.
    fn closest_preset(&self, preset: &AttractorPreset) -> Result<&RhythmicPreset> {
        let target = preset.hub_period.unwrap_or(30);
        self.presets
            .iter()
            .min_by_key(|p| p.period.abs_diff(target))
            .ok_or_else(|| EngineError::InvalidArgument {
                what: "presets",
                detail: "domain has no rhythmic presets to sample from".to_string(),
            })
    }

    fn oscillation_point(
        &self,
        rhythmic: &RhythmicPreset,
        step: usize,
    ) -> Result<(ParameterPoint, String)> {
        let a = self.registry.get(&rhythmic.state_a)?;
        let b = self.registry.get(&rhythmic.state_b)?;
        let frac = step as f64 / rhythmic.period as f64;
        let t = rhythmic.waveform.interpolation_fraction(frac);
        let point = a.point.lerp(&b.point, t);
        let (nearest, _) = self.registry.nearest(&point);
        Ok((point, nearest.id.clone()))
    }

    fn vocabulary_at(&self, rhythmic: &RhythmicPreset, step: usize) -> Result<VocabularyPackage> {
        let (point, _) = self.oscillation_point(rhythmic, step)?;
        self.extractor.extract(self.registry, self.ladders, &point)
    }
}

/// Deduplicated comma-joined prompt text from a vocabulary package.
fn join_terms(vocabulary: &VocabularyPackage) -> String {
    let mut terms: Vec<&str> = Vec::new();
    for term in &vocabulary.descriptors {
        if !terms.contains(&term.as_str()) {
            terms.push(term);
        }
    }
    for selected in vocabulary.graded.values() {
        for term in selected {
            if !terms.contains(&term.as_str()) {
                terms.push(term);
            }
        }
    }
    terms.join(", ")
}
