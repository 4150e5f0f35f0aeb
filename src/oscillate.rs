//! Periodic oscillation sequences between two canonical states.
//!
//! A rhythmic preset names two endpoint states, a period, and a waveform
//! shape. The sequencer maps each step index to a phase fraction, converts
//! it to an interpolation fraction via the waveform, and feeds that through
//! the same convex interpolation the trajectory generator uses. All
//! sequences are produced fresh per call; nothing is cached.

use crate::error::{EngineError, Result};
use crate::point::ParameterPoint;
use crate::registry::StateRegistry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Oscillation waveform shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Smooth ease-in/ease-out: `t = 0.5 * (1 - cos(2*pi*frac))`.
    /// Starts at the A pole, peaks at the B pole at the half period,
    /// and returns to A cyclically.
    Sinusoidal,
    /// Linear up-then-down zigzag: `t = 2*frac` for `frac <= 0.5`,
    /// else `2*(1 - frac)`.
    Triangular,
    /// Hard switch at the half period: `t = 0` before, `1` after.
    Square,
}

impl Waveform {
    /// Convert a cycle fraction in [0, 1) to an interpolation fraction.
    ///
    /// Guaranteed to stay in [0, 1] for every waveform.
    pub fn interpolation_fraction(&self, frac: f64) -> f64 {
        match self {
            Waveform::Sinusoidal => 0.5 * (1.0 - (2.0 * std::f64::consts::PI * frac).cos()),
            Waveform::Triangular => {
                if frac <= 0.5 {
                    2.0 * frac
                } else {
                    2.0 * (1.0 - frac)
                }
            }
            Waveform::Square => {
                if frac < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sinusoidal => "sinusoidal",
            Waveform::Triangular => "triangular",
            Waveform::Square => "square",
        }
    }
}

impl FromStr for Waveform {
    type Err = EngineError;

    /// Parse a waveform name arriving at the call boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::Waveform;
    ///
    /// assert_eq!("triangular".parse::<Waveform>().unwrap(), Waveform::Triangular);
    /// assert!("sawtooth".parse::<Waveform>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sinusoidal" => Ok(Waveform::Sinusoidal),
            "triangular" => Ok(Waveform::Triangular),
            "square" => Ok(Waveform::Square),
            other => Err(EngineError::UnsupportedWaveform {
                name: other.to_string(),
            }),
        }
    }
}

/// A curated periodic oscillation recipe between two canonical states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RhythmicPreset {
    /// Unique identifier within one domain's preset table.
    pub id: String,
    /// Number of discrete steps per cycle.
    pub period: usize,
    /// Identifier of the A-pole state (phase 0).
    pub state_a: String,
    /// Identifier of the B-pole state (phase 0.5).
    pub state_b: String,
    /// Waveform shape.
    pub waveform: Waveform,
    /// Domains sharing this period, for cross-domain documentation only.
    /// The sequencer never reads this field.
    pub shared_with: Vec<String>,
    /// Curated description of the oscillation's character.
    pub description: String,
}

/// One step of an oscillation sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OscillationStep {
    /// Step index, 0-based.
    pub step: usize,
    /// Cycle fraction in [0, 1).
    pub phase: f64,
    /// Interpolation fraction produced by the waveform.
    pub t: f64,
    /// Interpolated point.
    pub point: ParameterPoint,
    /// Nearest canonical state to this step's point.
    pub nearest_state: String,
}

/// A generated oscillation: ephemeral, produced fresh per call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OscillationSequence {
    /// Preset identifier, or `None` for a custom oscillation.
    pub preset: Option<String>,
    /// Steps per cycle.
    pub period: usize,
    /// Waveform used.
    pub waveform: Waveform,
    /// A-pole state identifier.
    pub state_a: String,
    /// B-pole state identifier.
    pub state_b: String,
    /// The sampled steps.
    pub steps: Vec<OscillationStep>,
}

/// Generates waveform-driven sequences over a registry.
pub struct OscillationSequencer;

impl OscillationSequencer {
    /// Generate one full cycle of a rhythmic preset.
    ///
    /// The sequence has exactly `preset.period` steps; step 0 reproduces
    /// the A pole exactly for every waveform.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::domains;
    ///
    /// let engine = domains::landform().unwrap();
    /// let seq = engine.apply_preset("tectonic_pulse").unwrap();
    /// assert_eq!(seq.steps.len(), 30);
    /// assert_eq!(seq.steps[0].t, 0.0);
    /// ```
    pub fn generate(registry: &StateRegistry, preset: &RhythmicPreset) -> Result<OscillationSequence> {
        let a = registry.get(&preset.state_a)?;
        let b = registry.get(&preset.state_b)?;
        let steps = Self::sample(registry, &a.point, &b.point, preset.waveform, preset.period, 1, 0.0)?;
        Ok(OscillationSequence {
            preset: Some(preset.id.clone()),
            period: preset.period,
            waveform: preset.waveform,
            state_a: preset.state_a.clone(),
            state_b: preset.state_b.clone(),
            steps,
        })
    }

    /// Generate a custom oscillation between arbitrary endpoint states.
    ///
    /// Generalizes `generate` with a caller-chosen period, cycle count,
    /// and starting phase offset (`0.0` starts at the A pole, `0.5` at the
    /// B pole). Total length is `period * cycles`.
    pub fn generate_custom(
        registry: &StateRegistry,
        state_a: &str,
        state_b: &str,
        period: usize,
        waveform: Waveform,
        cycles: usize,
        phase_offset: f64,
    ) -> Result<OscillationSequence> {
        let a = registry.get(state_a)?;
        let b = registry.get(state_b)?;
        if !(0.0..1.0).contains(&phase_offset) {
            return Err(EngineError::InvalidArgument {
                what: "phase_offset",
                detail: format!("phase offset {} must lie in [0, 1)", phase_offset),
            });
        }
        let steps = Self::sample(registry, &a.point, &b.point, waveform, period, cycles, phase_offset)?;
        Ok(OscillationSequence {
            preset: None,
            period,
            waveform,
            state_a: state_a.to_string(),
            state_b: state_b.to_string(),
            steps,
        })
    }

    fn sample(
        registry: &StateRegistry,
        a: &ParameterPoint,
        b: &ParameterPoint,
        waveform: Waveform,
        period: usize,
        cycles: usize,
        phase_offset: f64,
    ) -> Result<Vec<OscillationStep>> {
        if period == 0 {
            return Err(EngineError::InvalidArgument {
                what: "period",
                detail: "oscillation period must be positive".to_string(),
            });
        }
        if cycles == 0 {
            return Err(EngineError::InvalidArgument {
                what: "cycles",
                detail: "cycle count must be positive".to_string(),
            });
        }

        let total = period * cycles;
        let mut steps = Vec::with_capacity(total);
        for i in 0..total {
            let phase = ((i % period) as f64 / period as f64 + phase_offset).fract();
            let t = waveform.interpolation_fraction(phase);
            let point = a.lerp(b, t);
            let (nearest, _) = registry.nearest(&point);
            steps.push(OscillationStep {
                step: i,
                phase,
                t,
                point,
                nearest_state: nearest.id.clone(),
            });
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinusoidal_fraction_bounds_and_symmetry() {
        let w = Waveform::Sinusoidal;
        for i in 0..64 {
            let frac = i as f64 / 64.0;
            let t = w.interpolation_fraction(frac);
            assert!((0.0..=1.0).contains(&t), "t out of range at frac {}", frac);
        }
        assert_eq!(w.interpolation_fraction(0.0), 0.0);
        assert!((w.interpolation_fraction(0.5) - 1.0).abs() < 1e-12);
        // Symmetric about the half period.
        let up = w.interpolation_fraction(0.25);
        let down = w.interpolation_fraction(0.75);
        assert!((up - down).abs() < 1e-12);
    }

    #[test]
    fn test_triangular_fraction_is_zigzag() {
        let w = Waveform::Triangular;
        assert_eq!(w.interpolation_fraction(0.0), 0.0);
        assert_eq!(w.interpolation_fraction(0.25), 0.5);
        assert_eq!(w.interpolation_fraction(0.5), 1.0);
        assert_eq!(w.interpolation_fraction(0.75), 0.5);
    }

    #[test]
    fn test_square_fraction_switches_at_half() {
        let w = Waveform::Square;
        assert_eq!(w.interpolation_fraction(0.49), 0.0);
        assert_eq!(w.interpolation_fraction(0.5), 1.0);
    }

    #[test]
    fn test_unknown_waveform_name_rejected() {
        let err = "sawtooth".parse::<Waveform>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnsupportedWaveform {
                name: "sawtooth".to_string()
            }
        );
    }
}
