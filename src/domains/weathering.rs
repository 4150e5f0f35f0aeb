//! Weathering domain: material patina and decay aesthetics.
//!
//! Eight canonical weathering stages in a 5D morphospace grounded in
//! conservation science condition assessment. Axes:
//!
//! - `exposure_duration`: freshly made (0) to geological time (1)
//! - `agent_intensity`: sheltered (0) to extreme environmental attack (1)
//! - `material_resistance`: fragile/porous (0) to hard/dense (1)
//! - `intervention_state`: untouched (0) to heavily restored (1)
//! - `aesthetic_character`: destructive decay (0) to noble patina (1)
//!
//! Preset periods were chosen for cross-domain beat structure: 16 fills
//! the gap between splash(14) and the shared-18 domains, 20 is the common
//! ecosystem period, 30 is the designated synchronization hub.

use super::{attractor, ladder, state, svec};
use crate::attractor::AttractorClass;
use crate::engine::Morphospace;
use crate::error::Result;
use crate::oscillate::{RhythmicPreset, Waveform};
use crate::registry::{StateRegistry, VisualClass};

/// Build the weathering engine.
///
/// # Examples
///
/// ```
/// use morphospace::domains;
///
/// let engine = domains::weathering().unwrap();
/// assert_eq!(engine.domain(), "weathering");
/// assert_eq!(engine.registry().list().len(), 8);
/// ```
pub fn weathering() -> Result<Morphospace> {
    let states = vec![
        state(
            "fresh_pristine",
            "Fresh Pristine",
            [0.00, 0.00, 0.50, 0.00, 0.50],
            VisualClass::Pristine,
            &[
                "pristine", "new", "fresh", "mint", "unused", "unworn", "factory", "polished",
                "clean",
            ],
            &[
                "unmarked factory-fresh surface with original tool marks visible",
                "uniform material colour with no environmental alteration",
                "sharp machined edges and crisp geometric arrises",
                "consistent reflectance across all surface orientations",
                "material grain or texture as manufactured without overlay",
            ],
            &[
                "finish: original_manufactured",
                "scatter: uniform_material",
                "transparency: as_made",
            ],
            &[
                "clean whites",
                "bright metallics",
                "saturated original pigment",
                "uniform substrate colour",
            ],
        )?,
        state(
            "gentle_patina",
            "Gentle Patina",
            [0.30, 0.20, 0.60, 0.05, 0.85],
            VisualClass::Mellowed,
            &[
                "patina", "mellow", "aged", "antique", "vintage", "wabi-sabi", "honey", "warm wear",
                "gentle wear",
            ],
            &[
                "gentle honey-toned warmth from UV-mellowed surface",
                "soft wear at high-contact points revealing substrate warmth",
                "time-enriched surface depth from accumulated micro-interactions",
                "wabi-sabi imperfection enhancing material character and presence",
                "subtle tonal gradation from sheltered-to-exposed transition zones",
            ],
            &[
                "finish: mellowed_satin",
                "scatter: soft_diffuse",
                "transparency: surface_depth",
            ],
            &[
                "honey amber",
                "warm ivory",
                "burnished gold",
                "mellowed cream",
                "antique white",
            ],
        )?,
        state(
            "noble_verdigris",
            "Noble Verdigris",
            [0.60, 0.45, 0.75, 0.10, 0.95],
            VisualClass::Bloom,
            &[
                "verdigris", "copper", "bronze", "brass", "green patina", "noble", "cuprite",
            ],
            &[
                "verdigris green oxide layer over base metal",
                "bright green drip streaks below exposed copper edges",
                "mottled brown-to-green transition zone at sheltered boundary",
                "stable blue-green crust with crystalline surface texture",
                "salmon-pink bright metal visible at rubbed high points",
            ],
            &[
                "finish: oxide_matte",
                "scatter: crystalline_micro",
                "transparency: opaque_crust",
            ],
            &[
                "verdigris green",
                "patina blue-green",
                "cuprite brown",
                "salmon-pink highlights",
            ],
        )?,
        state(
            "deep_rust",
            "Deep Rust",
            [0.55, 0.70, 0.40, 0.05, 0.55],
            VisualClass::Bloom,
            &[
                "rust", "rusted", "rusting", "iron", "steel", "corrosion", "corroded", "oxide",
                "corten", "ferrous",
            ],
            &[
                "weeping rust stains below fastener points",
                "laminar scale lifting from substrate in curved plates",
                "pinpoint pitting beneath intact oxide layer",
                "orange-brown tide marks at moisture boundaries",
                "red-black stable magnetite core under flaking hematite",
            ],
            &[
                "finish: oxide_matte",
                "scatter: flaking_laminar",
                "transparency: opaque_crust",
            ],
            &[
                "rust orange-brown",
                "oxide red-black",
                "flash-rust orange",
                "magnetite charcoal",
            ],
        )?,
        state(
            "stone_erosion",
            "Stone Erosion",
            [0.70, 0.55, 0.65, 0.15, 0.75],
            VisualClass::Sculpted,
            &[
                "erosion", "eroded", "limestone", "sandstone", "marble", "tafoni", "lichen",
                "weathered stone", "sugaring",
            ],
            &[
                "material subtracted by environmental forces revealing inner structure",
                "rounded edges and dissolved detail softening original geometry",
                "differential erosion where hard and soft zones meet creating relief",
                "honeycomb tafoni cavities carved by salt crystallization cycles",
                "biological colonization establishing in erosion-prepared niches",
            ],
            &[
                "finish: rough_textured",
                "scatter: deep_shadow_cavity",
                "transparency: opaque_solid",
            ],
            &[
                "weathered grey",
                "lichen orange",
                "moss green",
                "exposed substrate pink-buff",
                "desert varnish brown-black",
            ],
        )?,
        state(
            "paper_foxing",
            "Paper Foxing",
            [0.45, 0.35, 0.15, 0.20, 0.60],
            VisualClass::Mellowed,
            &[
                "foxing", "paper", "parchment", "vellum", "yellowed", "tide mark", "brittle",
                "manuscript", "foxed",
            ],
            &[
                "scattered brown foxing spots of varying diameter",
                "tide mark brown ring where moisture boundary dried",
                "overall warm yellowing from acid migration",
                "fading pattern revealing exposure direction",
                "brittle edge crumbling where fibre chains have broken",
            ],
            &[
                "finish: matte_fibrous",
                "scatter: soft_diffuse",
                "transparency: translucent_thin",
            ],
            &[
                "warm ivory",
                "foxing brown",
                "tan-brown tone",
                "faded sepia",
            ],
        )?,
        state(
            "cracked_glaze",
            "Cracked Glaze",
            [0.50, 0.40, 0.55, 0.10, 0.80],
            VisualClass::Fractured,
            &[
                "craquelure", "glaze", "ceramic", "porcelain", "crazing", "cracked", "terracotta",
                "crackle",
            ],
            &[
                "craquelure network dividing surface into irregular polygonal cells",
                "stained crack lines recording moisture penetration history",
                "delamination edge where coating lifts from substrate in curved flakes",
                "conchoidal chip scars exposing fresh substrate colour beneath",
                "alligator-pattern deep cracking from cyclic stress accumulation",
            ],
            &[
                "finish: cracked_gloss",
                "scatter: linear_shadow_network",
                "transparency: layered_partial",
            ],
            &[
                "craze-stained amber",
                "chip-white substrate",
                "dark crack-line web",
                "glaze pool variation",
            ],
        )?,
        state(
            "total_ruin",
            "Total Ruin",
            [0.95, 0.90, 0.30, 0.00, 0.40],
            VisualClass::Relict,
            &[
                "ruin", "ruins", "derelict", "abandoned", "collapsed", "archaeological",
                "fragment", "crumbling", "decayed",
            ],
            &[
                "multiple temporal states visible simultaneously in cross-section",
                "fragmentary remains with substrate weathered through to core",
                "paint ghosts and stain shadows recording vanished surface layers",
                "advanced biological integration, material becoming landscape",
                "structural collapse geometry revealing internal construction",
            ],
            &[
                "finish: friable_rough",
                "scatter: deep_multi_layer",
                "transparency: fragmentary_void",
            ],
            &[
                "earth tones",
                "ash grey",
                "bone white",
                "charcoal black",
                "mineral stain ochre",
            ],
        )?,
    ];

    let registry = StateRegistry::new(
        "weathering",
        [
            "exposure_duration",
            "agent_intensity",
            "material_resistance",
            "intervention_state",
            "aesthetic_character",
        ],
        states,
        "gentle_patina",
    )?;

    let presets = vec![
        RhythmicPreset {
            id: "aging_cycle".to_string(),
            period: 16,
            state_a: "fresh_pristine".to_string(),
            state_b: "deep_rust".to_string(),
            waveform: Waveform::Triangular,
            shared_with: vec![],
            description: "Brand-new surface aging into aggressive oxidation and back, \
                the full lifecycle of ferrous metal under exposure. Unique period 16 \
                fills the gap between splash(14) and the shared-18 domains."
                .to_string(),
        },
        RhythmicPreset {
            id: "restoration_pendulum".to_string(),
            period: 20,
            state_a: "total_ruin".to_string(),
            state_b: "gentle_patina".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["heraldic", "surface_design", "splash"]),
            description: "Ruin state being gently restored toward dignified age, \
                the conservation oscillation between decay and intervention."
                .to_string(),
        },
        RhythmicPreset {
            id: "oxidation_bloom".to_string(),
            period: 24,
            state_a: "fresh_pristine".to_string(),
            state_b: "noble_verdigris".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["catastrophe", "diatom"]),
            description: "Clean metal developing noble green patina, the copper \
                weathering progression from salmon-pink to blue-green."
                .to_string(),
        },
        RhythmicPreset {
            id: "erosion_pulse".to_string(),
            period: 18,
            state_a: "stone_erosion".to_string(),
            state_b: "gentle_patina".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["nuclear", "catastrophe", "diatom", "splash"]),
            description: "Stone oscillating between active erosion and gentle stable \
                age, the tug between environmental attack and material resistance."
                .to_string(),
        },
        RhythmicPreset {
            id: "entropy_wave".to_string(),
            period: 30,
            state_a: "gentle_patina".to_string(),
            state_b: "total_ruin".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&[
                "microscopy",
                "diatom",
                "heraldic",
                "surface_design",
                "splash",
            ]),
            description: "Dignified age descending into complete decay, the full \
                entropy gradient from wabi-sabi to ruin. Synchronization hub period 30."
                .to_string(),
        },
    ];

    let attractors = vec![
        attractor(
            "period_30",
            "Period 30: Universal Sync",
            Some(0.116),
            AttractorClass::LcmSync,
            &[
                "microscopy",
                "diatom",
                "heraldic",
                "surface_design",
                "splash",
                "weathering",
            ],
            "Dominant hub synchronization. The entropy_wave preset locks directly \
             into this attractor. Surface sits in warm-aged territory, gentle \
             time-enriched character with honey tones and soft wear.",
            [0.40, 0.30, 0.55, 0.15, 0.75],
            Some(30),
        )?,
        attractor(
            "period_29",
            "Period 29: Emergent Resonance",
            Some(0.084),
            AttractorClass::LcmSync,
            &["microscopy", "nuclear", "catastrophe", "diatom", "heraldic"],
            "Purely emergent five-domain attractor. A mid-aged stone surface with \
             established lichen, between gentle patina and active erosion. This \
             weathering state exists in no single canonical type.",
            [0.55, 0.40, 0.60, 0.10, 0.70],
            Some(29),
        )?,
        attractor(
            "period_19",
            "Period 19: Gap Flow",
            Some(0.074),
            AttractorClass::Novel,
            &["microscopy", "nuclear", "catastrophe", "diatom"],
            "Resilient novel gap-filler between periods 18 and 20. The exact moment \
             copper turns from brown cuprite to green verdigris, poised at the \
             chemical transition boundary.",
            [0.48, 0.42, 0.65, 0.08, 0.82],
            Some(19),
        )?,
        attractor(
            "period_28",
            "Period 28: Composite Beat",
            Some(0.024),
            AttractorClass::Novel,
            &["microscopy", "nuclear", "catastrophe", "diatom"],
            "Novel composite beat. Tension between noble beauty and advancing decay: \
             the cracked-glaze state where the craquelure network is simultaneously \
             beautiful pattern and active deterioration pathway.",
            [0.52, 0.48, 0.50, 0.12, 0.72],
            Some(28),
        )?,
        attractor(
            "period_60",
            "Period 60: Harmonic Hub",
            Some(0.040),
            AttractorClass::Harmonic,
            &["microscopy", "nuclear", "catastrophe", "diatom"],
            "Long-cycle harmonic hub (3x20, 4x15, 5x12). The oscillation visits the \
             full weathering repertoire; every canonical state gets a moment in the \
             long cycle.",
            [0.50, 0.45, 0.52, 0.10, 0.65],
            Some(60),
        )?,
        attractor(
            "bifurcation_edge",
            "Bifurcation Edge: Patina Threshold",
            None,
            AttractorClass::Curated,
            &["weathering"],
            "Curated state at the exact moment weathering transitions from \
             character-enhancing patina to destructive decay. The conservation \
             threshold where beautiful age becomes active deterioration.",
            [0.52, 0.50, 0.48, 0.05, 0.65],
            None,
        )?,
        attractor(
            "organic_complexity",
            "Organic Complexity: Wabi-Sabi Perfection",
            None,
            AttractorClass::Curated,
            &["weathering"],
            "Curated state at maximum aesthetic beauty from weathering. Time has \
             enriched rather than degraded: worn smooth by hands, mellowed by light, \
             dignified by years. Not ancient ruin but perfected age.",
            [0.35, 0.20, 0.70, 0.10, 0.95],
            None,
        )?,
    ];

    let ladders = vec![
        ladder(
            "surface_texture",
            [1.0, 0.0, 0.0, 0.0, 0.0],
            0.0,
            &[
                "pristine smooth surface with original manufactured finish",
                "slight softening of edges from initial environmental contact",
                "developing surface irregularity with micro-texture formation",
                "established rough texture with tactile grain and character",
                "deep surface relief with cavities and raised formations",
                "friable crumbling surface losing structural coherence",
                "granular disaggregation, surface dissolving grain by grain",
                "total surface loss exposing weathered substrate core",
            ],
        ),
        ladder(
            "color_transformation",
            [0.5, 0.5, 0.0, 0.0, 0.0],
            0.0,
            &[
                "original material colour unaltered by environment",
                "slight warmth from initial UV mellowing",
                "noticeable colour shift, tarnish warmth or bleaching cool",
                "developed oxide and patina colour overlaying original",
                "dominant new colour from chemical transformation products",
                "mottled patchwork of multiple weathering colour zones",
                "deep complex colour from layered weathering products",
                "fully transformed, no original colour remaining",
            ],
        ),
        ladder(
            "structural_integrity",
            [0.0, 1.0, -0.5, 0.0, 0.0],
            0.0,
            &[
                "perfect structural condition, no cracks or deformation",
                "hairline surface cracks not affecting structure",
                "developed crack network with minor delamination beginning",
                "active cracking with measurable displacement at joints",
                "significant delamination, sections lifting from substrate",
                "structural weakness, load-bearing capacity compromised",
                "partial collapse, sections lost with remainder unstable",
                "fragmentary remains, structural system no longer functions",
            ],
        ),
        ladder(
            "biological_colonization",
            [0.6, 0.4, 0.0, 0.0, 0.0],
            0.0,
            &[
                "sterile surface, no biological growth present",
                "initial algal greening on damp shaded areas",
                "scattered lichen pioneer colonies establishing",
                "developed lichen communities with multiple species",
                "moss cushions and higher plant colonization in crevices",
                "significant vegetation cover obscuring substrate",
                "dense biological mat, surface largely hidden",
                "full ecological integration, material becoming habitat",
            ],
        ),
        ladder(
            "light_interaction",
            [0.5, 0.3, 0.0, -0.2, 0.0],
            0.2,
            &[
                "original reflectance, specular or diffuse as manufactured",
                "slight gloss reduction from surface micro-roughening",
                "matte surface where weathering products scatter light",
                "complex scatter from mixed rough and smooth zones",
                "deep shadow in erosion cavities and crack networks",
                "subsurface glow through translucent patina layers",
                "iridescent interference colours from thin oxide films",
                "light-absorbing friable surface with minimal reflectance",
            ],
        ),
        ladder(
            "temporal_evidence",
            [1.0, 0.0, 0.0, 0.0, 0.0],
            0.0,
            &[
                "no visible time markers, could have been made yesterday",
                "subtle signs of age, gentle wear at contact points",
                "clear evidence of years of exposure and use",
                "decades of accumulated environmental interaction visible",
                "multi-generational time depth with repair evidence",
                "century-scale weathering with multiple intervention layers",
                "deep archaeological time, centuries of exposure",
                "geological time markers, millennia of environmental action",
            ],
        ),
    ];

    Morphospace::new(registry, presets, attractors, ladders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_load() {
        let engine = weathering().unwrap();
        assert_eq!(engine.registry().list().len(), 8);
        assert_eq!(engine.presets().len(), 5);
        assert_eq!(engine.attractors().len(), 7);
        assert_eq!(engine.summary().periods, vec![16, 18, 20, 24, 30]);
    }

    #[test]
    fn test_basin_shares_preserved_verbatim() {
        let engine = weathering().unwrap();
        let shares: Vec<Option<f64>> = engine
            .attractors()
            .iter()
            .map(|a| a.basin_share)
            .collect();
        assert_eq!(
            shares,
            vec![
                Some(0.116),
                Some(0.084),
                Some(0.074),
                Some(0.024),
                Some(0.040),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_rust_intent_resolves_to_deep_rust() {
        let engine = weathering().unwrap();
        let result = engine.classify("rust-streaked iron beam").unwrap();
        assert_eq!(result.state_id, "deep_rust");
        assert!(result.score > 0.0);
        assert!(!result.fallback);
    }

    #[test]
    fn test_unmatched_intent_falls_back_to_gentle_patina() {
        let engine = weathering().unwrap();
        let result = engine.classify("zzz qqq xyzzy").unwrap();
        assert_eq!(result.state_id, "gentle_patina");
        assert!(result.fallback);
    }
}
