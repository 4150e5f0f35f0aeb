//! The two domain instantiations of the morphospace engine.
//!
//! Each submodule is pure static data: canonical states with hand-authored
//! coordinates, rhythmic presets, attractor presets with curated basin
//! shares, and graded vocabulary ladders. Instantiating the same engine
//! twice over different vocabularies is what proves the core generic.

use crate::attractor::{AttractorClass, AttractorPreset};
use crate::error::Result;
use crate::point::{ParameterPoint, DIM};
use crate::registry::{CanonicalState, VisualClass, VocabularyBundle};
use crate::vocab::VocabularyLadder;

pub mod landform;
pub mod weathering;

pub use landform::landform;
pub use weathering::weathering;

fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn state(
    id: &str,
    label: &str,
    coords: [f64; DIM],
    visual: VisualClass,
    keywords: &[&str],
    descriptors: &[&str],
    optical: &[&str],
    colors: &[&str],
) -> Result<CanonicalState> {
    Ok(CanonicalState {
        id: id.to_string(),
        label: label.to_string(),
        point: ParameterPoint::new(coords)?,
        visual,
        vocabulary: VocabularyBundle {
            keywords: svec(keywords),
            descriptors: svec(descriptors),
            optical: svec(optical),
            colors: svec(colors),
        },
    })
}

#[allow(clippy::too_many_arguments)]
fn attractor(
    id: &str,
    name: &str,
    basin_share: Option<f64>,
    class: AttractorClass,
    source_domains: &[&str],
    description: &str,
    anchor: [f64; DIM],
    hub_period: Option<usize>,
) -> Result<AttractorPreset> {
    Ok(AttractorPreset {
        id: id.to_string(),
        name: name.to_string(),
        basin_share,
        class,
        source_domains: svec(source_domains),
        description: description.to_string(),
        anchor: ParameterPoint::new(anchor)?,
        hub_period,
    })
}

fn ladder(category: &str, axis_weights: [f64; DIM], bias: f64, terms: &[&str]) -> VocabularyLadder {
    VocabularyLadder {
        category: category.to_string(),
        axis_weights,
        bias,
        terms: svec(terms),
    }
}
