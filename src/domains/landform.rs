//! Landform domain: terrain morphology aesthetics.
//!
//! Eight canonical landform types in a 5D morphospace grounded in
//! geomorphology. Axes:
//!
//! - `relief_intensity`: dead flat (0) to extreme vertical relief (1)
//! - `erosion_maturity`: freshly formed (0) to worn to base level (1)
//! - `process_energy`: quiescent (0) to violent constructive/erosive (1)
//! - `structural_order`: chaotic (0) to strongly organized geometry (1)
//! - `water_presence`: hyper-arid (0) to water-dominated (1)
//!
//! Preset periods mirror the weathering catalog (16, 18, 20, 24, 30) so
//! the two domains can beat against each other in multi-domain
//! composition, with 30 again the designated synchronization hub.

use super::{attractor, ladder, state, svec};
use crate::attractor::AttractorClass;
use crate::engine::Morphospace;
use crate::error::Result;
use crate::oscillate::{RhythmicPreset, Waveform};
use crate::registry::{StateRegistry, VisualClass};

/// Build the landform engine.
///
/// # Examples
///
/// ```
/// use morphospace::domains;
///
/// let engine = domains::landform().unwrap();
/// assert_eq!(engine.domain(), "landform");
/// assert!(engine.registry().get("volcanic_cone").is_ok());
/// ```
pub fn landform() -> Result<Morphospace> {
    let states = vec![
        state(
            "alluvial_plain",
            "Alluvial Plain",
            [0.10, 0.85, 0.15, 0.40, 0.75],
            VisualClass::Mellowed,
            &[
                "floodplain", "alluvial", "plain", "meander", "silt", "levee", "delta",
                "lowland",
            ],
            &[
                "broad flat depositional surface built from layered river silt",
                "meander scars and oxbow lakes recording abandoned channels",
                "subtle natural levees raised along active watercourses",
                "fine sediment fans spreading at tributary mouths",
                "seasonal flood staining marking high-water boundaries",
            ],
            &[
                "finish: smooth_sediment",
                "scatter: broad_diffuse",
                "transparency: opaque_soil",
            ],
            &[
                "silt brown",
                "floodwater ochre",
                "reed green",
                "wet clay grey",
            ],
        )?,
        state(
            "volcanic_cone",
            "Volcanic Cone",
            [0.90, 0.10, 0.95, 0.80, 0.10],
            VisualClass::Bloom,
            &[
                "volcano", "volcanic", "cone", "lava", "cinder", "eruption", "basalt",
                "stratovolcano", "crater",
            ],
            &[
                "symmetric constructional cone built by successive eruptions",
                "fresh lava flows lobed and unweathered on steep flanks",
                "radial drainage barely incised into young volcanic slopes",
                "cinder and ash layering exposed at the crater rim",
                "steam and fumarole staining streaking the summit",
            ],
            &[
                "finish: fresh_volcanic",
                "scatter: sharp_blocky",
                "transparency: opaque_rock",
            ],
            &[
                "basalt black",
                "cinder red",
                "ash grey",
                "sulfur yellow",
            ],
        )?,
        state(
            "canyon_incision",
            "Canyon Incision",
            [0.80, 0.45, 0.70, 0.60, 0.60],
            VisualClass::Sculpted,
            &[
                "canyon", "gorge", "incision", "entrenched", "ravine", "slot canyon",
                "cliff walls",
            ],
            &[
                "deep river-cut gorge exposing layered strata in vertical walls",
                "entrenched meanders locked into bedrock by sustained downcutting",
                "differential erosion picking out hard ledges and soft recesses",
                "talus aprons accumulating at the base of retreating walls",
                "narrow inner slot polished by sediment-charged floodwater",
            ],
            &[
                "finish: stratified_rock",
                "scatter: deep_shadow_wall",
                "transparency: opaque_rock",
            ],
            &[
                "strata red-brown",
                "shadow purple",
                "river jade",
                "talus buff",
            ],
        )?,
        state(
            "karst_towers",
            "Karst Towers",
            [0.65, 0.70, 0.35, 0.30, 0.55],
            VisualClass::Fractured,
            &[
                "karst", "sinkhole", "tower", "pinnacle", "dissolution", "cave", "cockpit",
                "limestone spires",
            ],
            &[
                "isolated limestone towers left standing by dissolution lowering",
                "fluted pinnacle surfaces etched along joint networks",
                "sinkhole fields pocking the intervening lowland",
                "cave mouths opening at multiple levels in tower flanks",
                "vegetation clinging to ledges on near-vertical dissolved rock",
            ],
            &[
                "finish: etched_limestone",
                "scatter: fluted_relief",
                "transparency: opaque_rock",
            ],
            &[
                "limestone pale grey",
                "jungle green",
                "cave shadow black",
                "mineral streak white",
            ],
        )?,
        state(
            "dune_field",
            "Dune Field",
            [0.35, 0.25, 0.55, 0.75, 0.05],
            VisualClass::Bloom,
            &[
                "dune", "sand", "erg", "barchan", "ripple", "desert", "aeolian",
                "sand sea",
            ],
            &[
                "repeating crescentic dunes migrating under a constant wind",
                "knife-sharp crestlines dividing slip face from windward ramp",
                "surface ripples overlaid on the larger dune wavelength",
                "unblemished sand surfaces rewritten by every storm",
                "interdune corridors floored with deflation lag gravel",
            ],
            &[
                "finish: loose_granular",
                "scatter: wind_rippled",
                "transparency: opaque_sand",
            ],
            &[
                "dune gold",
                "shadow apricot",
                "lag gravel grey",
                "dawn rose",
            ],
        )?,
        state(
            "coastal_cliff",
            "Coastal Cliff",
            [0.70, 0.50, 0.80, 0.45, 0.95],
            VisualClass::Fractured,
            &[
                "cliff", "sea stack", "headland", "wave-cut", "coastal", "shoreline",
                "surf", "undercut",
            ],
            &[
                "wave-undercut cliff face retreating along joint-controlled failures",
                "sea stacks and arches isolated from the retreating headland",
                "wave-cut platform exposed at low tide below the cliff foot",
                "fresh rockfall scars pale against weathered cliff surfaces",
                "spray-zone biological banding striping the lower face",
            ],
            &[
                "finish: fractured_rock",
                "scatter: spray_haze",
                "transparency: opaque_rock",
            ],
            &[
                "surf white",
                "wet rock charcoal",
                "tidal band olive",
                "fresh scar cream",
            ],
        )?,
        state(
            "peneplain",
            "Peneplain",
            [0.05, 0.98, 0.05, 0.25, 0.35],
            VisualClass::Relict,
            &[
                "peneplain", "base level", "worn down", "ancient surface", "craton",
                "low rolling", "erosional remnant",
            ],
            &[
                "vast low-relief surface worn down across every rock type",
                "residual hills rising as isolated remnants of former uplands",
                "deeply weathered regolith mantling the ancient bedrock",
                "sluggish misfit streams wandering across the levelled surface",
                "geological time made visible as near-total erasure of relief",
            ],
            &[
                "finish: deep_regolith",
                "scatter: haze_distance",
                "transparency: opaque_soil",
            ],
            &[
                "laterite rust",
                "regolith tan",
                "savanna straw",
                "distant haze blue",
            ],
        )?,
        state(
            "fresh_fault_scarp",
            "Fresh Fault Scarp",
            [0.60, 0.02, 0.85, 0.90, 0.10],
            VisualClass::Pristine,
            &[
                "fault", "scarp", "rupture", "offset", "earthquake", "fresh break",
                "displacement",
            ],
            &[
                "crisp unweathered scarp face exposed by recent ground rupture",
                "offset stream channels and fence lines recording displacement",
                "slickensided fault surface polished by coseismic slip",
                "sharp scarp crest not yet rounded by hillslope creep",
                "raw substrate colour contrasting with the weathered land surface",
            ],
            &[
                "finish: slickensided",
                "scatter: sharp_planar",
                "transparency: opaque_rock",
            ],
            &[
                "raw substrate buff",
                "slickenside sheen grey",
                "rupture shadow umber",
                "unweathered white",
            ],
        )?,
    ];

    let registry = StateRegistry::new(
        "landform",
        [
            "relief_intensity",
            "erosion_maturity",
            "process_energy",
            "structural_order",
            "water_presence",
        ],
        states,
        "alluvial_plain",
    )?;

    let presets = vec![
        RhythmicPreset {
            id: "scarp_decay".to_string(),
            period: 16,
            state_a: "fresh_fault_scarp".to_string(),
            state_b: "peneplain".to_string(),
            waveform: Waveform::Triangular,
            shared_with: vec![],
            description: "Fresh tectonic rupture degrading toward the ultimate \
                erosional surface and rejuvenating again. Unique period 16 for \
                novel beat frequencies."
                .to_string(),
        },
        RhythmicPreset {
            id: "tidal_cut".to_string(),
            period: 18,
            state_a: "coastal_cliff".to_string(),
            state_b: "alluvial_plain".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["nuclear", "catastrophe", "diatom", "splash"]),
            description: "Cliffed coast trading material with the depositional \
                lowland behind it, the oscillation between retreat and supply."
                .to_string(),
        },
        RhythmicPreset {
            id: "dune_march".to_string(),
            period: 20,
            state_a: "dune_field".to_string(),
            state_b: "alluvial_plain".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["heraldic", "surface_design", "splash"]),
            description: "Migrating sand sea advancing over and withdrawing from \
                the wet lowland, arid and fluvial worlds alternating."
                .to_string(),
        },
        RhythmicPreset {
            id: "karst_dissolution".to_string(),
            period: 24,
            state_a: "karst_towers".to_string(),
            state_b: "peneplain".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&["catastrophe", "diatom"]),
            description: "Tower karst dissolving down toward the regional levelled \
                surface, dissolution relief against deep time."
                .to_string(),
        },
        RhythmicPreset {
            id: "tectonic_pulse".to_string(),
            period: 30,
            state_a: "alluvial_plain".to_string(),
            state_b: "volcanic_cone".to_string(),
            waveform: Waveform::Sinusoidal,
            shared_with: svec(&[
                "microscopy",
                "diatom",
                "heraldic",
                "surface_design",
                "splash",
            ]),
            description: "Quiet depositional lowland interrupted by constructional \
                volcanism and subsiding back, the full energy gradient of the \
                domain. Synchronization hub period 30."
                .to_string(),
        },
    ];

    let attractors = vec![
        attractor(
            "period_30",
            "Period 30: Universal Sync",
            Some(0.102),
            AttractorClass::LcmSync,
            &["microscopy", "diatom", "heraldic", "surface_design", "splash", "landform"],
            "Dominant hub synchronization. The tectonic_pulse preset locks directly \
             into this attractor: a mid-energy terrain where deposition and \
             construction balance.",
            [0.45, 0.55, 0.40, 0.50, 0.45],
            Some(30),
        )?,
        attractor(
            "period_19",
            "Period 19: Gap Flow",
            Some(0.066),
            AttractorClass::Novel,
            &["microscopy", "nuclear", "catastrophe", "diatom"],
            "Novel gap-filler between periods 18 and 20. A landscape poised at the \
             threshold of incision, where a levelled surface first feels renewed \
             uplift.",
            [0.55, 0.35, 0.60, 0.55, 0.40],
            Some(19),
        )?,
        attractor(
            "period_60",
            "Period 60: Harmonic Hub",
            Some(0.035),
            AttractorClass::Harmonic,
            &["microscopy", "nuclear", "catastrophe", "diatom"],
            "Long-cycle harmonic hub. The oscillation tours the full landform \
             repertoire over the long cycle, every canonical type appearing in turn.",
            [0.50, 0.50, 0.50, 0.50, 0.50],
            Some(60),
        )?,
        attractor(
            "base_level_rest",
            "Base Level Rest",
            None,
            AttractorClass::Curated,
            &["landform"],
            "Curated end state: the landscape at rest against base level, relief \
             nearly erased, rivers graded, time measured in craton-scale stillness.",
            [0.08, 0.90, 0.10, 0.35, 0.60],
            None,
        )?,
        attractor(
            "knickpoint_edge",
            "Knickpoint Edge",
            None,
            AttractorClass::Curated,
            &["landform"],
            "Curated threshold state: the migrating knickpoint where a rejuvenated \
             river meets the old graded profile, the most consequential boundary in \
             an eroding landscape.",
            [0.75, 0.40, 0.75, 0.55, 0.65],
            None,
        )?,
    ];

    let ladders = vec![
        ladder(
            "relief_profile",
            [1.0, 0.0, 0.0, 0.0, 0.0],
            0.0,
            &[
                "dead-flat depositional surface meeting the sky at a level horizon",
                "gentle undulation with long low swells of relief",
                "rolling terrain with distinct but subdued hills",
                "dissected upland with clear valley-and-ridge alternation",
                "bold relief with steep slopes dominating the scene",
                "deep gorges and sharp crests in high-energy topography",
                "near-vertical walls and towers commanding the composition",
                "extreme alpine relief with knife-edge ridges and free faces",
            ],
        ),
        ladder(
            "erosion_stage",
            [0.0, 1.0, 0.0, 0.0, 0.0],
            0.0,
            &[
                "raw constructional surface untouched by erosion",
                "first rills and gullies notching the new surface",
                "youthful drainage actively incising sharp valleys",
                "integrated valley network with graded tributaries",
                "mature topography with slopes in equilibrium",
                "subdued relief with thick weathered mantles",
                "old-age surface with isolated residual hills",
                "terminal peneplain worn across every structure",
            ],
        ),
        ladder(
            "process_signature",
            [0.0, 0.0, 1.0, 0.0, 0.0],
            0.0,
            &[
                "still landscape with no visible geomorphic activity",
                "slow creep and soil processes working invisibly",
                "seasonal transport leaving fresh minor deposits",
                "active channels and slopes reworking sediment visibly",
                "energetic erosion with raw scars and fresh exposure",
                "violent episodic events recorded in boulder levees and slide scars",
                "ongoing construction or destruction dominating the scene",
                "cataclysmic process energy reshaping the landscape in real time",
            ],
        ),
        ladder(
            "water_expression",
            [0.0, 0.0, 0.0, 0.0, 1.0],
            0.0,
            &[
                "hyper-arid scene with no trace of surface water",
                "dry channels recording rare ephemeral flow",
                "scattered waterholes and seasonal damp ground",
                "modest perennial stream threading the terrain",
                "well-watered valley with active channel and wet margins",
                "broad river dominating the valley floor",
                "wetland mosaic of channels, lakes, and saturated ground",
                "water-dominated scene of open water and drowned topography",
            ],
        ),
    ];

    Morphospace::new(registry, presets, attractors, ladders)
}
