//! CLI interface for Morphospace
//!
//! Provides command-line interface for:
//! - Listing canonical states, rhythmic presets, and attractor presets
//! - Classifying free-text intent onto canonical states
//! - Measuring distances and generating trajectories
//! - Running preset and custom oscillations
//! - Composing attractor prompt packages
//! - Extracting graded vocabulary for arbitrary points
//!
//! Every command prints one JSON document on stdout so output can be piped
//! into downstream tooling.

use crate::attractor::ComposeMode;
use crate::domains;
use crate::engine::Morphospace;
use crate::error::{EngineError, Result};
use crate::oscillate::Waveform;
use crate::point::ParameterPoint;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "morphospace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parametric aesthetic state engine over bounded 5D morphospaces")]
#[command(
    long_about = "Morphospace - a deterministic engine over bounded 5D aesthetic parameter spaces\n\n\
    Each domain defines canonical states at hand-authored coordinates, curated periodic\n\
    oscillation presets, and attractor presets discovered in multi-domain rhythm studies.\n\
    The engine classifies free-text intent onto states, interpolates trajectories between\n\
    them, generates waveform-driven oscillation sequences, and composes prompt packages\n\
    with graded visual vocabulary.\n\n\
    Key Features:\n\
    • Two built-in domains (weathering, landform) over one generic core\n\
    • Deterministic output: same input, same result, no hidden state\n\
    • Exact endpoint reproduction at phase 0 and the half period\n\
    • Curated attractor basin shares preserved from the source studies\n\n\
    Examples:\n\
      morphospace classify \"rust-streaked iron beam\"\n\
      morphospace --domain landform preset tectonic_pulse\n\
      morphospace compose period_30 --mode sequence"
)]
pub struct Cli {
    /// Domain instantiation to operate on
    #[arg(long, global = true, value_enum, default_value = "weathering")]
    pub domain: Domain,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Domain {
    Weathering,
    Landform,
}

impl Domain {
    fn build(self) -> Result<Morphospace> {
        match self {
            Domain::Weathering => domains::weathering(),
            Domain::Landform => domains::landform(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the domain's canonical states with coordinates and vocabulary
    States,

    /// List the domain's rhythmic oscillation presets
    Presets,

    /// List the domain's attractor presets with basin shares
    Attractors,

    /// Show static metadata about the domain
    Info,

    /// Classify free-text intent onto a canonical state
    #[command(
        long_about = "Classify free-text intent onto a canonical state\n\n\
        Scores every canonical state by keyword and label overlap with the input text\n\
        and reports the best match with its score breakdown. Text that matches nothing\n\
        falls back to the domain's default state with the fallback flag set.\n\n\
        Example:\n\
          morphospace classify \"rust-streaked iron beam\"\n\
          morphospace --domain landform classify \"black basalt cone\""
    )]
    Classify {
        /// Free-text description of the desired aesthetic
        text: String,
    },

    /// Distance between two canonical states with per-axis breakdown
    Distance {
        /// First state identifier
        state_a: String,
        /// Second state identifier
        state_b: String,
    },

    /// Linear trajectory between two canonical states
    Trajectory {
        /// Starting state identifier
        from: String,
        /// Ending state identifier
        to: String,
        /// Number of samples including both endpoints (minimum 2)
        #[arg(short, long, default_value_t = 10)]
        steps: usize,
    },

    /// Generate one full cycle of a named rhythmic preset
    Preset {
        /// Preset identifier
        id: String,
    },

    /// Generate a custom oscillation between two canonical states
    #[command(
        long_about = "Generate a custom oscillation between two canonical states\n\n\
        Samples period*cycles steps of the chosen waveform between the two endpoint\n\
        states. Phase offset 0.0 starts at the A pole, 0.5 at the B pole.\n\n\
        Example:\n\
          morphospace oscillate fresh_pristine deep_rust --period 12 --waveform triangular\n\
          morphospace oscillate gentle_patina total_ruin -p 30 -c 2 --phase-offset 0.25"
    )]
    Oscillate {
        /// A-pole state identifier
        state_a: String,
        /// B-pole state identifier
        state_b: String,
        /// Steps per cycle
        #[arg(short, long, default_value_t = 16)]
        period: usize,
        /// Waveform shape: sinusoidal, triangular, or square
        #[arg(short, long, default_value = "sinusoidal")]
        waveform: String,
        /// Number of full cycles to sample
        #[arg(short, long, default_value_t = 1)]
        cycles: usize,
        /// Starting phase in [0, 1)
        #[arg(long, default_value_t = 0.0)]
        phase_offset: f64,
    },

    /// Compose a prompt package from an attractor preset
    #[command(
        long_about = "Compose a prompt package from an attractor preset\n\n\
        Modes:\n\
        • composite: single blended prompt at the attractor anchor\n\
        • split: before/after pair sampled around a transition step\n\
        • sequence: keyframe series synchronized against the attractor's hub period\n\n\
        Example:\n\
          morphospace compose period_30 --mode composite\n\
          morphospace compose period_60 --mode sequence --keyframes 6\n\
          morphospace compose bifurcation_edge --mode split --transition 12"
    )]
    Compose {
        /// Attractor preset identifier
        id: String,
        /// Composition mode: composite, split, or sequence
        #[arg(short, long, default_value = "composite")]
        mode: String,
        /// Transition step for split mode
        #[arg(long)]
        transition: Option<usize>,
        /// Keyframe count for sequence mode
        #[arg(long)]
        keyframes: Option<usize>,
    },

    /// Extract graded vocabulary for an arbitrary in-range point
    Vocab {
        /// Five coordinates in [0, 1], in the domain's axis order
        #[arg(num_args = 5, value_name = "COORD")]
        coords: Vec<f64>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| EngineError::InvalidArgument {
            what: "output",
            detail: format!("failed to render JSON: {}", e),
        })?;
    println!("{}", rendered);
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let engine = cli.domain.build()?;

    match cli.command {
        Commands::States => print_json(&engine.registry().list()),

        Commands::Presets => print_json(&engine.presets()),

        Commands::Attractors => print_json(&engine.attractors()),

        Commands::Info => print_json(&engine.summary()),

        Commands::Classify { text } => print_json(&engine.classify(&text)?),

        Commands::Distance { state_a, state_b } => {
            print_json(&engine.distance(&state_a, &state_b)?)
        }

        Commands::Trajectory { from, to, steps } => {
            print_json(&engine.trajectory(&from, &to, steps)?)
        }

        Commands::Preset { id } => print_json(&engine.apply_preset(&id)?),

        Commands::Oscillate {
            state_a,
            state_b,
            period,
            waveform,
            cycles,
            phase_offset,
        } => {
            let waveform: Waveform = waveform.parse()?;
            print_json(&engine.oscillate(&state_a, &state_b, period, waveform, cycles, phase_offset)?)
        }

        Commands::Compose {
            id,
            mode,
            transition,
            keyframes,
        } => {
            let mode = ComposeMode::parse(&mode, transition, keyframes)?;
            print_json(&engine.compose(&id, mode)?)
        }

        Commands::Vocab { coords } => {
            let point = ParameterPoint::from_slice(&coords)?;
            print_json(&engine.extract_vocabulary(&point)?)
        }
    }
}
