//! Morphospace - Parametric Aesthetic State Engine
//!
//! Deterministic engine over bounded 5D parameter spaces: canonical state
//! registries, keyword intent classification, linear trajectories, periodic
//! oscillations, attractor-based prompt composition, and graded vocabulary
//! extraction. Ships two domain instantiations (weathering, landform) over
//! one generic core.

pub mod attractor;
pub mod classify;
pub mod cli;
pub mod domains;
pub mod engine;
pub mod error;
pub mod oscillate;
pub mod point;
pub mod registry;
pub mod trajectory;
pub mod vocab;

// Re-export main types for convenience
pub use engine::{DistanceReport, DomainSummary, Morphospace};
pub use error::{EngineError, Result};
pub use oscillate::Waveform;
pub use point::{ParameterPoint, DIM};
pub use registry::{CanonicalState, StateRegistry, VisualClass};
