//! Intent classification: free text to the closest canonical state.
//!
//! Classification is a deterministic best-effort heuristic, not a provably
//! correct algorithm. The scoring policy is pluggable behind
//! [`ScoringStrategy`] so alternative matchers can be swapped in without
//! touching the rest of the engine.

use crate::error::{EngineError, Result};
use crate::registry::{CanonicalState, StateRegistry};
use serde::{Deserialize, Serialize};

/// Score assigned by a strategy to one candidate state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateScore {
    /// Total score; higher wins.
    pub value: f64,
    /// The keywords that contributed, with their individual weights.
    pub matched: Vec<(String, f64)>,
}

/// A pluggable text-to-state scoring policy.
///
/// Implementations must be deterministic and total-ordered: the same text
/// and state must produce the same score on every call, so ties always
/// resolve the same way.
pub trait ScoringStrategy: Send + Sync {
    /// Score how well `text` matches `state`.
    fn score(&self, text: &str, state: &CanonicalState) -> StateScore;
}

/// Default strategy: case-insensitive substring matching over the state's
/// keywords and label words, with longer keywords weighted higher because
/// they are more specific.
#[derive(Clone, Debug, Default)]
pub struct KeywordOverlapScorer;

impl KeywordOverlapScorer {
    fn keyword_weight(keyword: &str) -> f64 {
        1.0 + 0.05 * keyword.chars().count() as f64
    }
}

impl ScoringStrategy for KeywordOverlapScorer {
    fn score(&self, text: &str, state: &CanonicalState) -> StateScore {
        let text = text.to_lowercase();
        let mut score = StateScore::default();

        for keyword in &state.vocabulary.keywords {
            let needle = keyword.to_lowercase();
            if text.contains(&needle) {
                let w = Self::keyword_weight(&needle);
                score.value += w;
                score.matched.push((keyword.clone(), w));
            }
        }
        // Label words count too, at half weight: "Deep Rust" should pull
        // toward deep_rust even if the keyword table misses a synonym.
        for word in state.label.to_lowercase().split_whitespace() {
            if text.contains(word) {
                let w = 0.5 * Self::keyword_weight(word);
                score.value += w;
                score.matched.push((word.to_string(), w));
            }
        }
        score
    }
}

/// Result of classifying one piece of intent text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Classification {
    /// Identifier of the winning state.
    pub state_id: String,
    /// Label of the winning state.
    pub label: String,
    /// Winning score (0.0 when the fallback fired).
    pub score: f64,
    /// Keywords that matched the winning state.
    pub matched: Vec<(String, f64)>,
    /// True when no keyword matched any state and the registry default
    /// was used. This is a designed fallback, not an error.
    pub fallback: bool,
    /// Per-state score breakdown, in registry declaration order.
    pub breakdown: Vec<(String, f64)>,
}

/// Maps free text onto the registry entry it most resembles.
pub struct IntentClassifier {
    scorer: Box<dyn ScoringStrategy>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(Box::new(KeywordOverlapScorer))
    }
}

impl IntentClassifier {
    /// Create a classifier with a custom scoring strategy.
    pub fn new(scorer: Box<dyn ScoringStrategy>) -> Self {
        IntentClassifier { scorer }
    }

    /// Classify intent text against a registry.
    ///
    /// Never fails for well-formed non-empty text: when nothing matches,
    /// the registry's designated default state is returned with
    /// `fallback == true`. Empty or whitespace-only input fails with
    /// `InvalidInput`.
    ///
    /// Ties break by declaration order (first-declared wins), so repeated
    /// calls are bit-identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphospace::domains;
    ///
    /// let engine = domains::weathering().unwrap();
    /// let result = engine.classify("rust-streaked iron beam").unwrap();
    /// assert_eq!(result.state_id, "deep_rust");
    /// assert!(!result.fallback);
    /// ```
    pub fn classify(&self, registry: &StateRegistry, text: &str) -> Result<Classification> {
        if text.trim().is_empty() {
            return Err(EngineError::InvalidInput {
                detail: "classification text is empty or whitespace-only".to_string(),
            });
        }

        let mut breakdown = Vec::with_capacity(registry.list().len());
        let mut best: Option<(usize, StateScore)> = None;
        for (i, state) in registry.list().iter().enumerate() {
            let score = self.scorer.score(text, state);
            breakdown.push((state.id.clone(), score.value));
            // Strictly-greater comparison keeps the earlier-declared state
            // on ties.
            match &best {
                Some((_, b)) if score.value <= b.value => {}
                _ if score.value > 0.0 => best = Some((i, score)),
                _ => {}
            }
        }

        let classification = match best {
            Some((i, score)) => {
                let state = &registry.list()[i];
                Classification {
                    state_id: state.id.clone(),
                    label: state.label.clone(),
                    score: score.value,
                    matched: score.matched,
                    fallback: false,
                    breakdown,
                }
            }
            None => {
                let state = registry.default_state();
                Classification {
                    state_id: state.id.clone(),
                    label: state.label.clone(),
                    score: 0.0,
                    matched: Vec::new(),
                    fallback: true,
                    breakdown,
                }
            }
        };
        Ok(classification)
    }
}
