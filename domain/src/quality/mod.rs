//! Prompt quality: sub-score evaluation and domain-weighted scoring

pub mod evaluator;
pub mod score;
pub mod scorer;

pub use evaluator::{HeuristicEvaluator, PromptEvaluator};
pub use score::{QualityScore, SubScores};
pub use scorer::QualityScorer;
