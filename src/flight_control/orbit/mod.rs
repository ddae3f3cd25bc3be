mod impact_predictor;

pub use impact_predictor::{ImpactPrediction, ImpactPredictor};
