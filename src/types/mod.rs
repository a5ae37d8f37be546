//! Public types for the Bevprice API.

mod field;
mod prediction;
mod record;
mod stage;
mod vector;

pub use field::Field;
pub use prediction::{PredictionResult, PriceCategory};
pub use record::{Answer, AnswerSource, InputRecord, RawAnswers};
pub use stage::PipelineStage;
pub use vector::FeatureVector;
