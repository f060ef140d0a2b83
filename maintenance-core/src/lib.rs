//! Engine Maintenance Core
//!
//! Telemetry store, feature schema, predictor backends, safety evaluator
//! and chart-data builders behind the maintenance dashboard.
//!
//! Nothing here is global: the log and the predictor are loaded once at
//! startup and handed to a [`Dashboard`](logic::dashboard::Dashboard).

pub mod constants;
pub mod logic;

pub use logic::dashboard::{Assessment, Dashboard};
pub use logic::model::{load_predictor, Predictor};
pub use logic::safety::{SafetyEvaluator, SafetyRange, Verdict};
pub use logic::telemetry::{HistoricalLog, Parameter, Reading, ReadingInput};
