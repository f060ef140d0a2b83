//! Request models

pub mod assessment;
pub mod query;

pub use assessment::*;
pub use query::*;
