//! Query-string models for the chart endpoints

use serde::Deserialize;
use validator::Validate;

use maintenance_core::constants::{
    PREVIEW_ROWS_DEFAULT, PREVIEW_ROWS_MAX, PREVIEW_ROWS_MIN, WINDOW_DEFAULT, WINDOW_MAX,
    WINDOW_MIN,
};
use maintenance_core::Parameter;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PreviewQuery {
    #[validate(range(min = PREVIEW_ROWS_MIN, max = PREVIEW_ROWS_MAX))]
    pub rows: Option<usize>,
}

impl PreviewQuery {
    pub fn rows(&self) -> usize {
        self.rows.unwrap_or(PREVIEW_ROWS_DEFAULT)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrendQuery {
    pub param: Option<Parameter>,
}

impl TrendQuery {
    pub fn parameter(&self) -> Parameter {
        self.param.unwrap_or(Parameter::CHARTABLE[0])
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct MovingAverageQuery {
    pub param: Option<Parameter>,

    #[validate(range(min = WINDOW_MIN, max = WINDOW_MAX))]
    pub window: Option<usize>,
}

impl MovingAverageQuery {
    pub fn parameter(&self) -> Parameter {
        self.param.unwrap_or(Parameter::CHARTABLE[0])
    }

    pub fn window(&self) -> usize {
        self.window.unwrap_or(WINDOW_DEFAULT)
    }
}
