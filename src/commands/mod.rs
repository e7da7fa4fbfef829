//! Command implementations

pub mod convert;
pub mod simple;
pub mod survey;

pub use convert::{ConvertResult, convert_value};
pub use simple::{SimpleCommand, run_session, run_simple};
pub use survey::{HistogramBin, SurveyResult, WidthSurvey, run_survey};
