pub mod controller;
pub mod render;

pub use crate::domain::model::{AnalysisContent, AnalysisRequest, AnalysisResult, SubmitOutcome};
pub use crate::domain::ports::{AnalysisService, ConfigProvider, View};
pub use crate::utils::error::Result;
