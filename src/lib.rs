pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{document::DocumentView, http::HttpAnalysisClient, terminal::TerminalView};
pub use crate::core::controller::FormController;
pub use crate::domain::model::{AnalysisContent, AnalysisRequest, AnalysisResult, SubmitOutcome};
pub use crate::domain::ports::{AnalysisService, ConfigProvider, View};
pub use crate::utils::error::{AnalysisError, AnalyzerError, Result};
