use crate::domain::model::{AnalysisContent, AnalysisResult};
use crate::utils::error::AnalysisError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// The remote collaborator that turns a topic into an analysis.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, topic: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Handles to the page elements the controller drives.
///
/// Implementations use interior mutability; the controller is the only writer.
pub trait View: Send + Sync {
    fn set_status_visible(&self, visible: bool);
    fn set_results_visible(&self, visible: bool);
    fn set_summary(&self, text: &str);
    fn set_analysis(&self, content: &AnalysisContent);
    fn clear_sources(&self);
    fn append_source(&self, text: &str);
    /// Blocking user-facing notification.
    fn alert(&self, message: &str);

    /// Reset to the loading state, clearing any previous results.
    fn reset(&self) {
        self.set_status_visible(true);
        self.set_results_visible(false);
        self.set_summary("");
        self.set_analysis(&AnalysisContent::Placeholder(String::new()));
        self.clear_sources();
    }
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> HashMap<String, String>;
    fn html_output_path(&self) -> Option<&str>;
}
