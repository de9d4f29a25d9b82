use crate::core::render::escape_html;
use crate::domain::model::AnalysisContent;
use crate::domain::ports::View;
use crate::utils::error::Result;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const FORM_ID: &str = "analyze-form";
pub const TOPIC_ID: &str = "topic";
pub const STATUS_ID: &str = "status";
pub const RESULTS_ID: &str = "results";
pub const SUMMARY_ID: &str = "summary";
pub const ANALYSIS_ID: &str = "analysis";
pub const SOURCES_ID: &str = "sources";

/// Observable state of the analysis page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub status_hidden: bool,
    pub results_hidden: bool,
    pub summary: String,
    pub analysis: AnalysisContent,
    pub analysis_html: String,
    pub sources: Vec<String>,
    /// Notifications shown to the user, oldest first.
    pub alerts: Vec<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            status_hidden: true,
            results_hidden: true,
            summary: String::new(),
            analysis: AnalysisContent::Placeholder(String::new()),
            analysis_html: String::new(),
            sources: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl PageState {
    /// Text of each analysis block, without markup.
    pub fn analysis_text(&self) -> Vec<String> {
        match &self.analysis {
            AnalysisContent::Placeholder(text) if text.is_empty() => Vec::new(),
            AnalysisContent::Placeholder(text) => vec![text.clone()],
            AnalysisContent::Paragraphs(paragraphs) => {
                paragraphs.iter().map(|p| p.text()).collect()
            }
        }
    }

    pub fn to_html(&self) -> String {
        let hidden = |h: bool| if h { " hidden" } else { "" };
        let sources: String = self
            .sources
            .iter()
            .map(|s| format!("<li>{}</li>", escape_html(s)))
            .collect();

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head><meta charset=\"utf-8\"><title>Topic analysis</title></head>\n\
             <body>\n\
             <form id=\"{form}\"><input id=\"{topic}\" type=\"text\" name=\"topic\"><button type=\"submit\">Analyze</button></form>\n\
             <div id=\"{status}\"{status_hidden}>Analyzing...</div>\n\
             <section id=\"{results}\"{results_hidden}>\n\
             <p id=\"{summary}\">{summary_text}</p>\n\
             <div id=\"{analysis}\">{analysis_html}</div>\n\
             <ul id=\"{sources_id}\">{sources}</ul>\n\
             </section>\n\
             </body>\n\
             </html>\n",
            form = FORM_ID,
            topic = TOPIC_ID,
            status = STATUS_ID,
            status_hidden = hidden(self.status_hidden),
            results = RESULTS_ID,
            results_hidden = hidden(self.results_hidden),
            summary = SUMMARY_ID,
            summary_text = escape_html(&self.summary),
            analysis = ANALYSIS_ID,
            analysis_html = self.analysis_html,
            sources_id = SOURCES_ID,
            sources = sources,
        )
    }
}

/// In-memory page that records everything the controller writes.
#[derive(Debug, Default)]
pub struct DocumentView {
    state: Mutex<PageState>,
}

impl DocumentView {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PageState {
        self.state().clone()
    }

    pub async fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.snapshot().to_html();
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&path, html).await?;
        tracing::debug!("Page written to {}", path.as_ref().display());
        Ok(())
    }
}

impl View for DocumentView {
    fn set_status_visible(&self, visible: bool) {
        self.state().status_hidden = !visible;
    }

    fn set_results_visible(&self, visible: bool) {
        self.state().results_hidden = !visible;
    }

    fn set_summary(&self, text: &str) {
        self.state().summary = text.to_string();
    }

    fn set_analysis(&self, content: &AnalysisContent) {
        let mut state = self.state();
        state.analysis_html = content.to_html();
        state.analysis = content.clone();
    }

    fn clear_sources(&self) {
        self.state().sources.clear();
    }

    fn append_source(&self, text: &str) {
        self.state().sources.push(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }
}
