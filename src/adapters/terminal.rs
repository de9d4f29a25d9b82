use crate::adapters::document::{DocumentView, PageState};
use crate::domain::model::{AnalysisContent, Span};
use crate::domain::ports::View;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Prints results to stdout and alerts to stderr while keeping the page
/// state in an inner `DocumentView`.
#[derive(Debug, Default)]
pub struct TerminalView {
    document: DocumentView,
    color: bool,
}

impl TerminalView {
    pub fn new(color: bool) -> Self {
        Self {
            document: DocumentView::new(),
            color,
        }
    }

    pub fn document(&self) -> &DocumentView {
        &self.document
    }
}

pub fn format_page(page: &PageState, color: bool) -> String {
    let mut out = String::new();
    out.push_str("📝 Summary\n");
    out.push_str(&page.summary);
    out.push_str("\n\n🔍 Analysis\n");

    match &page.analysis {
        AnalysisContent::Placeholder(text) => {
            out.push_str(text);
            out.push('\n');
        }
        AnalysisContent::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                for span in &paragraph.spans {
                    match span {
                        Span::Text(t) => out.push_str(t),
                        Span::Strong(t) if color => {
                            out.push_str(BOLD);
                            out.push_str(t);
                            out.push_str(RESET);
                        }
                        Span::Strong(t) => out.push_str(t),
                    }
                }
                out.push_str("\n\n");
            }
        }
    }

    if !page.sources.is_empty() {
        out.push_str("\n📚 Sources\n");
        for source in &page.sources {
            out.push_str("  - ");
            out.push_str(source);
            out.push('\n');
        }
    }
    out
}

impl View for TerminalView {
    fn set_status_visible(&self, visible: bool) {
        if visible {
            eprintln!("⏳ Analyzing...");
        }
        self.document.set_status_visible(visible);
    }

    fn set_results_visible(&self, visible: bool) {
        self.document.set_results_visible(visible);
        if visible {
            println!("{}", format_page(&self.document.snapshot(), self.color));
        }
    }

    fn set_summary(&self, text: &str) {
        self.document.set_summary(text);
    }

    fn set_analysis(&self, content: &AnalysisContent) {
        self.document.set_analysis(content);
    }

    fn clear_sources(&self) {
        self.document.clear_sources();
    }

    fn append_source(&self, text: &str) {
        self.document.append_source(text);
    }

    fn alert(&self, message: &str) {
        eprintln!("❌ {}", message);
        self.document.alert(message);
    }
}
