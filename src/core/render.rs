use crate::domain::model::{AnalysisContent, Paragraph, Span};
use regex::Regex;
use std::sync::OnceLock;

pub const NO_SUMMARY: &str = "(no summary)";
pub const NO_ANALYSIS: &str = "(no analysis)";
pub const PARAGRAPH_CLASS: &str = "para_analysis";

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    // `.` stops at newlines, so a bold span never crosses paragraphs.
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Summary text with the placeholder applied.
pub fn summary_text(summary: Option<&str>) -> &str {
    match summary {
        Some(s) if !s.is_empty() => s,
        _ => NO_SUMMARY,
    }
}

pub fn render_analysis(text: Option<&str>) -> AnalysisContent {
    match text {
        Some(t) if !t.is_empty() => AnalysisContent::Paragraphs(parse_paragraphs(t)),
        _ => AnalysisContent::Placeholder(NO_ANALYSIS.to_string()),
    }
}

/// Splits analysis text into paragraphs, turning `**x**` into strong spans.
/// Blank lines produce no paragraph.
pub fn parse_paragraphs(text: &str) -> Vec<Paragraph> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in bold_pattern().captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(line[last..whole.start()].to_string()));
        }
        spans.push(Span::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }

    Paragraph { spans }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Paragraph {
    pub fn to_html(&self) -> String {
        let mut html = format!("<p class=\"{}\">", PARAGRAPH_CLASS);
        for span in &self.spans {
            match span {
                Span::Text(t) => html.push_str(&escape_html(t)),
                Span::Strong(t) => {
                    html.push_str("<strong>");
                    html.push_str(&escape_html(t));
                    html.push_str("</strong>");
                }
            }
        }
        html.push_str("</p>");
        html
    }

    /// Text content with markup removed.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Text(t) | Span::Strong(t) => t.as_str(),
            })
            .collect()
    }
}

impl AnalysisContent {
    /// Inner HTML for the analysis element.
    pub fn to_html(&self) -> String {
        match self {
            AnalysisContent::Placeholder(text) => escape_html(text),
            AnalysisContent::Paragraphs(paragraphs) => {
                paragraphs.iter().map(Paragraph::to_html).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_blank_lines() {
        let paragraphs = parse_paragraphs("**Bold** line one\n\nline two");

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(
            paragraphs[0].spans,
            vec![
                Span::Strong("Bold".to_string()),
                Span::Text(" line one".to_string())
            ]
        );
        assert_eq!(paragraphs[1].spans, vec![Span::Text("line two".to_string())]);
        assert_eq!(
            AnalysisContent::Paragraphs(paragraphs).to_html(),
            "<p class=\"para_analysis\"><strong>Bold</strong> line one</p>\
             <p class=\"para_analysis\">line two</p>"
        );
    }

    #[test]
    fn test_whitespace_only_lines_are_dropped() {
        let paragraphs = parse_paragraphs("first\n   \n\t\nsecond\n");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text(), "first");
        assert_eq!(paragraphs[1].text(), "second");
    }

    #[test]
    fn test_multiple_bold_spans_on_one_line() {
        let paragraphs = parse_paragraphs("**Ad hominem** and **Straw man** found");
        assert_eq!(
            paragraphs[0].spans,
            vec![
                Span::Strong("Ad hominem".to_string()),
                Span::Text(" and ".to_string()),
                Span::Strong("Straw man".to_string()),
                Span::Text(" found".to_string()),
            ]
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        let paragraphs = parse_paragraphs("**open\nclose**");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].spans, vec![Span::Text("**open".to_string())]);
        assert_eq!(paragraphs[1].spans, vec![Span::Text("close**".to_string())]);
    }

    #[test]
    fn test_markup_in_remote_text_is_escaped() {
        let content = render_analysis(Some("**<b>x</b>** <script>alert('x')</script>"));
        let html = content.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<strong>&lt;b&gt;x&lt;/b&gt;</strong>"));
    }

    #[test]
    fn test_missing_analysis_uses_placeholder() {
        assert_eq!(
            render_analysis(None),
            AnalysisContent::Placeholder(NO_ANALYSIS.to_string())
        );
        assert_eq!(
            render_analysis(Some("")),
            AnalysisContent::Placeholder(NO_ANALYSIS.to_string())
        );
    }

    #[test]
    fn test_placeholder_is_not_interpreted() {
        let content = AnalysisContent::Placeholder("**not bold**".to_string());
        assert_eq!(content.to_html(), "**not bold**");
    }

    #[test]
    fn test_summary_fallback() {
        assert_eq!(summary_text(Some("S")), "S");
        assert_eq!(summary_text(Some("")), NO_SUMMARY);
        assert_eq!(summary_text(None), NO_SUMMARY);
    }
}
