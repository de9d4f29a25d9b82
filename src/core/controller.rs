use crate::core::render::{render_analysis, summary_text};
use crate::domain::model::{AnalysisRequest, AnalysisResult, SubmitOutcome};
use crate::domain::ports::{AnalysisService, View};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Drives one analysis form: validates the topic, calls the service and
/// renders the outcome into the view.
///
/// Each submission takes a token from a monotonically increasing counter.
/// A response whose token is no longer the latest is dropped without
/// touching the view, so overlapping submissions cannot overwrite a newer
/// result with an older one.
///
/// The token is checked again before results are revealed. On a
/// multi-threaded runtime a newer submission may still reset the view while
/// an older one is filling it in; the older one then leaves the results
/// hidden and the status indicator to its successor.
pub struct FormController<S: AnalysisService, V: View> {
    service: S,
    view: V,
    latest_token: Arc<AtomicU64>,
}

impl<S: AnalysisService, V: View> FormController<S, V> {
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view,
            latest_token: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn next_token(&self) -> u64 {
        self.latest_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }

    pub async fn handle_submit(&self, raw_topic: &str) -> SubmitOutcome {
        let Some(request) = AnalysisRequest::from_input(raw_topic) else {
            tracing::debug!("Ignoring empty topic submission");
            return SubmitOutcome::Skipped;
        };

        let token = self.next_token();
        tracing::info!("Submitting topic '{}' (token {})", request.topic, token);

        self.view.reset();

        let response = self.service.analyze(&request.topic).await;

        if !self.is_latest(token) {
            self.log_discard(token);
            return SubmitOutcome::Discarded { token };
        }

        let outcome = match response {
            Ok(result) => {
                self.fill_results(&result);
                if !self.is_latest(token) {
                    self.log_discard(token);
                    return SubmitOutcome::Discarded { token };
                }
                self.view.set_results_visible(true);
                tracing::debug!("Results displayed");
                SubmitOutcome::Displayed { token }
            }
            Err(e) => {
                tracing::error!("Analysis of '{}' failed: {}", request.topic, e);
                let message = e.user_message();
                self.view.alert(&message);
                SubmitOutcome::Failed { token, message }
            }
        };

        self.view.set_status_visible(false);
        outcome
    }

    fn log_discard(&self, token: u64) {
        tracing::warn!(
            "Discarding response for token {} (latest is {})",
            token,
            self.latest_token.load(Ordering::SeqCst)
        );
    }

    fn fill_results(&self, result: &AnalysisResult) {
        if let Some(error) = result.error.as_deref() {
            tracing::warn!("Service reported '{}' with a success status", error);
        }

        self.view.set_summary(summary_text(result.summary.as_deref()));
        self.view
            .set_analysis(&render_analysis(result.analysis.as_deref()));

        if let Some(source) = result.sources.as_deref().filter(|s| !s.is_empty()) {
            self.view.append_source(source);
        }
    }
}
