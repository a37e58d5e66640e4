//! Request orchestrator.
//!
//! Binds one trigger to one endpoint and drives the request lifecycle:
//! validate, disable the control, send exactly one request, interpret the
//! response, show a success or error view, restore the control.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::adapters::{RawResponse, RequestBody, Transport, TransportError};
use crate::analysis::{Analysis, Exportable};
use crate::view::{ErrorView, Feedback, Surface};

use super::control::{Control, ControlGuard, UiState};
use super::error::AnalysisError;
use super::export::{to_csv, write_csv};
use super::progress::ProgressMeter;

/// Orchestrator for one analysis variant
pub struct Orchestrator<A: Analysis, S> {
    /// Variant strategy
    analysis: A,
    /// Network seam
    transport: Arc<dyn Transport>,
    /// Display surface
    surface: S,
    /// Trigger control
    control: Control,
    /// Lifecycle state
    state: UiState,
    /// Last successful output, replaced on every success
    last_result: Option<A::Output>,
}

impl<A, S> Orchestrator<A, S>
where
    A: Analysis,
    S: Surface<A::View>,
{
    /// Create an idle orchestrator
    pub fn new(analysis: A, transport: Arc<dyn Transport>, surface: S) -> Self {
        let labels = analysis.labels();
        Self {
            analysis,
            transport,
            surface,
            control: Control::new(labels.idle, labels.loading),
            state: UiState::Idle,
            last_result: None,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Last successful output, if any
    pub fn last_result(&self) -> Option<&A::Output> {
        self.last_result.as_ref()
    }

    /// Handle one user trigger
    ///
    /// Every error is recovered here and shown on the surface; the returned
    /// state tells the caller how the round-trip ended.
    #[instrument(
        skip_all,
        fields(analysis = self.analysis.name(), request_id = %Uuid::new_v4())
    )]
    pub async fn trigger(&mut self, input: A::Input) -> UiState {
        if !self.state.is_ready() || !self.control.is_enabled() {
            warn!("Trigger ignored while a request is in flight");
            return self.state;
        }

        if let Err(err) = self.analysis.validate(&input) {
            info!(error = %err, "Input rejected");
            self.surface.notify(&err.user_message());
            return self.state;
        }

        let Self {
            analysis,
            transport,
            surface,
            control,
            state,
            last_result,
        } = self;
        let analysis: &A = analysis;
        let surface: &S = surface;

        *state = UiState::Loading;
        surface.loading();
        let guard = ControlGuard::engage(control, surface);

        let started = Instant::now();
        info!(endpoint = analysis.endpoint(), "Starting analysis");

        match send(analysis, &**transport, surface, input).await {
            Ok(output) => {
                let elapsed = started.elapsed();
                info!(elapsed_ms = elapsed.as_millis() as u64, "Analysis completed");

                let view = analysis.render(&output, elapsed);
                *last_result = Some(output);
                *state = UiState::Success;
                surface.show(&view);
            }
            Err(err) => {
                warn!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "Analysis failed"
                );

                *state = UiState::Error;
                surface.show_error(&ErrorView::new(analysis.error_prefix(), &err));
            }
        }

        drop(guard);
        *state
    }
}

impl<A, S> Orchestrator<A, S>
where
    A: Exportable,
    S: Surface<A::View>,
{
    /// Render the retained rows as CSV text
    pub fn export_csv(&self) -> Result<String, AnalysisError> {
        to_csv(self.analysis.export_format(), self.last_result.as_deref())
    }

    /// Default export file name for this variant
    pub fn export_file_name(&self) -> &'static str {
        self.analysis.export_format().default_file_name()
    }

    /// Write the retained rows to `path`
    ///
    /// With nothing retained this shows a notice and creates no file.
    #[instrument(skip(self), fields(analysis = self.analysis.name()))]
    pub async fn export(&self, path: &Path) -> Result<PathBuf, AnalysisError> {
        let result = write_csv(
            self.analysis.export_format(),
            self.last_result.as_deref(),
            path,
        )
        .await;

        if let Err(err) = &result {
            warn!(error = %err, "Export failed");
            if err.is_notice() {
                self.surface.notify(&err.user_message());
            } else {
                self.surface
                    .show_error(&ErrorView::new("Failed to export results", err));
            }
        }

        result
    }
}

/// Build, send and decode one request
async fn send<A, F>(
    analysis: &A,
    transport: &dyn Transport,
    surface: &F,
    input: A::Input,
) -> Result<A::Output, AnalysisError>
where
    A: Analysis,
    F: Feedback + ?Sized,
{
    let body = analysis.build_request(input);
    let mut meter = analysis.progress().map(ProgressMeter::new);

    let response = match meter.as_mut() {
        Some(meter) => post_with_progress(transport, analysis.endpoint(), body, meter, surface).await?,
        None => transport.post(analysis.endpoint(), body).await?,
    };

    if !response.is_success() {
        return Err(AnalysisError::from_http(response.status, &response.body));
    }

    let output = serde_json::from_slice::<A::Output>(&response.body)?;

    if let Some(meter) = meter.as_mut() {
        surface.progress(meter.complete());
    }

    Ok(output)
}

/// Send while ticking the progress meter
///
/// The interval lives inside this future, so it stops with it on every
/// exit path.
async fn post_with_progress<F: Feedback + ?Sized>(
    transport: &dyn Transport,
    path: &str,
    body: RequestBody,
    meter: &mut ProgressMeter,
    surface: &F,
) -> Result<RawResponse, TransportError> {
    surface.progress(meter.percent());

    let period = meter.settings().interval();
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);

    let request = transport.post(path, body);
    tokio::pin!(request);

    loop {
        tokio::select! {
            biased;
            response = &mut request => return response,
            _ = ticker.tick() => {
                if let Some(percent) = meter.advance() {
                    debug!(percent, "Progress");
                    surface.progress(percent);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::analysis::TextAnalysis;
    use crate::view::PredictionView;

    struct CannedTransport(RawResponse);

    #[async_trait]
    impl Transport for CannedTransport {
        fn name(&self) -> &str {
            "canned"
        }

        async fn post(&self, _path: &str, _body: RequestBody) -> Result<RawResponse, TransportError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct LastShown(Mutex<Option<String>>);

    impl Feedback for LastShown {
        fn control(&self, _control: &Control) {}

        fn show_error(&self, error: &ErrorView) {
            *self.0.lock().unwrap() = Some(error.message.clone());
        }

        fn notify(&self, message: &str) {
            *self.0.lock().unwrap() = Some(message.to_string());
        }
    }

    impl Surface<PredictionView> for LastShown {
        fn show(&self, view: &PredictionView) {
            *self.0.lock().unwrap() = Some(view.headline.clone());
        }
    }

    #[tokio::test]
    async fn test_orchestrator_creation() {
        let transport = Arc::new(CannedTransport(RawResponse::new(200, "{}")));
        let orchestrator = Orchestrator::new(TextAnalysis, transport, LastShown::default());

        assert_eq!(orchestrator.state(), UiState::Idle);
        assert_eq!(orchestrator.control().label(), "Analyze Text");
        assert!(orchestrator.last_result().is_none());
    }

    #[tokio::test]
    async fn test_success_then_error_keeps_last_result() {
        let ok = Arc::new(CannedTransport(RawResponse::new(
            200,
            r#"{"prediction":"FAKE","confidence_score":"70.00%"}"#,
        )));
        let mut orchestrator = Orchestrator::new(TextAnalysis, ok, LastShown::default());

        let state = orchestrator.trigger("Too good to be true".to_string()).await;
        assert_eq!(state, UiState::Success);
        assert_eq!(
            orchestrator.surface().0.lock().unwrap().as_deref(),
            Some("This review is likely FAKE")
        );

        orchestrator.transport = Arc::new(CannedTransport(RawResponse::new(503, "")));
        let state = orchestrator.trigger("Again".to_string()).await;
        assert_eq!(state, UiState::Error);
        assert!(orchestrator.control().is_enabled());
        assert!(orchestrator.last_result().is_some());
    }
}
