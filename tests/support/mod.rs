//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use revcheck::core::Control;
use revcheck::{ErrorView, Feedback, RawResponse, RequestBody, Surface, Transport, TransportError};

/// Transport replaying scripted responses and recording every call
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    calls: Mutex<Vec<(String, RequestBody)>>,
    delay: Duration,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a status and body
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    /// Queue a send failure
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Send(message.to_string())));
        self
    }

    /// Delay every response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<(String, RequestBody)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    fn name(&self) -> &str {
        "fake"
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push((path.to_string(), body));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(500, Vec::new())))
    }
}

/// Everything a surface was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event<V> {
    Control { label: String, enabled: bool },
    Loading,
    Progress(u8),
    Shown(V),
    Error(String),
    Notice(String),
}

/// Surface that records events
pub struct RecordingSurface<V> {
    events: Mutex<Vec<Event<V>>>,
}

impl<V> Default for RecordingSurface<V> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<V: Clone> RecordingSurface<V> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, event: Event<V>) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event<V>> {
        self.events.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<V> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Shown(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notice(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn progress_updates(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Progress(percent) => Some(percent),
                _ => None,
            })
            .collect()
    }

    /// (label, enabled) for every control change
    pub fn controls(&self) -> Vec<(String, bool)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Control { label, enabled } => Some((label, enabled)),
                _ => None,
            })
            .collect()
    }
}

impl<V: Clone + Send> Feedback for RecordingSurface<V> {
    fn control(&self, control: &Control) {
        self.push(Event::Control {
            label: control.label().to_string(),
            enabled: control.is_enabled(),
        });
    }

    fn loading(&self) {
        self.push(Event::Loading);
    }

    fn progress(&self, percent: u8) {
        self.push(Event::Progress(percent));
    }

    fn show_error(&self, error: &ErrorView) {
        self.push(Event::Error(error.message.clone()));
    }

    fn notify(&self, message: &str) {
        self.push(Event::Notice(message.to_string()));
    }
}

impl<V: Clone + Send> Surface<V> for RecordingSurface<V> {
    fn show(&self, view: &V) {
        self.push(Event::Shown(view.clone()));
    }
}

/// Records like [`RecordingSurface`] but panics when asked to show an error
pub struct PanicOnError<V>(pub Arc<RecordingSurface<V>>);

impl<V: Clone + Send> Feedback for PanicOnError<V> {
    fn control(&self, control: &Control) {
        self.0.control(control)
    }

    fn loading(&self) {
        self.0.loading()
    }

    fn show_error(&self, _error: &ErrorView) {
        panic!("error panel failed to render");
    }

    fn notify(&self, message: &str) {
        self.0.notify(message)
    }
}

impl<V: Clone + Send> Surface<V> for PanicOnError<V> {
    fn show(&self, view: &V) {
        self.0.show(view)
    }
}
