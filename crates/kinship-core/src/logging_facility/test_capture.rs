//! In-memory log capture for tests
//!
//! `init_test_capture()` installs a subscriber that keeps every event in a
//! shared buffer. Tests then look events up by `op` and `event` and read
//! their fields as strings.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One recorded event: its level plus every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn op(&self) -> Option<&str> {
        self.field("op")
    }

    pub fn event(&self) -> Option<&str> {
        self.field("event")
    }

    pub fn component(&self) -> Option<&str> {
        self.field("component")
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

/// Field visitor; strings are stored unquoted, everything else via `Debug`
#[derive(Default)]
struct FieldMap(BTreeMap<String, String>);

impl Visit for FieldMap {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{:?}", value));
    }
}

/// Shared handle to the captured events
///
/// The handle is also the subscriber layer, so the buffer the layer writes
/// to is the one tests read.
#[derive(Clone, Default)]
pub struct TestCapture {
    buffer: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        match self.buffer.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Events for one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// First event with the given operation and event name
    pub fn find(&self, op: &str, event: &str) -> Option<CapturedEvent> {
        self.events().into_iter().find(|e| e.is(op, event))
    }

    /// # Panics
    ///
    /// Panics if no event has this operation and event name.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        if self.find(op, event).is_none() {
            let seen: Vec<String> = self
                .events()
                .iter()
                .filter_map(|e| Some(format!("{}/{}", e.op()?, e.event()?)))
                .collect();
            panic!("no {}/{} event captured; saw {:?}", op, event, seen);
        }
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    fn push(&self, event: CapturedEvent) {
        match self.buffer.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl<S: Subscriber> Layer<S> for TestCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        event.record(&mut fields);
        self.push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return its handle
///
/// Only the first call installs anything. Every test in the binary shares
/// the buffer, so assertions should key on an op or field value no other
/// test uses.
///
/// # Example
///
/// ```
/// use kinship_core::logging_facility::test_capture::init_test_capture;
/// use kinship_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::new();
            tracing_subscriber::registry().with(capture.clone()).init();
            capture
        })
        .clone()
}
