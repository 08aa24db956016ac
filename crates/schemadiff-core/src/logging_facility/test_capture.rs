//! In-memory capture of operation events for test assertions
//!
//! [`init_test_capture`] installs a global subscriber that records every
//! event with its fields rendered as strings. The buffer is shared by all
//! tests in a binary, so assertions should filter by an op name that only
//! the test under inspection uses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use schemadiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, FIELD_COMPONENT, FIELD_DIFFERENCE_COUNT, FIELD_ERR_CODE,
    FIELD_EVENT, FIELD_OP,
};

/// One recorded event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, mut fields: HashMap<String, String>) -> Self {
        // `message` is tracing's implicit field, not part of the event schema
        fields.remove("message");
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }

    /// `difference_count` of a compare end event
    pub fn difference_count(&self) -> Option<usize> {
        self.field(FIELD_DIFFERENCE_COUNT)?.parse().ok()
    }

    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    events: Buffer,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), visitor.0);
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Read handle over the shared event buffer
#[derive(Clone)]
pub struct TestCapture {
    events: Buffer,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events recorded for one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// The most recent `end` or `end_error` event of `op`
    pub fn last_outcome(&self, op: &str) -> Option<CapturedEvent> {
        self.events()
            .into_iter()
            .rev()
            .find(|e| e.is(op, EVENT_END) || e.is(op, EVENT_END_ERROR))
    }

    /// # Panics
    ///
    /// Panics if no event of `op` has type `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber
///
/// The first call installs it; later calls return a handle to the same
/// buffer.
///
/// ```
/// use schemadiff_core::logging_facility::test_capture::init_test_capture;
/// use schemadiff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Buffer::default();
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}
