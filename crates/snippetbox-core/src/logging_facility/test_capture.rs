//! In-memory event recorder for logging assertions in tests

use crate::schema::{FIELD_EVENT, FIELD_OP};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// One recorded event with its fields rendered to strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: BTreeMap<&'static str, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct Recorder<'a>(&'a mut BTreeMap<&'static str, String>);

impl Visit for Recorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name(), value.to_owned());
    }

    // Integers and bools render the same through Debug
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct Sink(Buffer);

impl<S: Subscriber> Layer<S> for Sink {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut Recorder(&mut fields));

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Shared view of everything recorded since installation
#[derive(Clone)]
pub struct TestCapture(Buffer);

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events for one operation, oldest first
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// Most recent event matching `op` and `event`
    ///
    /// # Panics
    ///
    /// Panics if there is none
    pub fn expect_event(&self, op: &str, event: &str) -> CapturedEvent {
        let events = self.events();
        match events.iter().rev().find(|e| e.is(op, event)) {
            Some(found) => found.clone(),
            None => panic!(
                "no op={} event={} among {} captured events",
                op,
                event,
                events.len()
            ),
        }
    }

    pub fn count(&self, predicate: impl Fn(&CapturedEvent) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the recorder as the global subscriber, once per process
///
/// Every caller gets a handle to the same buffer, so tests running in
/// parallel should filter on an op name of their own.
///
/// ```
/// use snippetbox_core::logging_facility::init_test_capture;
/// use snippetbox_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.expect_event("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            let subscriber = tracing_subscriber::registry().with(Sink(buffer.clone()));
            // Another subscriber may already be global; its events are then not recorded
            let _ = tracing::subscriber::set_global_default(subscriber);
            TestCapture(buffer)
        })
        .clone()
}
