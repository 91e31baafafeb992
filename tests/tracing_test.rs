//! Events emitted with the `tracing` feature.
//!
//! A recording layer collects every event raised while a closure runs.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use tola_ranges::cursor::{as_cells, Slot};
use tola_ranges::{checked, copy_backward, remove_if, COPY_BACKWARD};

#[derive(Debug, Default)]
struct Recorded {
    level: Option<Level>,
    message: String,
    fields: Vec<(String, String)>,
}

impl Recorded {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

impl Visit for Recorded {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }
}

#[derive(Clone, Default)]
struct RecordingLayer {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("tola_ranges") {
            return;
        }
        let mut recorded = Recorded { level: Some(*event.metadata().level()), ..Recorded::default() };
        event.record(&mut recorded);
        if let Ok(mut events) = self.events.lock() {
            events.push(recorded);
        }
    }
}

fn record(f: impl FnOnce()) -> Vec<Recorded> {
    let layer = RecordingLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let mut events = events.lock().unwrap();
    std::mem::take(&mut *events)
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_dispatch_event_names_algorithm_and_shape() {
    let events = record(|| {
        let mut buf = [0; 3];
        copy_backward(&[1, 2], Slot::end(as_cells(&mut buf)));
    });
    let dispatch = events.iter().find(|e| e.message == "dispatch").unwrap();
    assert_eq!(dispatch.level, Some(Level::TRACE));
    assert_eq!(dispatch.field("algorithm"), Some("copy_backward"));
    assert_eq!(dispatch.field("shape"), Some("sequence"));

    let events = record(|| {
        let src = [1];
        let mut buf = [0; 1];
        let (_, end) = Slot::range(as_cells(&mut buf));
        COPY_BACKWARD.sequence(&src[..], end);
    });
    assert_eq!(events.iter().filter(|e| e.message == "dispatch").count(), 1);
}

#[test]
fn test_remove_if_reports_no_match() {
    let events = record(|| {
        let mut v = vec![1, 3, 5];
        remove_if(&mut v, |x: &i32| x % 2 == 0);
    });
    let quiet = events.iter().find(|e| e.message == "no element matched").unwrap();
    assert_eq!(quiet.field("algorithm"), Some("remove_if"));

    let events = record(|| {
        let mut v = vec![1, 2];
        remove_if(&mut v, |x: &i32| x % 2 == 0);
    });
    assert!(events.iter().all(|e| e.message != "no element matched"));
}

// =============================================================================
// Checked Layer
// =============================================================================

#[test]
fn test_checked_rejections_emit_debug() {
    let events = record(|| {
        let _ = checked::copy_backward(&[1, 2, 3], &mut [0; 1]);
        let _ = checked::shift_right(&mut [1, 2], 2, 1);
        let _ = checked::merge_move(&mut [2, 1], &mut [3], &mut [0; 3]);
    });
    let rejections: Vec<&str> = events
        .iter()
        .filter(|e| e.level == Some(Level::DEBUG))
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(
        rejections,
        ["insufficient output capacity", "shift out of bounds", "unsorted merge input"]
    );

    let unsorted = events.iter().find(|e| e.message == "unsorted merge input").unwrap();
    assert_eq!(unsorted.field("index"), Some("1"));
    assert_eq!(unsorted.field("input"), Some("first"));
}

#[test]
fn test_accepted_calls_emit_no_debug() {
    let events = record(|| {
        let mut out = [0; 2];
        checked::copy_backward(&[1, 2], &mut out).unwrap();
    });
    assert!(events.iter().all(|e| e.level != Some(Level::DEBUG)));
}
