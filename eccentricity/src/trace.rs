//! Relaxation trace emitted by the engine while it runs.
use serde::Serialize;

use crate::{Distance, Node, Weight};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// `vertex` left the frontier with its final distance.
    Extracted { vertex: Node, distance: Weight },
    /// Path through `via` lowered the tentative distance of `vertex`.
    Relaxed { vertex: Node, via: Node, previous: Distance, distance: Weight },
    /// `vertex` left the frontier without ever being reached.
    Unreached { vertex: Node },
}

pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Discards every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) { self.push(event); }
}

/// Forwards events to `tracing` at TRACE level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Extracted { vertex, distance } => {
                tracing::trace!(vertex, distance, "extracted")
            }
            TraceEvent::Relaxed { vertex, via, previous, distance } => {
                tracing::trace!(vertex, via, %previous, distance, "relaxed")
            }
            TraceEvent::Unreached { vertex } => tracing::trace!(vertex, "unreached"),
        }
    }
}
