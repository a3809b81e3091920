//! Side-effecting consumers of fetched content.
//!
//! A `Sink` receives three kinds of events from the engine: content to
//! display, an error report, and the final done signal. `ConsoleSink`
//! renders them to a terminal; `RecordingSink` keeps them in memory so
//! tests can assert on order and count.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use colored::Colorize;

use crate::error::{ResourceError, Stage};

/// Consumer of engine side effects.
///
/// Implementations serialize their own writes.
pub trait Sink: Send + Sync {
    /// Render fetched content.
    fn display(&self, text: &str);

    /// Render a failure, distinct from normal content.
    fn report(&self, error: &ResourceError);

    /// Signal that a batch has finished.
    fn done(&self);

    /// Render a plain status line. Defaults to `display`.
    fn note(&self, text: &str) {
        self.display(text);
    }
}

/// Sink writing to a terminal or any other writer.
///
/// Content is blue, errors magenta, status lines uncoloured.
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
    colorize: bool,
}

impl ConsoleSink {
    /// Create a sink over an arbitrary writer.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            colorize: true,
        }
    }

    /// Create a sink writing to stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Enable or disable ANSI colours.
    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A closed terminal is not worth failing the batch for.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("colorize", &self.colorize)
            .finish()
    }
}

impl Sink for ConsoleSink {
    fn display(&self, text: &str) {
        if self.colorize {
            self.write_line(&text.blue().to_string());
        } else {
            self.write_line(text);
        }
    }

    fn report(&self, error: &ResourceError) {
        let text = error.to_string();
        if self.colorize {
            self.write_line(&text.magenta().to_string());
        } else {
            self.write_line(&text);
        }
    }

    fn done(&self) {
        self.write_line("done");
    }

    fn note(&self, text: &str) {
        self.write_line(text);
    }
}

/// An event observed by a `RecordingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Display(String),
    Report {
        stage: Stage,
        target: String,
        kind: io::ErrorKind,
    },
    Note(String),
    Done,
}

/// In-memory sink for testing.
///
/// Clones share the same event log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far, in the order they were received.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Only the displayed texts, in order.
    pub fn displayed(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Display(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Number of error reports received.
    pub fn report_count(&self) -> usize {
        self.count(|e| matches!(e, SinkEvent::Report { .. }))
    }

    /// Number of done signals received.
    pub fn done_count(&self) -> usize {
        self.count(|e| matches!(e, SinkEvent::Done))
    }

    /// Clear the event log.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn count(&self, pred: impl Fn(&SinkEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| pred(*e)).count()
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Sink for RecordingSink {
    fn display(&self, text: &str) {
        self.push(SinkEvent::Display(text.to_string()));
    }

    fn report(&self, error: &ResourceError) {
        self.push(SinkEvent::Report {
            stage: error.stage,
            target: error.target.clone(),
            kind: error.kind(),
        });
    }

    fn done(&self) {
        self.push(SinkEvent::Done);
    }

    fn note(&self, text: &str) {
        self.push(SinkEvent::Note(text.to_string()));
    }
}
