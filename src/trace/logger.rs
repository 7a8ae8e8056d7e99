use std::{
    fs::OpenOptions,
    io::Write,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::{
    form::{observer::FormObserver, response::ResponseMap},
    trace::trace::{FormEvent, FormEventKind},
};

/// Appends one JSON object per line. Never fails the caller: problems are
/// reported to stderr and the event is dropped.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
    sequence: AtomicU64,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path);

        match file {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
                sequence: AtomicU64::new(0),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            file: None,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Start an event stamped with the next sequence number.
    pub fn event(&self, kind: FormEventKind) -> FormEvent {
        FormEvent::now(self.sequence.fetch_add(1, Ordering::Relaxed), kind)
    }

    pub fn log(&self, event: &FormEvent) {
        let file_mutex = match &self.file {
            Some(f) => f,
            None => return, // tracing disabled
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: trace logger lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}

/// Engine observer that records every change notification.
pub struct TraceObserver {
    logger: Arc<TraceLogger>,
    form: String,
}

impl TraceObserver {
    pub fn new(logger: Arc<TraceLogger>, form: impl Into<String>) -> Self {
        Self {
            logger,
            form: form.into(),
        }
    }
}

impl FormObserver for TraceObserver {
    fn on_change(&mut self, field_id: &str, responses: &ResponseMap, is_valid: bool) {
        let answered = responses.values().filter(|v| v.is_present()).count();
        let event = self
            .logger
            .event(FormEventKind::ResponseChanged)
            .with_form(&self.form)
            .with_field(field_id)
            .with_valid(is_valid)
            .with_detail(format!("{} responses, {} answered", responses.len(), answered));
        self.logger.log(&event);
    }
}
