//! Diagnostic records
//!
//! The control loop emits one text record per cycle. Sinks must never
//! block the cycle; records may be dropped.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use heapless::{Deque, String};

/// Fire-and-forget diagnostics output
pub trait DiagnosticsSink {
    fn emit(&mut self, text: &str);
}

/// Forwards records to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn emit(&mut self, text: &str) {
        log::info!(target: "diagnostics", "{}", text);
    }
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

/// Bounded record queue drained by another context
///
/// Holds up to `DEPTH` records of at most `LEN` bytes. Longer records are
/// truncated, records arriving while the queue is full are dropped and
/// counted. Safe to share with interrupts via critical sections.
pub struct DiagnosticsQueue<const DEPTH: usize, const LEN: usize> {
    records: Mutex<RefCell<Deque<String<LEN>, DEPTH>>>,
    dropped: Mutex<Cell<u32>>,
}

impl<const DEPTH: usize, const LEN: usize> DiagnosticsQueue<DEPTH, LEN> {
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(RefCell::new(Deque::new())),
            dropped: Mutex::new(Cell::new(0)),
        }
    }

    /// Queue a record, dropping it when full
    ///
    /// Returns false if the record was dropped.
    pub fn push(&self, text: &str) -> bool {
        let record = truncated(text);
        critical_section::with(|cs| {
            let mut records = self.records.borrow(cs).borrow_mut();
            if records.push_back(record).is_ok() {
                return true;
            }
            let dropped = self.dropped.borrow(cs);
            dropped.set(dropped.get().saturating_add(1));
            false
        })
    }

    /// Take the oldest record
    pub fn pop(&self) -> Option<String<LEN>> {
        critical_section::with(|cs| self.records.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.records.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records dropped because the queue was full
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.dropped.borrow(cs).get())
    }
}

impl<const DEPTH: usize, const LEN: usize> Default for DiagnosticsQueue<DEPTH, LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEPTH: usize, const LEN: usize> DiagnosticsSink for &DiagnosticsQueue<DEPTH, LEN> {
    fn emit(&mut self, text: &str) {
        if !self.push(text) {
            log::warn!(target: "diagnostics", "queue full, record dropped");
        }
    }
}

/// Copy as much of `text` as fits, cutting on a char boundary
fn truncated<const LEN: usize>(text: &str) -> String<LEN> {
    let mut end = text.len().min(LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut record = String::new();
    // Cannot fail, `end` is within capacity
    let _ = record.push_str(&text[..end]);
    record
}
