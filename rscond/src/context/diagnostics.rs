use std::{cell::RefCell, rc::Rc};

/// Destination for the lines the evaluator prints as a side effect: errors
/// that short-circuit an operator and timing reports.
pub trait DiagnosticSink {
    fn emit(&self, line: &str);
}

/// Writes each line to standard output. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Forwards each line to `tracing` at info level, for hosts that already
/// route their output through a subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "rscond", "{}", line);
    }
}

/// Keeps every emitted line in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
