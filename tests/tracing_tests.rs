// SPDX-License-Identifier: MIT OR Apache-2.0
//! Integration tests verifying the tracing output of usage errors and
//! conversions, and the absence of output for domain failures.

use std::sync::{Arc, Mutex};

use operation_results::{
    Message, MessageCollection, OperationResult, Outcome, Severity, ValueResult,
};

// ---------------------------------------------------------------------------
// Shared log-capture infrastructure
// ---------------------------------------------------------------------------

/// Thread-safe buffer that captures tracing output.
#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl LogBuf {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }

    fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl std::io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuf {
    type Writer = LogBuf;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a tracing subscriber that captures all output into a [`LogBuf`].
/// Returns the buffer and a guard that must be held for the test duration.
fn setup_tracing() -> (LogBuf, tracing::subscriber::DefaultGuard) {
    let buf = LogBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buf, guard)
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

#[test]
fn empty_failure_logs_parameter_name() {
    let (buf, _guard) = setup_tracing();
    let _ = OperationResult::failure(Vec::new());
    assert!(buf.contains("opres.argument"), "logs: {}", buf.contents());
    assert!(buf.contains("messages"));
    assert!(buf.contains("required argument missing"));
}

#[test]
fn absent_details_logs_at_debug() {
    let (buf, _guard) = setup_tracing();
    let _ = Message::try_with_details(Severity::Information, None);
    let logs = buf.contents();
    assert!(logs.contains("DEBUG"), "logs: {logs}");
    assert!(logs.contains("details"));
}

#[test]
fn non_object_details_source_is_logged() {
    let (buf, _guard) = setup_tracing();
    let _ = Message::from_object(Severity::Warning, Some(&"just text"), true);
    assert!(buf.contains("details source is not an object"));
    assert!(buf.contains("string"));
}

#[test]
fn out_of_range_index_is_logged() {
    let (buf, _guard) = setup_tracing();
    let mut c = MessageCollection::new();
    let _ = c.remove_at(3);
    assert!(buf.contains("index out of range"));
}

// ---------------------------------------------------------------------------
// Conversions and domain failures
// ---------------------------------------------------------------------------

#[test]
fn conversion_is_traced_with_counts() {
    let (buf, _guard) = setup_tracing();
    let source = OperationResult::failure([Message::error("a"), Message::warning("b")]).unwrap();
    let _converted: ValueResult<u8> = source.convert_to();
    let logs = buf.contents();
    assert!(logs.contains("TRACE"), "logs: {logs}");
    assert!(logs.contains("opres.result"));
    assert!(logs.contains("converting result"));
    assert!(logs.contains("messages=2"));
    assert!(logs.contains("succeeded=false"));
}

#[test]
fn domain_failures_are_silent() {
    let (buf, _guard) = setup_tracing();
    let result = OperationResult::from_error(&std::io::Error::other("quota exceeded"))
        .on_failure(|_| {})
        .on_success(|_| {});
    assert!(result.failed());
    assert!(!result.messages().is_empty());
    assert!(buf.contents().is_empty(), "unexpected logs: {}", buf.contents());
}
