use std::io::Write;
use std::sync::{Arc, Mutex};

use sieve_schema::{DescriptorBuilder, validate};
use sieve_value::{ValueKind, value};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(level: Level, f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn test_violation_is_logged_at_debug() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field("port", ValueKind::Integer)
        .build()
        .unwrap();
    let output = capture(Level::DEBUG, || {
        assert!(validate(value!({"port": "80"}), &schema).is_err());
    });
    assert!(output.contains("schema violation"), "{}", output);
    assert!(output.contains("port"), "{}", output);
}

#[test]
fn test_dispatch_is_logged_at_trace_only() {
    let schema = DescriptorBuilder::typed(ValueKind::Array)
        .elements(ValueKind::Integer)
        .build()
        .unwrap();

    let output = capture(Level::TRACE, || {
        validate(value!([1, 2]), &schema).unwrap();
    });
    assert!(output.contains("apply schema node"), "{}", output);

    let output = capture(Level::DEBUG, || {
        validate(value!([1, 2]), &schema).unwrap();
    });
    assert!(output.is_empty(), "{}", output);
}
