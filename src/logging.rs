//! Tracing output routed to the browser console

use std::io::{self, Write};
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

static INIT: Once = Once::new();

/// Install the console subscriber and panic hook. Safe to call repeatedly.
pub fn init(max_level: Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let installed = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_max_level(max_level)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .try_init();
        if installed.is_err() {
            web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already set"));
        }
    });
}

/// Parse a level name such as `"debug"`, defaulting to `INFO`
pub fn parse_level(name: Option<&str>) -> Level {
    name.and_then(|n| n.parse().ok()).unwrap_or(Level::INFO)
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to `console` when dropped
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}
