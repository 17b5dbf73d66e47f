use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Routes formatted tracing events to the browser console, one console call
/// per event, picking the console method from the event level.
pub struct ConsoleMakeWriter;

pub struct ConsoleWriter {
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

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
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
        let line = self.line();
        if !line.is_empty() {
            emit(self.level, &line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    if level == Level::ERROR {
        console::error_1(&line);
    } else if level == Level::WARN {
        console::warn_1(&line);
    } else if level == Level::INFO {
        console::info_1(&line);
    } else {
        console::debug_1(&line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

/// Installs the console subscriber. Later calls keep the first subscriber.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(%level, "console logging ready");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(_level: Level) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writer_collects_one_trimmed_line() {
        let mut writer = ConsoleMakeWriter.make_writer();
        write!(writer, " WARN polity_watch: news ").unwrap();
        writeln!(writer, "fetch failed").unwrap();
        assert_eq!(writer.level, Level::INFO);
        assert_eq!(writer.line(), " WARN polity_watch: news fetch failed");
    }

    #[test]
    fn empty_writer_has_no_line() {
        let writer = ConsoleWriter::new(Level::DEBUG);
        assert!(writer.line().is_empty());
    }
}
