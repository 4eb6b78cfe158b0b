//! Console Logging
//!
//! Routes `tracing` events from the UI and the engine to the browser console.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Layer writing each event as one console line: `[target] message key=value`
struct ConsoleLayer {
    max_level: Level,
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn format_line(target: &str, visitor: &LineVisitor) -> String {
    format!("[{}] {}{}", target, visitor.message, visitor.fields)
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // More verbose levels compare greater
        if *meta.level() > self.max_level {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = JsValue::from_str(&format_line(meta.target(), &visitor));

        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Install the console subscriber; debug builds also show debug events
pub fn init_logger() {
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if tracing_subscriber::registry()
        .with(ConsoleLayer { max_level })
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"[logging] subscriber already installed".into());
    }
}
