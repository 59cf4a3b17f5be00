//! Browser console plumbing: a `log` backend and a panic hook.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger and panic hook. Safe to call repeatedly.
pub fn setup() {
    use std::sync::Once;
    static SETUP: Once = Once::new();
    SETUP.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(|info| {
            let msg = format!("canvas painter panic: {info}");
            web_sys::console::error_1(&msg.into());
        }));
    });
}

/// Change the console log level at runtime (`"off"`, `"error"` … `"trace"`).
/// Unknown names leave the level unchanged and return `false`.
pub fn set_level(name: &str) -> bool {
    match name.parse::<LevelFilter>() {
        Ok(level) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}
