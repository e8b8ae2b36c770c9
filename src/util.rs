// Console logging and small browser capability probes.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

fn format_line(level: Level, target: &str, msg: &str) -> String {
    format!("[{level} {target}] {msg}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the browser console. Later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `ontouchstart` present or a nonzero `maxTouchPoints`.
pub fn is_touch_device() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let has_ontouch = js_sys::Reflect::has(&win, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouch || win.navigator().max_touch_points() > 0
}

/// Fire-and-forget `navigator.clipboard.writeText`; a rejected promise is swallowed.
pub fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise = write.call1(&clipboard, &JsValue::from_str(text))?;
    if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
        let ignore = Closure::<dyn FnMut(JsValue)>::new(|_| {});
        let _ = promise.catch(&ignore);
        ignore.forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_line_format() {
        assert_eq!(
            format_line(Level::Warn, "yew_container_guide::storage", "no storage"),
            "[WARN yew_container_guide::storage] no storage"
        );
    }
}
