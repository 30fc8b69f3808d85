use serde_json::Value;
use wasm_bindgen::JsValue;

// There is no backend to ship logs to; structured entries go straight to
// the browser console.
fn send(level: &str, message: &str, context: Value) {
    let label = JsValue::from_str(&format!("[{level}] {message}"));
    let ctx = serde_wasm_bindgen::to_value(&context).unwrap_or(JsValue::NULL);
    match level {
        "error" => web_sys::console::error_2(&label, &ctx),
        "warn" => web_sys::console::warn_2(&label, &ctx),
        "debug" => web_sys::console::debug_2(&label, &ctx),
        _ => web_sys::console::log_2(&label, &ctx),
    }
}

pub fn info(message: &str, context: Value)  { send("info",  message, context); }
pub fn warn(message: &str, context: Value)  { send("warn",  message, context); }
pub fn error(message: &str, context: Value) { send("error", message, context); }
pub fn debug(message: &str, context: Value) { send("debug", message, context); }
