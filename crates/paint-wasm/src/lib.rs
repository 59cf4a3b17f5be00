//! WASM bridge for the canvas painter — exposes `paint-core` to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. Each export resolves the
//! page's `document`, paints the requested `<canvas>`, and throws a JS
//! `Error` carrying the failure message when the lookup or context fails.

mod console;
mod web;

pub use web::{WebCanvas, WebContext, WebDocument};

use paint_core::{Color, PaintConfig};
use wasm_bindgen::prelude::*;

fn js_error(msg: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&msg.to_string()).into()
}

fn current_document() -> Result<WebDocument, JsValue> {
    WebDocument::current().ok_or_else(|| js_error("no window.document available"))
}

fn paint_config(config: &PaintConfig) -> Result<(), JsValue> {
    console::setup();
    let mut document = current_document()?;
    paint_core::paint_with_config(&mut document, config).map_err(js_error)
}

/// Paint the default canvas: `#canv`, 400×400, solid red.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    paint_config(&PaintConfig::default())
}

/// Resize the canvas with id `surface_id` and fill it with `color`
/// (any CSS keyword, hex, or `rgb()`/`rgba()` string).
#[wasm_bindgen]
pub fn paint_canvas(surface_id: &str, width: u32, height: u32, color: &str) -> Result<(), JsValue> {
    let config = PaintConfig::from_parts(surface_id, width, height, color).map_err(js_error)?;
    paint_config(&config)
}

/// Paint from a JSON config, e.g. `{"surfaceId":"canv","width":400,"color":"red"}`.
/// Missing fields take the defaults of `run`.
#[wasm_bindgen]
pub fn paint_with_config(json: &str) -> Result<(), JsValue> {
    let config = PaintConfig::from_json(json).map_err(js_error)?;
    paint_config(&config)
}

/// Validate a color string. Returns JSON: `{"ok":true,"hex":"#FF0000"}`
/// or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_color(text: &str) -> String {
    let value = match Color::parse(text) {
        Ok(color) => serde_json::json!({ "ok": true, "hex": color.to_hex() }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    value.to_string()
}

/// Set the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`). Returns `false` for an unknown level.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    console::setup();
    console::set_level(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_color_accepts_keyword() {
        assert_eq!(validate_color("red"), r##"{"hex":"#FF0000","ok":true}"##);
    }

    #[test]
    fn validate_color_reports_error() {
        let out: serde_json::Value = serde_json::from_str(&validate_color("reddish")).unwrap();
        assert_eq!(out["ok"], false);
        assert_eq!(out["error"], "invalid color `reddish`");
    }

    #[test]
    fn log_level_names() {
        assert!(console::set_level("debug"));
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        assert!(!console::set_level("loud"));
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
