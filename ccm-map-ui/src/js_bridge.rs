//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The mapbox-gl glue lives in `assets/js/case-map.js`. It is evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals, and the
//! `wasm_bindgen` closures that carry pointer events back into Rust.

use ccm_map::{HoverCommand, MapConfig, PointLayer, PointerHit, TooltipAnchor};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::popup::render_popup_html;

// Embed the map glue at compile time
static CASE_MAP_JS: &str = include_str!("../assets/js/case-map.js");

const MAPBOX_GL_JS: &str = "https://api.mapbox.com/mapbox-gl-js/v1.9.1/mapbox-gl.js";
const MAPBOX_GL_CSS: &str = "https://api.mapbox.com/mapbox-gl-js/v1.9.1/mapbox-gl.css";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CCM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Add the mapbox-gl script and stylesheet to the page unless already present.
pub fn load_mapbox() {
    call_js(&format!(
        r#"
        if (typeof mapboxgl === 'undefined' && !document.getElementById('ccm-mapbox-js')) {{
            var css = document.createElement('link');
            css.rel = 'stylesheet';
            css.href = {css};
            document.head.appendChild(css);
            var js = document.createElement('script');
            js.id = 'ccm-mapbox-js';
            js.src = {js};
            document.head.appendChild(js);
        }}
        "#,
        css = js_string(MAPBOX_GL_CSS),
        js = js_string(MAPBOX_GL_JS),
    ));
}

/// Create the map in `container_id` once mapbox-gl has loaded.
///
/// The glue script is stored on window and evaluated at global scope from
/// the polling callback, then each function is promoted to `window.*`.
pub fn init_map(container_id: &str, config: &MapConfig, access_token: &str) {
    load_mapbox();

    let store_js = format!("window.__ccmMapScripts = {};", js_string(CASE_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let options = serde_json::json!({
        "accessToken": access_token,
        "style": config.style_url,
        "view": config.view,
    });
    let options_json = js_string(&options.to_string());
    let container = js_string(container_id);

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof mapboxgl !== 'undefined' && document.getElementById({container})) {{
                    clearInterval(poll);
                    if (window.__ccmMapScripts) {{
                        (0, eval)(window.__ccmMapScripts);
                        delete window.__ccmMapScripts;
                        if (typeof initCaseMap !== 'undefined') window.initCaseMap = initCaseMap;
                        if (typeof setPointLayer !== 'undefined') window.setPointLayer = setPointLayer;
                        if (typeof clearPointLayer !== 'undefined') window.clearPointLayer = clearPointLayer;
                        if (typeof showPopup !== 'undefined') window.showPopup = showPopup;
                        if (typeof hidePopup !== 'undefined') window.hidePopup = hidePopup;
                    }}
                    try {{
                        window.initCaseMap({container}, {options_json});
                        window.__ccmMapInitialized = true;
                        console.log('CCM map initialized');
                    }} catch(e) {{ console.error('[CCM] initCaseMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the point layer. Waits for `init_map` to finish; the glue itself
/// defers until the style has loaded.
pub fn set_point_layer(layer: &PointLayer) {
    let layer_json = match serde_json::to_string(layer) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize point layer: {}", e);
            return;
        }
    };
    let layer_json = js_string(&layer_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ccmMapInitialized && typeof window.setPointLayer !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.setPointLayer({layer_json});
                    }} catch(e) {{ console.error('[CCM] setPointLayer error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Remove the point layer, e.g. after a fetch produced no dataset.
pub fn clear_point_layer() {
    call_js("if (window.clearPointLayer) window.clearPointLayer();");
}

/// Show the popup at `anchor` and switch the cursor to a pointer.
pub fn show_popup(anchor: TooltipAnchor, html: &str) {
    call_js(&format!(
        "if (window.showPopup) window.showPopup({}, {}, {});",
        anchor.lng,
        anchor.lat,
        js_string(html)
    ));
}

/// Remove the popup and reset the cursor.
pub fn hide_popup() {
    call_js("if (window.hidePopup) window.hidePopup();");
}

/// Carry out a session command on the map.
pub fn apply_hover_command(command: &HoverCommand) {
    match command {
        HoverCommand::Show {
            anchor, content, ..
        } => show_popup(*anchor, &render_popup_html(content)),
        HoverCommand::Hide => hide_popup(),
    }
}

/// Install the pointer callbacks the glue calls from its layer events.
///
/// Move events arrive as `{"id": n, "lng": x, "lat": y}` JSON strings. The
/// closures live for the rest of the page.
pub fn register_pointer_handlers<M, L>(mut on_move: M, mut on_leave: L)
where
    M: FnMut(PointerHit) + 'static,
    L: FnMut() + 'static,
{
    let move_closure = Closure::<dyn FnMut(String)>::new(move |json: String| {
        match serde_json::from_str::<PointerHit>(&json) {
            Ok(hit) => on_move(hit),
            Err(e) => log::warn!("Ignoring malformed pointer event {:?}: {}", json, e),
        }
    });
    let leave_closure = Closure::<dyn FnMut()>::new(move || on_leave());

    let global = js_sys::global();
    let move_fn: &JsValue = move_closure.as_ref();
    let leave_fn: &JsValue = leave_closure.as_ref();
    for (name, callback) in [("__ccmPointerMove", move_fn), ("__ccmPointerLeave", leave_fn)] {
        if let Err(e) = js_sys::Reflect::set(&global, &JsValue::from_str(name), callback) {
            log::error!("Failed to register {}: {:?}", name, e);
        }
    }
    move_closure.forget();
    leave_closure.forget();
}

/// GET `url` and return the body text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window available")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP status {}", response.status()));
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
