use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};

/// Parameters object passed to `gtag("event", action, params)`.
#[derive(Debug, Serialize)]
pub struct EventParams<'a> {
    pub event_category: &'a str,
    pub event_label: &'a str,
}

fn gtag() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Forwards an event to Google Analytics when the page has loaded `gtag`.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: &str, action: &str, label: Option<String>) {
    let Some(gtag) = gtag() else {
        debug!("gtag not loaded, dropping event {}/{}", category, action);
        return;
    };
    let params = EventParams {
        event_category: category,
        event_label: label.as_deref().unwrap_or(""),
    };
    let params = match serde_wasm_bindgen::to_value(&params) {
        Ok(params) => params,
        Err(err) => {
            warn!("Could not serialize analytics params: {}", err);
            return;
        }
    };
    if let Err(err) = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(action), &params) {
        warn!("gtag call failed: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_use_ga4_field_names() {
        let params = EventParams {
            event_category: "news",
            event_label: "",
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "event_category": "news", "event_label": "" })
        );
    }
}
