use wasm_bindgen::prelude::*;
use web_sys::Element;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// True when `rect` lies entirely inside a `width` x `height` viewport.
pub fn fits(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}

fn px(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok()?.as_f64().filter(|&n| n > 0.0)
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document().and_then(|d| d.document_element());
    let width = px(window.inner_width())
        .or_else(|| root.as_ref().map(|el| el.client_width() as f64))?;
    let height = px(window.inner_height())
        .or_else(|| root.as_ref().map(|el| el.client_height() as f64))?;
    Some((width, height))
}

#[wasm_bindgen(js_name = isElementInViewport)]
pub fn is_element_in_viewport(el: &Element) -> bool {
    let Some((width, height)) = viewport_size() else {
        return false;
    };
    let bounds = el.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        bottom: bounds.bottom(),
        right: bounds.right(),
    };
    fits(rect, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, left: f64, bottom: f64, right: f64) -> Rect {
        Rect { top, left, bottom, right }
    }

    #[test]
    fn fully_visible() {
        assert!(fits(rect(10.0, 10.0, 300.0, 500.0), 1024.0, 768.0));
        assert!(fits(rect(0.0, 0.0, 768.0, 1024.0), 1024.0, 768.0));
    }

    #[test]
    fn above_the_top_is_not_visible() {
        assert!(!fits(rect(-1.0, 10.0, 200.0, 500.0), 1024.0, 768.0));
    }

    #[test]
    fn overflowing_any_edge_is_not_visible() {
        assert!(!fits(rect(10.0, -5.0, 200.0, 500.0), 1024.0, 768.0));
        assert!(!fits(rect(10.0, 10.0, 769.0, 500.0), 1024.0, 768.0));
        assert!(!fits(rect(10.0, 10.0, 200.0, 1025.0), 1024.0, 768.0));
    }
}
