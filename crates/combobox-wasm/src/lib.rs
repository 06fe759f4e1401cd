//! # combobox-wasm
//!
//! The combobox state machine compiled to WebAssembly.
//!
//! The page owns the DOM: it forwards native events to a `JsCombobox` and
//! mirrors `renderTree()` back into its input and list elements.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { JsCombobox } from 'combobox-wasm';
//!
//! await init();
//!
//! const combo = new JsCombobox("fruit");
//! combo.setOptions(["Apple", "Banana", "Cherry"]);
//! combo.onChange(({ value }) => console.log("picked", value));
//!
//! input.addEventListener("input", () => { combo.onInput(input.value); draw(); });
//! input.addEventListener("keydown", (e) => {
//!     const result = combo.onKeydown(e.key);
//!     if (result.preventDefault) e.preventDefault();
//!     draw();
//! });
//! ```
//!
//! ## Available APIs
//!
//! - `JsCombobox` - options, event handlers, `value()` and `renderTree()`
//! - `version()` - module version

#![forbid(unsafe_code)]

use combobox::{ChangeEvent, Combobox, EventResult, KeyMsg};
use js_sys::{Function, JSON, Object, Reflect};
use wasm_bindgen::prelude::*;

/// Install the panic hook for readable errors in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// JavaScript-facing combobox.
///
/// Handlers that may suppress the native default action return
/// `{ preventDefault, change }`, where `change` is `{ value }` or `null`.
#[wasm_bindgen]
pub struct JsCombobox {
    inner: Combobox,
    callbacks: Vec<Function>,
}

#[wasm_bindgen]
impl JsCombobox {
    /// Create an empty combobox with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(id: &str) -> Self {
        Self {
            inner: Combobox::new(id),
            callbacks: Vec::new(),
        }
    }

    /// Replace the option set.
    #[wasm_bindgen(js_name = "setOptions")]
    pub fn set_options(&mut self, options: Vec<String>) {
        self.inner.set_options(options);
    }

    /// Read the option set back. Throws if the attribute is malformed.
    pub fn options(&self) -> Result<Vec<String>, JsError> {
        self.inner.options().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set the options from their JSON attribute form.
    #[wasm_bindgen(js_name = "setOptionsAttribute")]
    pub fn set_options_attribute(&mut self, attribute: &str) -> Result<(), JsError> {
        self.inner
            .set_options_attribute(attribute)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// The raw JSON option attribute.
    #[wasm_bindgen(js_name = "optionsAttribute")]
    pub fn options_attribute(&self) -> String {
        self.inner.options_attribute().to_string()
    }

    /// Register a callback for committed values; it receives `{ value }`.
    #[wasm_bindgen(js_name = "onChange")]
    pub fn on_change(&mut self, callback: Function) {
        self.callbacks.push(callback);
    }

    /// Forward an `input` event with the input's new value.
    #[wasm_bindgen(js_name = "onInput")]
    pub fn on_input(&mut self, value: &str) {
        self.inner.on_input(value);
    }

    /// Forward a `keydown` event by its `key` name.
    #[wasm_bindgen(js_name = "onKeydown")]
    pub fn on_keydown(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let result = match KeyMsg::from_dom_key(key) {
            Some(msg) => self.inner.on_keydown(&msg),
            None => EventResult::ignored(),
        };
        self.finish(&result)
    }

    /// Forward a `focus` event.
    #[wasm_bindgen(js_name = "onFocus")]
    pub fn on_focus(&mut self) {
        self.inner.on_focus();
    }

    /// Forward a `blur` event.
    #[wasm_bindgen(js_name = "onBlur")]
    pub fn on_blur(&mut self) {
        self.inner.on_blur();
    }

    /// Forward `mouseover` on the row at `index`.
    #[wasm_bindgen(js_name = "onHover")]
    pub fn on_hover(&mut self, index: usize) {
        self.inner.on_hover(index);
    }

    /// Forward `mousedown` on the row at `index`.
    #[wasm_bindgen(js_name = "onPress")]
    pub fn on_press(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let result = self.inner.on_press(index);
        self.finish(&result)
    }

    /// The current text value.
    pub fn value(&self) -> String {
        self.inner.value()
    }

    /// Index of the highlighted row, or -1.
    #[wasm_bindgen(js_name = "selectedIndex")]
    pub fn selected_index(&self) -> i32 {
        self.inner
            .cursor()
            .index()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// The render tree as a plain JS object.
    #[wasm_bindgen(js_name = "renderTree")]
    pub fn render_tree(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.inner.render_tree())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        JSON::parse(&json)
    }
}

impl JsCombobox {
    /// Notify callbacks and convert a handler result for JS.
    fn finish(&self, result: &EventResult) -> Result<JsValue, JsValue> {
        let change = match &result.change {
            Some(event) => {
                let change = change_object(event)?;
                for callback in &self.callbacks {
                    callback.call1(&JsValue::NULL, &change)?;
                }
                change
            }
            None => JsValue::NULL,
        };

        let out = Object::new();
        Reflect::set(&out, &"preventDefault".into(), &result.prevent_default.into())?;
        Reflect::set(&out, &"change".into(), &change)?;
        Ok(out.into())
    }

    /// The wrapped combobox.
    pub fn inner(&self) -> &Combobox {
        &self.inner
    }
}

fn change_object(event: &ChangeEvent) -> Result<JsValue, JsValue> {
    let out = Object::new();
    Reflect::set(&out, &"value".into(), &event.value.as_str().into())?;
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_state_without_js() {
        let mut combo = JsCombobox::new("fruit");
        combo.set_options(vec!["Apple".into(), "Banana".into()]);
        combo.on_focus();
        combo.on_input("ban");
        combo.on_hover(1);
        assert_eq!(combo.selected_index(), 1);
        assert_eq!(combo.options_attribute(), r#"["Apple","Banana"]"#);
        assert!(combo.inner().is_expanded());
    }
}
