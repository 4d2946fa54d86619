//! Display timestamps for new history items.

/// Current local time, formatted the way the browser formats dates for the
/// user's locale. Empty outside the browser.
pub fn now_timestamp() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
