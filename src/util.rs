// Small shared helpers.

/// Thousands separators for score display (12345 -> "12,345").
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

/// Display name handed over by the embedding page via the `user` query
/// parameter, if any.
pub fn query_username() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let raw = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("user="))?;
    let decoded = js_sys::decode_uri_component(raw).ok()?;
    let name = String::from(decoded);
    if name.is_empty() { None } else { Some(name) }
}
