use shared::SubmittedAt;
use wasm_bindgen::JsValue;

use crate::services::logging::Logger;

const FALLBACK_LOCALE: &str = "en-US";

/// Language tag reported by the browser, e.g. "de-DE"
pub fn browser_locale() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Render a submission timestamp in the browser's locale.
///
/// Missing values render empty; values that cannot be parsed are shown as-is.
pub fn format_submitted_at(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return String::new();
    };

    match SubmittedAt::parse(raw) {
        Ok(submitted) => {
            let date = js_sys::Date::new(&JsValue::from_f64(submitted.epoch_millis() as f64));
            date.to_locale_string(&browser_locale(), &JsValue::UNDEFINED).into()
        }
        Err(e) => {
            Logger::warn_with_component("date-utils", &format!("Cannot format submission time: {}", e));
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_timestamp_is_empty() {
        assert_eq!(format_submitted_at(None), "");
        assert_eq!(format_submitted_at(Some("  ")), "");
    }

    #[wasm_bindgen_test]
    fn test_unparseable_timestamp_is_shown_raw() {
        assert_eq!(format_submitted_at(Some("last week")), "last week");
    }

    #[wasm_bindgen_test]
    fn test_fixed_instant_formats_to_a_date() {
        let raw = "2024-03-13T15:04:05.000Z";
        let submitted = SubmittedAt::parse(raw).unwrap();
        let shown = format_submitted_at(Some(raw));
        assert_ne!(shown, raw);

        // The locale rendering must read back as the same instant (to the second)
        let parsed = js_sys::Date::parse(&shown);
        assert!(!parsed.is_nan(), "locale rendering {:?} is not a parseable date", shown);
        assert!((parsed - submitted.epoch_millis() as f64).abs() < 1000.0);
    }
}
