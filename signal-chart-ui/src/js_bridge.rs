//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes data for those globals, reads back bubble clicks,
//! and fetches the CSV through the browser.

use log::error;
use signal_core::SignalError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BUBBLE_CHART_JS: &str = include_str!("../assets/js/bubble-chart.js");
static GAUGE_CHART_JS: &str = include_str!("../assets/js/gauge-chart.js");

/// Container attribute holding the last clicked bubble's date.
const CLICKED_DATE_ATTR: &str = "data-clicked-date";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Signal JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is present, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BUBBLE_CHART_JS, GAUGE_CHART_JS].join("\n");

    let store_js = format!(
        "window.__signalChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__signalChartsReady || window.__signalChartsPending) return;
            window.__signalChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__signalChartScripts);
                    delete window.__signalChartScripts;
                    if (typeof renderBubbleChart !== 'undefined') window.renderBubbleChart = renderBubbleChart;
                    if (typeof renderGaugeChart !== 'undefined') window.renderGaugeChart = renderGaugeChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__signalChartsReady = true;
                    console.log('Signal charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the scripts, the render function and the container exist,
/// then call `window.<render_fn>(id, data, config)`.
///
/// `data_json` and `config_json` are inlined as JS object literals.
fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__signalChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', {data_json}, {config_json});
                    }} catch(e) {{ console.error('[Signal] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the signal-by-date bubble matrix.
pub fn render_bubble_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBubbleChart", container_id, data_json, config_json);
}

/// Render the daily gauge.
pub fn render_gauge_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGaugeChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Read and clear the date stored by the bubble chart's click handler.
///
/// `bubble-chart.js` writes the clicked bubble's date to a
/// `data-clicked-date` attribute on its container before the click bubbles
/// up to the Dioxus `onclick` on the wrapper, which calls this.
pub fn take_clicked_date(container_id: &str) -> Option<String> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(container_id)?;
    let date = element.get_attribute(CLICKED_DATE_ATTR)?;
    if let Err(e) = element.remove_attribute(CLICKED_DATE_ATTR) {
        error!("Failed to clear clicked date: {:?}", e);
    }
    Some(date)
}

/// Fetch a text resource with the browser `fetch` API.
///
/// Transport failures and non-success statuses both map to
/// [`SignalError::Network`].
pub async fn fetch_text(url: &str) -> Result<String, SignalError> {
    let window = web_sys::window().ok_or_else(|| network_error("no window"))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network_error(&describe(&e)))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|e| network_error(&describe(&e)))?;

    if !response.ok() {
        return Err(network_error(&format!("HTTP status {}", response.status())));
    }

    let text_promise = response.text().map_err(|e| network_error(&describe(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| network_error(&describe(&e)))?;
    text.as_string()
        .ok_or_else(|| network_error("response body is not text"))
}

fn network_error(message: &str) -> SignalError {
    error!("Signal CSV fetch failed: {}", message);
    SignalError::Network(message.to_string())
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
