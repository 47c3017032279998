//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js figure renderer lives in `assets/js/charts.js` and is embedded
//! at compile time. It is evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! figure JSON and call those globals.

// Embed the D3 renderer at compile time
static CHARTS_JS: &str = include_str!("../assets/js/charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('lilac JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart renderer with a wait-for-D3 polling loop.
///
/// If D3 is not already on the page, a script tag pointing at the d3 v7
/// CDN build is injected first. The renderer JS defines functions via
/// `function` declarations; to ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect `eval()` once D3 is ready and then explicitly
/// promoted to `window.*`.
pub fn init_charts() {
    // Store the script on window so the polling callback can eval it at
    // global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__lilacChartScripts = {};",
        serde_json::to_string(CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (typeof d3 === 'undefined' && !document.getElementById('lilac-d3')) {
                var tag = document.createElement('script');
                tag.id = 'lilac-d3';
                tag.src = 'https://d3js.org/d3.v7.min.js';
                document.head.appendChild(tag);
            }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__lilacChartScripts);
                    delete window.__lilacChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof downloadChartSvg !== 'undefined') window.downloadChartSvg = downloadChartSvg;
                    window.__lilacChartsReady = true;
                    console.log('lilac charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a figure description into the given container.
///
/// Uses a polling loop to wait for D3.js to load, the renderer to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_figure(container_id: &str, figure_json: &str) {
    let escaped = figure_json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lilacChartsReady &&
                    typeof window.renderFigure !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderFigure('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[lilac] renderFigure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Download a rendered chart's SVG. Only meaningful after the chart has
/// been rendered; the toolbar button that calls this is only visible then.
pub fn download_chart_svg(container_id: &str, filename: &str) {
    call_js(&format!(
        "if (window.downloadChartSvg) window.downloadChartSvg('{container_id}', '{filename}');",
    ));
}

/// Set the browser tab title for the current page.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
