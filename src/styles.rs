use log::debug;

use crate::dom::Document;

/// Identifier of the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "gh-widget-styles";

/// Stylesheet for both themes; dark overrides hang off `.gh-widget.dark`
pub const WIDGET_CSS: &str = r#"
.gh-widget {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    max-width: 400px;
    border: 1px solid #d0d7de;
    border-radius: 6px;
    padding: 16px;
    background: #ffffff;
    color: #1f2328;
    box-sizing: border-box;
}
.gh-widget * { box-sizing: border-box; }
.gh-widget-header { display: flex; align-items: flex-start; gap: 12px; margin-bottom: 12px; }
.gh-widget-avatar { width: 48px; height: 48px; border-radius: 6px; flex-shrink: 0; }
.gh-widget-title-section { flex: 1; min-width: 0; }
.gh-widget-repo-link {
    font-size: 16px;
    font-weight: 600;
    color: #0969da;
    text-decoration: none;
    word-break: break-word;
}
.gh-widget-repo-link:hover { text-decoration: underline; }
.gh-widget-owner { font-size: 12px; color: #656d76; margin-top: 2px; }
.gh-widget-description {
    font-size: 14px;
    color: #1f2328;
    line-height: 1.5;
    margin-bottom: 12px;
    word-break: break-word;
}
.gh-widget-description:empty { display: none; }
.gh-widget-stats {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin-bottom: 12px;
    font-size: 12px;
    color: #656d76;
}
.gh-widget-stat { display: flex; align-items: center; gap: 4px; }
.gh-widget-stat svg { width: 16px; height: 16px; fill: currentColor; }
.gh-widget-stat-value { font-weight: 600; color: #1f2328; }
.gh-widget-languages { margin-top: 12px; }
.gh-widget-lang-bar {
    display: flex;
    height: 8px;
    border-radius: 4px;
    overflow: hidden;
    background: #eaeef2;
    margin-bottom: 8px;
}
.gh-widget-lang-segment { height: 100%; transition: width 0.3s ease; }
.gh-widget-lang-list { display: flex; flex-wrap: wrap; gap: 12px; font-size: 12px; }
.gh-widget-lang-item { display: flex; align-items: center; gap: 4px; }
.gh-widget-lang-dot { width: 10px; height: 10px; border-radius: 50%; flex-shrink: 0; }
.gh-widget-lang-name { color: #1f2328; font-weight: 500; }
.gh-widget-lang-percent { color: #656d76; }
.gh-widget-traffic { margin-top: 16px; padding-top: 12px; border-top: 1px solid #d0d7de; }
.gh-widget-traffic-title {
    font-size: 12px;
    font-weight: 600;
    color: #656d76;
    margin-bottom: 8px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}
.gh-widget-traffic-stats { display: flex; gap: 20px; font-size: 12px; }
.gh-widget-traffic-item { display: flex; flex-direction: column; }
.gh-widget-traffic-value { font-size: 18px; font-weight: 600; color: #1f2328; }
.gh-widget-traffic-label { color: #656d76; }
.gh-widget-loading { text-align: center; padding: 20px; color: #656d76; }
.gh-widget-error {
    text-align: center;
    padding: 20px;
    color: #cf222e;
    background: #ffebe9;
    border-radius: 6px;
}
.gh-widget-footer {
    margin-top: 12px;
    padding-top: 12px;
    border-top: 1px solid #d0d7de;
    display: flex;
    align-items: center;
    gap: 6px;
    font-size: 11px;
    color: #656d76;
}
.gh-widget-footer svg { width: 16px; height: 16px; }
.gh-widget.dark { background: #0d1117; border-color: #30363d; color: #e6edf3; }
.gh-widget.dark .gh-widget-repo-link { color: #58a6ff; }
.gh-widget.dark .gh-widget-owner,
.gh-widget.dark .gh-widget-stats,
.gh-widget.dark .gh-widget-lang-percent,
.gh-widget.dark .gh-widget-traffic-label,
.gh-widget.dark .gh-widget-traffic-title,
.gh-widget.dark .gh-widget-footer { color: #8b949e; }
.gh-widget.dark .gh-widget-description,
.gh-widget.dark .gh-widget-stat-value,
.gh-widget.dark .gh-widget-lang-name,
.gh-widget.dark .gh-widget-traffic-value { color: #e6edf3; }
.gh-widget.dark .gh-widget-lang-bar { background: #21262d; }
.gh-widget.dark .gh-widget-traffic,
.gh-widget.dark .gh-widget-footer { border-color: #30363d; }
.gh-widget.dark .gh-widget-error { background: #3d1d1d; color: #ff7b72; }
"#;

/// Append the widget stylesheet once per document
pub fn ensure_styles_injected<D: Document + ?Sized>(doc: &D) {
    if doc.insert_style_once(STYLE_ELEMENT_ID, WIDGET_CSS) {
        debug!("Injected widget stylesheet '{}'", STYLE_ELEMENT_ID);
    }
}
