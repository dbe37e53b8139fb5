//! HTML document template for server-rendered pages.
//!
//! DESIGN
//! ======
//! The server owns the full document: doctype, head, the `#app` mount
//! element, and the script tags that boot the browser bundle. Rendered
//! app markup is injected into `#app` so the client can mount over it.
//! Bootstrap state is embedded as `window.initialState` in the head,
//! before any bundle script, so it is always defined by the time one
//! runs.

use serde_json::Value;

use manifest::Mode;

#[cfg(test)]
#[path = "tmpl_test.rs"]
mod tmpl_test;

/// CDN stylesheet reset applied before any bundle CSS.
pub const NORMALIZE_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/normalize/8.0.1/normalize.min.css";

/// Runtime-support script tag for development pages.
const DEV_RUNTIME_SCRIPTS: &str = "<script async src=\"https://cdn.jsdelivr.net/npm/es-module-shims@1/dist/es-module-shims.js\"></script>";

/// Runtime-support script tag for production pages.
const PROD_RUNTIME_SCRIPTS: &str = "<script async src=\"https://cdn.jsdelivr.net/npm/es-module-shims@1/dist/es-module-shims.min.js\"></script>";

/// Inputs for one rendered document.
#[derive(Clone, Debug)]
pub struct TmplOptions<'a> {
    /// Text for the `<title>` element.
    pub title: &'a str,
    /// Stylesheet `<link>` tags, already formatted.
    pub styles: &'a str,
    /// Pre-rendered app markup injected into the `#app` element.
    pub content: &'a str,
    /// Bootstrap store state embedded as `window.initialState`.
    pub initial_state: &'a Value,
    /// Bundle `<script>` tags, already formatted.
    pub scripts: &'a str,
    /// CSS fingerprint marker appended verbatim at the end of `<body>`.
    pub css_hash: &'a str,
}

/// Render a complete HTML document.
#[must_use]
pub fn render_document(options: &TmplOptions<'_>, mode: Mode) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta http-equiv="X-UA-Compatible" content="ie=edge">
  <title>{title}</title>
  {styles}
  <link href="{normalize}" rel="stylesheet">
  <script>window.initialState = {initial_state};</script>
</head>
<body>
  <div id="app">{content}</div>
  {runtime_scripts}
  {scripts}
  {css_hash}
</body>
</html>
"#,
        title = options.title,
        normalize = NORMALIZE_CSS_URL,
        styles = options.styles,
        initial_state = bootstrap_json(options.initial_state),
        content = options.content,
        runtime_scripts = runtime_scripts(mode),
        scripts = options.scripts,
        css_hash = options.css_hash,
    )
}

/// Mode-specific runtime-support script tags. The development and
/// production sets share no URLs, so a rendered page identifies its
/// mode by script URL alone.
#[must_use]
pub fn runtime_scripts(mode: Mode) -> &'static str {
    match mode {
        Mode::Development => DEV_RUNTIME_SCRIPTS,
        Mode::Production => PROD_RUNTIME_SCRIPTS,
    }
}

/// Serialize bootstrap state for embedding inside a `<script>` element.
/// `<`, `>`, and `&` in string values become `\u` escapes, so state
/// text can never terminate the script element early. The output stays
/// valid JSON.
#[must_use]
pub fn bootstrap_json(state: &Value) -> String {
    // Infallible: a Value always serializes (non-finite numbers cannot
    // be constructed through serde_json::Number).
    let json = serde_json::to_string(state).unwrap_or_default();
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
