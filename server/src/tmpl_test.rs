use super::*;

use serde_json::json;

fn render_with(content: &str, state: &Value, mode: Mode) -> String {
    render_document(
        &TmplOptions {
            title: "T",
            styles: "",
            content,
            initial_state: state,
            scripts: "<script type=\"module\">import init from '/statics/app.js'; init('/statics/app_bg.wasm');</script>",
            css_hash: "<!-- css deadbeef -->",
        },
        mode,
    )
}

#[test]
fn document_contains_title_element() {
    let html = render_with("", &json!({}), Mode::Development);
    assert!(html.contains("<title>T</title>"));
}

#[test]
fn caller_fragments_pass_through_verbatim() {
    let html = render_document(
        &TmplOptions {
            title: "T",
            styles: "<style></style>",
            content: "<div></div>",
            initial_state: &json!({"a": 1}),
            scripts: "<script></script>",
            css_hash: "h",
        },
        Mode::Production,
    );
    assert!(html.contains("<title>T</title>"));
    assert!(html.contains(r#"window.initialState = {"a":1};"#));
    assert!(html.contains(r#"<div id="app"><div></div></div>"#));
    assert!(html.contains("<style></style>"));
    assert!(html.contains("<script></script>"));
}

#[test]
fn document_embeds_initial_state_verbatim() {
    let html = render_with("", &json!({"a": 1}), Mode::Development);
    assert!(html.contains(r#"window.initialState = {"a":1};"#));
}

#[test]
fn empty_content_leaves_app_element_empty() {
    let html = render_with("", &json!({}), Mode::Development);
    assert!(html.contains(r#"<div id="app"></div>"#));
}

#[test]
fn content_is_injected_inside_app_element() {
    let html = render_with("<div></div>", &json!({}), Mode::Development);
    assert!(html.contains(r#"<div id="app"><div></div></div>"#));
}

#[test]
fn runtime_script_sets_are_disjoint_across_modes() {
    let dev = runtime_scripts(Mode::Development);
    let prod = runtime_scripts(Mode::Production);
    assert_ne!(dev, prod);

    let dev_html = render_with("", &json!({}), Mode::Development);
    let prod_html = render_with("", &json!({}), Mode::Production);
    assert!(dev_html.contains(dev));
    assert!(prod_html.contains(prod));
    assert!(!dev_html.contains(prod));
    assert!(!prod_html.contains(dev));
}

#[test]
fn normalize_stylesheet_is_linked_in_head() {
    let html = render_with("", &json!({}), Mode::Development);
    assert!(html.contains(NORMALIZE_CSS_URL));
}

#[test]
fn css_hash_marker_lands_after_scripts_before_body_end() {
    let html = render_with("", &json!({}), Mode::Production);
    let scripts_at = html.find("import init from").expect("bundle script present");
    let marker_at = html.find("<!-- css deadbeef -->").expect("marker present");
    let body_end_at = html.rfind("</body>").expect("body end present");
    assert!(scripts_at < marker_at);
    assert!(marker_at < body_end_at);
}

#[test]
fn initial_state_script_precedes_bundle_scripts() {
    let html = render_with("", &json!({}), Mode::Production);
    let state_at = html.find("window.initialState").expect("state present");
    let scripts_at = html.find("import init from").expect("bundle script present");
    assert!(state_at < scripts_at);
}

#[test]
fn bootstrap_json_escapes_markup_characters() {
    let escaped = bootstrap_json(&json!({"a": "<b>&"}));
    assert_eq!(escaped, r#"{"a":"\u003cb\u003e\u0026"}"#);
}

#[test]
fn state_cannot_close_the_bootstrap_script() {
    let html = render_with("", &json!({"html": "</script><script>alert(1)</script>"}), Mode::Development);
    assert!(!html.contains("</script><script>alert(1)"));
    assert!(html.contains("\\u003c/script\\u003e"));
}

#[test]
fn escaped_state_still_parses_as_json() {
    let state = json!({"name": "A & B <Ltd>", "n": 3});
    let escaped = bootstrap_json(&state);
    let parsed: Value = serde_json::from_str(&escaped).expect("valid json");
    assert_eq!(parsed, state);
}
