use super::*;

// =============================================================
// Light
// =============================================================

#[test]
fn light_translates_bold_spans() {
    let out = render_response_html("**Diagnosis**: worn pads, **replace** soon", ResponseFormat::Light);
    assert_eq!(out, "<strong>Diagnosis</strong>: worn pads, <strong>replace</strong> soon");
}

#[test]
fn light_leaves_unpaired_marker() {
    assert_eq!(render_response_html("a ** b", ResponseFormat::Light), "a ** b");
}

#[test]
fn light_bold_does_not_span_lines() {
    let out = render_response_html("**open\nclose**", ResponseFormat::Light);
    assert_eq!(out, "**open\nclose**");
}

#[test]
fn light_translates_leading_bullets_only() {
    let input = "**Tools Required**:\n- socket set\n  - torque wrench\nleft - right";
    let out = render_response_html(input, ResponseFormat::Light);
    assert_eq!(
        out,
        "<strong>Tools Required</strong>:\n\u{2022} socket set\n  \u{2022} torque wrench\nleft - right"
    );
}

#[test]
fn light_escapes_markup_before_translating() {
    let out = render_response_html("<script>x</script> **ok**", ResponseFormat::Light);
    assert_eq!(out, "&lt;script&gt;x&lt;/script&gt; <strong>ok</strong>");
}

// =============================================================
// Plain / Markdown
// =============================================================

#[test]
fn plain_only_escapes() {
    let out = render_response_html("**a** & <b>", ResponseFormat::Plain);
    assert_eq!(out, "**a** &amp; &lt;b&gt;");
}

#[test]
fn markdown_renders_lists_and_emphasis() {
    let out = render_response_html("**Steps**\n\n- jack up car\n- remove wheel", ResponseFormat::Markdown);
    assert!(out.contains("<strong>Steps</strong>"));
    assert!(out.contains("<li>jack up car</li>"));
}

#[test]
fn markdown_drops_raw_html() {
    let out = render_response_html("hello <img src=x onerror=alert(1)> world", ResponseFormat::Markdown);
    assert!(!out.contains("<img"));
    assert!(out.contains("hello"));
}
