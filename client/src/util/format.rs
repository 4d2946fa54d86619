//! Advice text to HTML.
//!
//! Every mode escapes the model's text first, so server output can never
//! inject markup of its own. `Light` then translates `**bold**` spans and
//! leading `- ` bullets; `Markdown` hands the text to `pulldown-cmark` with
//! raw HTML events dropped.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use advice::ResponseFormat;
use pulldown_cmark::{Event, Options, Parser, html};

const BULLET: &str = "\u{2022} ";

/// Render advice text as an HTML fragment.
pub fn render_response_html(text: &str, format: ResponseFormat) -> String {
    match format {
        ResponseFormat::Plain => escape_html(text),
        ResponseFormat::Light => render_light(text),
        ResponseFormat::Markdown => render_markdown(text),
    }
}

fn render_light(text: &str) -> String {
    escape_html(text)
        .split('\n')
        .map(|line| translate_bold(&translate_bullet(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn translate_bullet(line: &str) -> String {
    let body = line.trim_start();
    match body.strip_prefix("- ") {
        Some(rest) => {
            let indent = &line[..line.len() - body.len()];
            format!("{indent}{BULLET}{rest}")
        }
        None => line.to_owned(),
    }
}

/// Non-greedy `**x**` to `<strong>x</strong>`; an unpaired `**` is left as is.
fn translate_bold(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str("<strong>");
        out.push_str(&after[..end]);
        out.push_str("</strong>");
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
