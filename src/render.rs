// src/render.rs
//! Pure mapping from service snapshots to view markup.
//!
//! Every call recomputes the whole output from its argument alone. Nothing
//! from a previous render is consulted, so responses can be rendered in
//! whatever order they arrive.

use crate::models::{ExpressionRecord, EvalValue};
use crate::navigation;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fmt;

/// Format used for creation timestamps, in the viewer's local zone.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendered content of one view container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view shape the reconciler knows how to draw.
pub trait Render {
    fn render_into(&self, out: &mut String);
}

/// Renders `view` from scratch.
pub fn render<V: Render + ?Sized>(view: &V) -> Markup {
    let mut out = String::new();
    view.render_into(&mut out);
    Markup(out)
}

/// The "all expressions" list, one item per record in server order.
pub struct ListView<'a>(pub &'a [ExpressionRecord]);

/// The detail panel of a single expression.
pub struct DetailView<'a>(pub &'a ExpressionRecord);

impl Render for ListView<'_> {
    fn render_into(&self, out: &mut String) {
        for record in self.0 {
            out.push_str(&format!(
                "<a class=\"expression-item\" href=\"{href}\">\
                 <div><b>ID:</b> {id}<br><b>Expression:</b> {expr}</div>\
                 <div>{status}{result}</div>\
                 </a>\n",
                href = escape(&navigation::detail_href(&record.id)),
                id = escape(record.id.as_str()),
                expr = escape(&record.expression),
                status = status_badge("div", &record.status),
                result = record
                    .result
                    .as_ref()
                    .map(|r| format!("<div class=\"result\">= {}</div>", escape_value(r)))
                    .unwrap_or_default(),
            ));
        }
    }
}

impl Render for DetailView<'_> {
    fn render_into(&self, out: &mut String) {
        let record = self.0;
        out.push_str(&format!("<p><b>ID:</b> {}</p>\n", escape(record.id.as_str())));
        out.push_str(&format!(
            "<p><b>Expression:</b> {}</p>\n",
            escape(&record.expression)
        ));
        out.push_str(&format!(
            "<p><b>Status:</b> {}</p>\n",
            status_badge("span", &record.status)
        ));
        if let Some(result) = &record.result {
            out.push_str(&format!(
                "<p class=\"result\"><b>Result:</b> {}</p>\n",
                escape_value(result)
            ));
        }
        if let Some(created_at) = &record.created_at {
            out.push_str(&format!(
                "<p class=\"created\"><b>Created:</b> {}</p>\n",
                escape(&format_timestamp(created_at))
            ));
        }
    }
}

fn status_badge(tag: &str, status: &str) -> String {
    format!(
        "<{tag} class=\"status {class}\">{text}</{tag}>",
        class = status_class(status),
        text = escape(status),
    )
}

fn escape_value(value: &EvalValue) -> String {
    escape(&value.to_string())
}

/// Turns an opaque status into a single CSS class token.
pub fn status_class(status: &str) -> String {
    status
        .chars()
        .flat_map(|c| {
            let c = if c.is_alphanumeric() || c == '_' { c } else { '-' };
            c.to_lowercase()
        })
        .collect()
}

/// Formats a service timestamp in the local zone. Values that are neither
/// RFC 3339 nor `YYYY-MM-DD HH:MM:SS` (taken as UTC) are shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format(DISPLAY_TIME_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return naive
            .and_utc()
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string();
    }
    raw.to_string()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
