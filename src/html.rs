//! HTML fragment builders.
//!
//! The pages are assembled from these small string-building helpers; there
//! is no templating engine.

use std::fmt::Write;

/// A full document: header, caller-supplied body, trailer.
pub fn document(body: &str, titles: &[&str], css: Option<&str>, script: Option<&str>) -> String {
    let mut out = header(titles, css, script);
    out.push_str(body);
    out.push_str(trailer());
    out
}

/// Document preamble through `</head>`.
pub fn header(titles: &[&str], css: Option<&str>, script: Option<&str>) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", titles.join(" "));
    if let Some(css) = css {
        let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", css);
    }
    if let Some(script) = script {
        out.push_str(script);
    }
    out.push_str("</head>\n");
    out
}

pub fn trailer() -> &'static str {
    "</html>\n"
}

/// Body element with the page heading.
pub fn body(content: &str, title: &str) -> String {
    format!("<body>\n<h1>{}</h1>\n{}</body>\n", title, content)
}

pub fn div(class: &str, content: &str) -> String {
    format!("<div class=\"{}\">{}</div>", class, content)
}

/// Table of pre-rendered cells. `widths` are per-column pixel widths;
/// `headers` may be empty.
pub fn table(rows: &[Vec<String>], headers: &[&str], widths: &[u32]) -> String {
    let mut out = String::from("<table>\n");
    for w in widths {
        let _ = writeln!(out, "<col width=\"{}\">", w);
    }
    if !headers.is_empty() {
        out.push_str("<tr>");
        for h in headers {
            let _ = write!(out, "<th>{}</th>", h);
        }
        out.push_str("</tr>\n");
    }
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", cell);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

pub fn input(kind: &str, name: &str, value: &str, class: &str) -> String {
    format!(
        "<input type=\"{}\" name=\"{}\" value=\"{}\" class=\"{}\">",
        kind, name, value, class
    )
}

pub fn form(content: &str, name: &str, action: &str) -> String {
    format!(
        "<form name=\"{}\" action=\"{}\" method=\"post\">\n{}</form>\n",
        name, action, content
    )
}

/// Reload the page every `seconds`. Goes into the document header.
pub fn refresh_script(seconds: u32) -> String {
    format!("<meta http-equiv=\"refresh\" content=\"{}\">\n", seconds)
}
