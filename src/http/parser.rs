use std::collections::HashMap;

use crate::http::request::{Request, Verb};

#[derive(Debug)]
pub enum ParseError {
    /// More bytes are needed before a full request is present.
    Incomplete,
    /// Request line is missing or not `VERB PATH HTTP/x.x`.
    InvalidRequestLine,
    /// Verb token is not one of the five recognized verbs.
    UnknownVerb(String),
    InvalidHeader,
    InvalidContentLength,
    /// Header section is not valid UTF-8.
    InvalidEncoding,
}

/// Parses one request out of an accumulated byte buffer.
///
/// Returns the request and the number of bytes it consumed.
/// `ParseError::Incomplete` means the caller should read more: the header
/// terminator has not arrived yet, or a declared Content-Length exceeds
/// the body bytes buffered so far.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split_whitespace();

    let verb_str = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    parts.next().ok_or(ParseError::InvalidRequestLine)?; // HTTP version, unused

    let verb =
        Verb::from_str(verb_str).ok_or_else(|| ParseError::UnknownVerb(verb_str.to_string()))?;

    // Headers. Only Content-Length matters to this server.
    let mut content_length = 0usize;
    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        if key.trim().eq_ignore_ascii_case("content-length") {
            content_length = value
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidContentLength)?;
        }
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }
    let body = &body_bytes[..content_length];

    let (path, query) = split_target(target);
    let mut params = parse_params(query);
    if verb == Verb::Post {
        // form body wins over the query string on key collision
        params.extend(parse_params(std::str::from_utf8(body).unwrap_or("")));
    }

    let request = Request {
        verb,
        path: path.to_string(),
        params,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

/// Splits a request target into path and query string (without the `?`).
fn split_target(target: &str) -> (&str, &str) {
    match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    }
}

fn parse_params(encoded: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect()
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
