use std::collections::HashMap;

/// HTTP request verbs.
///
/// GET and POST are routed to pages. PUT, DELETE and HEAD are accepted by
/// the parser but answered with 501 Not Implemented. Any other verb token
/// fails verb lookup and becomes a 400 at the connection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Verb {
    /// Parses a verb from its request-line token (case-sensitive, as on
    /// the wire).
    ///
    /// # Example
    ///
    /// ```
    /// # use aquaweb::http::request::Verb;
    /// assert_eq!(Verb::from_str("GET"), Some(Verb::Get));
    /// assert_eq!(Verb::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Verb::Get),
            "POST" => Some(Verb::Post),
            "PUT" => Some(Verb::Put),
            "DELETE" => Some(Verb::Delete),
            "HEAD" => Some(Verb::Head),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
        }
    }
}

/// A parsed request.
///
/// `path` is origin-form with the query string stripped. `params` merges
/// the query string and, for POST, the form-encoded body; body values win
/// on key collision.
#[derive(Debug, Clone)]
pub struct Request {
    pub verb: Verb,
    pub path: String,
    pub params: HashMap<String, String>,
}

impl Request {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }
}
