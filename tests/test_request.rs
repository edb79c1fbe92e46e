use std::collections::HashMap;

use aquaweb::http::request::{Request, Verb};

#[test]
fn test_verb_from_string() {
    assert_eq!(Verb::from_str("GET"), Some(Verb::Get));
    assert_eq!(Verb::from_str("POST"), Some(Verb::Post));
    assert_eq!(Verb::from_str("PUT"), Some(Verb::Put));
    assert_eq!(Verb::from_str("DELETE"), Some(Verb::Delete));
    assert_eq!(Verb::from_str("HEAD"), Some(Verb::Head));
    assert_eq!(Verb::from_str("OPTIONS"), None);
    assert_eq!(Verb::from_str("get"), None); // case-sensitive
}

#[test]
fn test_verb_as_str_roundtrip() {
    for verb in [Verb::Get, Verb::Post, Verb::Put, Verb::Delete, Verb::Head] {
        assert_eq!(Verb::from_str(verb.as_str()), Some(verb));
    }
}

#[test]
fn test_request_param_lookup() {
    let mut params = HashMap::new();
    params.insert("mode".to_string(), "Spa".to_string());

    let req = Request {
        verb: Verb::Post,
        path: "/mode".to_string(),
        params,
    };

    assert_eq!(req.param("mode"), Some("Spa"));
    assert_eq!(req.param("missing"), None);
}
