use aquaweb::http::response::{Response, ResponseBuilder, SERVER_NAME, StatusCode};
use aquaweb::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_header_order_is_server_type_length() {
    let response = Response::html("<html></html>");

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Server", "Content-Type", "Content-Length"]);
    assert_eq!(response.header("Server"), Some(SERVER_NAME));
}

#[test]
fn test_default_content_type_is_html() {
    let response = ResponseBuilder::new(StatusCode::Ok).body(b"x".to_vec()).build();
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_explicit_content_type() {
    let response = Response::file("image/x-icon", vec![0, 1, 2, 3]);
    assert_eq!(response.header("Content-Type"), Some("image/x-icon"));
    assert_eq!(response.header("Content-Length"), Some("4"));
}

#[test]
fn test_content_length_matches_body() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok).body(body.clone()).build();

    assert_eq!(
        response.header("Content-Length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    let body = "spa 40°C"; // multi-byte degree sign
    assert_ne!(body.len(), body.chars().count());

    let response = Response::html(body);
    assert_eq!(
        response.header("Content-Length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_error_helpers_have_empty_bodies() {
    for (response, code) in [
        (Response::bad_request(), 400),
        (Response::not_found(), 404),
        (Response::internal_error(), 500),
        (Response::not_implemented(), 501),
    ] {
        assert_eq!(response.status.as_u16(), code);
        assert!(response.body.is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }
}

#[test]
fn test_serialized_status_line_is_http_1_0() {
    let wire = serialize_response(&Response::html("hi"));
    assert!(wire.starts_with(b"HTTP/1.0 200 OK\r\n"));
}

#[test]
fn test_serialized_body_length_matches_content_length() {
    let response = Response::html("<p>pool 81</p>");
    let wire = serialize_response(&response);

    let split = wire
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("blank line missing");
    let body = &wire[split + 4..];

    let declared: usize = response.header("Content-Length").unwrap().parse().unwrap();
    assert_eq!(body.len(), declared);
}

#[test]
fn test_serialized_headers_preserve_order() {
    let wire = serialize_response(&Response::html("x"));
    let text = String::from_utf8(wire).unwrap();

    let server = text.find("Server: ").unwrap();
    let content_type = text.find("Content-Type: ").unwrap();
    let content_length = text.find("Content-Length: ").unwrap();
    assert!(server < content_type && content_type < content_length);
}
