use beacon::http::request::{Headers, Method, RequestBuilder};

#[test]
fn test_method_token_table() {
    let tokens = vec![
        ("GET", Method::GET),
        ("HEAD", Method::HEAD),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
        ("get", Method::INVALID),
        ("BREW", Method::INVALID),
    ];

    for (token, expected) in tokens {
        assert_eq!(Method::from_token(token), expected, "token {token}");
    }
}

#[test]
fn test_method_as_str_round_trip() {
    for method in [Method::GET, Method::POST, Method::DELETE] {
        assert_eq!(Method::from_token(method.as_str()), method);
    }
}

#[test]
fn test_headers_case_insensitive_lookup() {
    let mut headers = Headers::new();
    headers.insert("Content-Type", "application/json");

    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert_eq!(headers.get("CONTENT-TYPE").unwrap(), "application/json");
}

#[test]
fn test_headers_duplicate_key_replaces_in_place() {
    let mut headers = Headers::new();
    headers.insert("Host", "first");
    headers.insert("Accept", "*/*");
    headers.insert("HOST", "second");

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("host").unwrap(), "second");
    let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["host", "accept"]);
}

#[test]
fn test_builder_defaults_and_required_fields() {
    let request = RequestBuilder::new()
        .method(Method::GET)
        .uri("/index")
        .build()
        .unwrap();
    assert_eq!(request.version, "HTTP/1.1");

    assert!(RequestBuilder::new().uri("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_content_length_accessor() {
    let request = RequestBuilder::new()
        .method(Method::POST)
        .uri("/")
        .header("Content-Length", "12")
        .build()
        .unwrap();
    assert_eq!(request.content_length(), 12);

    let request = RequestBuilder::new()
        .method(Method::GET)
        .uri("/")
        .build()
        .unwrap();
    assert_eq!(request.content_length(), 0);
}

#[test]
fn test_keep_alive_defaults() {
    let http11 = RequestBuilder::new()
        .method(Method::GET)
        .uri("/")
        .build()
        .unwrap();
    assert!(http11.keep_alive());

    let http10 = RequestBuilder::new()
        .method(Method::GET)
        .uri("/")
        .version("HTTP/1.0")
        .build()
        .unwrap();
    assert!(!http10.keep_alive());

    let close = RequestBuilder::new()
        .method(Method::GET)
        .uri("/")
        .header("Connection", "close")
        .build()
        .unwrap();
    assert!(!close.keep_alive());
}

#[test]
fn test_with_uri_leaves_original_untouched() {
    let request = RequestBuilder::new()
        .method(Method::GET)
        .uri("/api/v2/foo")
        .header("Host", "example.com")
        .build()
        .unwrap();

    let rewritten = request.with_uri("/foo");
    assert_eq!(rewritten.uri, "/foo");
    assert_eq!(rewritten.header("host").unwrap(), "example.com");
    assert_eq!(request.uri, "/api/v2/foo");
}
