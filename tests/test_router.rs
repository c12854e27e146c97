use beacon::http::reply::{Reply, Status};
use beacon::http::request::{Method, RequestBuilder};
use beacon::router::{FnRoute, Route, Session};

/// A route that answers with its own mount point and the rewritten URI so
/// tests can observe where dispatch landed.
fn echo_route(mount: &str) -> Box<dyn Route> {
    let tag = mount.to_string();
    Box::new(FnRoute::new(mount, move |_, req| {
        Reply::ok(format!("{tag} {}", req.uri))
    }))
}

fn get(uri: &str) -> beacon::http::request::Request {
    RequestBuilder::new()
        .method(Method::GET)
        .uri(uri)
        .build()
        .unwrap()
}

fn session_with_routes() -> Session {
    let mut session = Session::new();
    session.add_route(echo_route("/"));
    session.add_route(echo_route("/api"));
    session.add_route(echo_route("/api/v2"));
    session
}

#[test]
fn test_longest_prefix_wins() {
    let session = session_with_routes();

    let (route, rewritten) = session.find_best_match("/api/v2/foo").unwrap();
    assert_eq!(route.mount_point(), "/api/v2");
    assert_eq!(rewritten, "/foo");
}

#[test]
fn test_falls_back_to_root_route() {
    let session = session_with_routes();

    let (route, rewritten) = session.find_best_match("/other").unwrap();
    assert_eq!(route.mount_point(), "/");
    assert_eq!(rewritten, "/other");
}

#[test]
fn test_exact_mount_match_rewrites_to_slash() {
    let session = session_with_routes();

    let (route, rewritten) = session.find_best_match("/api").unwrap();
    assert_eq!(route.mount_point(), "/api");
    assert_eq!(rewritten, "/");
}

#[test]
fn test_removal_falls_back_to_next_best_prefix() {
    let mut session = session_with_routes();
    assert!(session.remove_route("/api/v2"));

    let (route, rewritten) = session.find_best_match("/api/v2/foo").unwrap();
    assert_eq!(route.mount_point(), "/api");
    assert_eq!(rewritten, "/v2/foo");

    // Removing an unknown mount point reports false.
    assert!(!session.remove_route("/api/v2"));
}

#[test]
fn test_no_match_without_root_route() {
    let mut session = Session::new();
    session.add_route(echo_route("/api"));

    assert!(session.find_best_match("/other").is_none());
}

#[test]
fn test_add_route_replaces_same_mount_point() {
    let mut session = Session::new();
    session.add_route(echo_route("/api"));
    session.add_route(Box::new(FnRoute::new("/api", |_, _| {
        Reply::ok("replacement")
    })));

    assert_eq!(session.route_count(), 1);
    let reply = session.dispatch(&get("/api/x"));
    assert_eq!(reply.content(), b"replacement");
}

#[test]
fn test_dispatch_hands_route_the_rewritten_uri() {
    let session = session_with_routes();

    let reply = session.dispatch(&get("/api/v2/foo?q=1"));
    assert_eq!(reply.status, Status::Ok);
    assert_eq!(reply.content(), b"/api/v2 /foo?q=1");
}

#[test]
fn test_dispatch_miss_answers_404() {
    let mut session = Session::new();
    session.add_route(echo_route("/api"));

    let reply = session.dispatch(&get("/elsewhere"));
    assert_eq!(reply.status, Status::NotFound);
}
