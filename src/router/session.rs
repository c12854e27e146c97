use std::collections::HashMap;

use crate::http::reply::Reply;
use crate::http::request::Request;
use crate::router::Route;

/// Per-connection application state: the route registry.
///
/// A session is created by the server when a connection is accepted and
/// lives exactly as long as that connection. It exclusively owns its routes;
/// registering a route under an existing mount point replaces the previous
/// one.
#[derive(Default)]
pub struct Session {
    routes: HashMap<String, Box<dyn Route>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route under its mount point, replacing any previous route
    /// with the same mount point.
    pub fn add_route(&mut self, route: Box<dyn Route>) {
        self.routes.insert(route.mount_point().to_string(), route);
    }

    /// Removes the route registered under `mount_point`, if any.
    pub fn remove_route(&mut self, mount_point: &str) -> bool {
        self.routes.remove(mount_point).is_some()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Finds the registered route whose mount point is the longest prefix of
    /// `path`, along with the route-relative remainder of the path.
    ///
    /// Mount points are unique, so at most one route can claim the longest
    /// matching length. The remainder always starts with `/`; a path equal
    /// to its mount point rewrites to `/`.
    pub fn find_best_match(&self, path: &str) -> Option<(&dyn Route, String)> {
        let route = self
            .routes
            .iter()
            .filter(|(mount, _)| path.starts_with(mount.as_str()))
            .max_by_key(|(mount, _)| mount.len())
            .map(|(_, route)| route.as_ref())?;

        let suffix = &path[route.mount_point().len()..];
        let rewritten = if suffix.starts_with('/') {
            suffix.to_string()
        } else {
            format!("/{suffix}")
        };
        Some((route, rewritten))
    }

    /// Resolves a request to the most specific route and invokes it with the
    /// URI rewritten relative to the mount point. A miss answers 404.
    pub fn dispatch(&self, request: &Request) -> Reply {
        match self.find_best_match(&request.uri) {
            Some((route, rewritten)) => {
                tracing::debug!(
                    mount = route.mount_point(),
                    uri = %request.uri,
                    rewritten = %rewritten,
                    "dispatching request"
                );
                route.handle(self, &request.with_uri(rewritten))
            }
            None => {
                tracing::debug!(uri = %request.uri, "no route matches");
                Reply::not_found()
            }
        }
    }
}
