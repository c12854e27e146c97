use crate::http::reply::Reply;
use crate::http::request::Request;
use crate::router::Session;

/// A handler bound to a URI mount point.
///
/// Routes are registered on a [`Session`] and invoked with a request whose
/// URI has been rewritten relative to the mount point. Implementations never
/// hold a reference back to their owning session.
pub trait Route: Send + Sync {
    /// The URI prefix this route is registered under.
    fn mount_point(&self) -> &str;

    /// Handles one request and produces the reply to write back.
    fn handle(&self, session: &Session, request: &Request) -> Reply;
}

/// A route backed by a plain closure, for handlers that need no state of
/// their own.
pub struct FnRoute<F>
where
    F: Fn(&Session, &Request) -> Reply + Send + Sync,
{
    mount_point: String,
    handler: F,
}

impl<F> FnRoute<F>
where
    F: Fn(&Session, &Request) -> Reply + Send + Sync,
{
    pub fn new(mount_point: impl Into<String>, handler: F) -> Self {
        Self {
            mount_point: mount_point.into(),
            handler,
        }
    }
}

impl<F> Route for FnRoute<F>
where
    F: Fn(&Session, &Request) -> Reply + Send + Sync,
{
    fn mount_point(&self) -> &str {
        &self.mount_point
    }

    fn handle(&self, session: &Session, request: &Request) -> Reply {
        (self.handler)(session, request)
    }
}
