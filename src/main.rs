use std::sync::Arc;

use serde_json::{Value, json};

use beacon::config::Config;
use beacon::http::reply::Reply;
use beacon::router::{FnRoute, Session};
use beacon::rpc::{RpcError, RpcRoute, RpcServer};
use beacon::server::{Server, SessionFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut rpc = RpcServer::new();
    rpc.register_method("echo", |params| Ok(params.clone()));
    rpc.register_method("subtract", |params| {
        let a = params
            .get("a")
            .and_then(Value::as_i64)
            .ok_or_else(|| RpcError::invalid_params("missing integer param a"))?;
        let b = params
            .get("b")
            .and_then(Value::as_i64)
            .ok_or_else(|| RpcError::invalid_params("missing integer param b"))?;
        Ok(json!(a - b))
    });
    let rpc = Arc::new(rpc);

    let factory: SessionFactory = Arc::new(move || {
        let mut session = Session::new();
        session.add_route(Box::new(RpcRoute::new("/rpc", rpc.clone())));
        session.add_route(Box::new(FnRoute::new("/", |_, _| {
            Reply::ok(b"beacon is running\n".to_vec())
        })));
        session
    });

    let server = Server::bind(Config::default(), factory).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
