#[macro_use]
extern crate tracing;

mod config;
pub mod error;
mod extractors;
mod handlers;
mod jwt;
mod membership;
mod middlewares;
mod state;
mod utils;

use crate::{middlewares::middlewares, utils::shutdown_signal};
use axum::{extract::Request, ServiceExt};
pub use config::Config;
pub use jwt::{Claims, Jwt, JwtTrait};
pub use state::*;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    let routes = handlers::routes::<S>(state.clone());
    let app = NormalizePathLayer::trim_trailing_slash().layer(middlewares(state, routes));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
