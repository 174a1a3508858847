use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use backend_api::{api, build_app, config};


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false);
    tracing_subscriber::registry().with(fmt_layer).with(filter).init();

    // Load the test API once. A failure here must not stop the process:
    // the degraded app serves a diagnostic stub in its place.
    let api_routes = api::load().await;
    if let api::ApiRoutes::Failed(report) = &api_routes {
        tracing::error!("failed to load test API: {}", report.details);
        tracing::error!("cause chain:\n{}", report.traceback);
    }

    let (prom_layer, handle) = PrometheusMetricLayer::pair();

    let app = build_app(api_routes)
        .route("/metrics", get(move || {
            let h = handle.clone();
            async move { h.render() }
        }))
        .layer(prom_layer);

    let settings = config::Settings::from_env();
    let addr = settings.bind_addr();

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
