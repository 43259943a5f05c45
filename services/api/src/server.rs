use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_aura_routes;
use aura_meter::config::AppConfig;
use aura_meter::error::AppError;
use aura_meter::telemetry;
use axum::extract::DefaultBodyLimit;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);

    let app = with_aura_routes()
        .layer(Extension(app_state.clone()))
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(
        ?config.environment,
        %addr,
        max_body_bytes = config.server.max_body_bytes,
        "aura scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
