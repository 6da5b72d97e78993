use crate::cli::ServeArgs;
use crate::infra::{seeded_service, AppState, LogNotificationPublisher};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use teamsfit::config::AppConfig;
use teamsfit::error::AppError;
use teamsfit::telemetry;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (service, _, _) =
        seeded_service(&config.scheduling, LogNotificationPublisher::default());

    let app = with_service_routes(Arc::new(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        conflict_window_minutes = config.scheduling.conflict_window_minutes,
        "teamsfit dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
