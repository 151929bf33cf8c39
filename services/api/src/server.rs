use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_chat_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campus_bot::chat::ChatService;
use campus_bot::config::AppConfig;
use campus_bot::error::AppError;
use campus_bot::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data) = args.data.take() {
        config.dataset.path = data;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let chat_service = Arc::new(ChatService::new(config.dataset.path.clone()));

    // The browser widget posts from another origin; mirror the original
    // deployment's permissive CORS.
    let app = with_chat_routes(chat_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data = %config.dataset.path.display(),
        "campus placement chatbot ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
