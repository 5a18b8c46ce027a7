mod config;
mod middleware;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        login_prefix = %config.routes.login_prefix,
        protected = ?config.routes.protected_prefixes,
        "route rules loaded"
    );
    if config.routes_differ_from_client() {
        tracing::warn!("route rules differ from the built-in defaults; client route guards still use the defaults");
    }

    let state = state::AppState::new(config.routes);
    let app = match routes::leptos_app(state, config.site_root.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "frontend init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
