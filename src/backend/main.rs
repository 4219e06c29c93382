/**
 * XFSocial Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app with the
 * WebSocket endpoint and inspection routes.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match xfsocial::backend::server::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[STARTUP] Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("[STARTUP] Tracing initialized with filter {}", config.log_filter);

    let addr = config.socket_addr();
    let app = xfsocial::backend::server::init::create_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    tracing::info!("[STARTUP] Clients should connect to ws://{}/socket", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin xfsocial-server --features ssr");
    std::process::exit(1);
}
