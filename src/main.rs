/**
 * Auth Server Entry Point
 *
 * This is the main entry point for the authentication backend. It loads
 * the environment, initializes tracing, assembles the app, and serves it.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    // One read of the environment; everything downstream gets this value
    let config = authgate::server::config::Config::from_env();
    let port = config.server_port;

    let app = authgate::server::init::create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("Server Is Running On Port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
