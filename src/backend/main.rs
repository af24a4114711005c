/**
 * Club Site Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration, prepares the
 * data directory and serves the API.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match clubsite::backend::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("FATAL ERROR: invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let port = config.port;

    let app = clubsite::backend::create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend server running on http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin clubsite-server --features ssr");
    std::process::exit(1);
}
