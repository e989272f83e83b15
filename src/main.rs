#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), petdesk::server::ServerError> {
    use petdesk::server::ServerError;
    use petdesk::server::config::ServerConfig;
    use petdesk::server::routes::leptos_app;

    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let app = leptos_app()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "petdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {}
