use anyhow::Context;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;
use virobel_api::ApiContext;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .json()
        .init();

    let ctx = ApiContext::new().await?;

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Starting Virobel consultation Lambda function");

        return run(service_fn(|event: Request| {
            let ctx = ctx.clone();
            async move { virobel_api::handler(ctx, event).await }
        }))
        .await;
    }

    let bind_addr = ctx.config.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    info!(addr = %bind_addr, "Starting Virobel consultation server");

    axum::serve(listener, virobel_api::router(ctx))
        .await
        .context("Server error")?;

    Ok(())
}
