use lambda_http::{Error, Request, run, service_fn};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use usend_vendor::VendorContext;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON logs for CloudWatch; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let ctx = VendorContext::from_env()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        relay_url = %ctx.config.relay_url,
        "Starting usend vendor"
    );

    run(service_fn(move |event: Request| {
        let ctx = Arc::clone(&ctx);
        async move { usend_vendor::handler(ctx, event).await }
    }))
    .await
}
