use crate::Result;

/// Initialize logging/tracing for the service.
///
/// `RUST_LOG` overrides the default filter. The `log` records emitted by
/// actix's request logger are picked up through tracing's log bridge.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    // Default: info for our crates, warn for everything else.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tgi=info,tgi_core=info,tgi_telegram=info,tgi_api=info,actix_web=info,{service_name}=info"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .init();

    Ok(())
}
